pub mod rotation_service;
pub mod template_service;

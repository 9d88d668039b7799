pub mod rotation_service_trait;
pub mod template_service_trait;

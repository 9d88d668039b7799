pub mod queue_repository;
pub mod smtp_repository;

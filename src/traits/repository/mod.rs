pub mod queue_repository_trait;
pub mod smtp_repository_trait;

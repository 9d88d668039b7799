pub mod config;
pub mod mail_config;
pub mod smtp_config;

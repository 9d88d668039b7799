pub mod env_config;

use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{mail_config::*, smtp_config::*};

#[derive(Debug)]
pub struct Config {
    pub smtp: Arc<SmtpConfig>,
    pub mail: Arc<MailConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigNotSafe {
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

impl From<ConfigNotSafe> for Config {
    fn from(config: ConfigNotSafe) -> Self {
        Config {
            smtp: Arc::new(config.smtp),
            mail: Arc::new(config.mail),
        }
    }
}

#[doc = "Function to initialize System configuration information instances"]
/// # Arguments
/// * `config_path` - Path of the toml file holding the `[smtp]` and `[mail]` tables
///
/// # Returns
/// * Result<Config, anyhow::Error>
pub fn initialize_server_config(config_path: &str) -> Result<Config, anyhow::Error> {
    info!("initialize_server_config() START!");

    let system_config: ConfigNotSafe = read_toml_from_file::<ConfigNotSafe>(config_path)
        .with_context(|| {
            format!(
                "[initialize_server_config] Failed to retrieve information 'system_config' from '{}'",
                config_path
            )
        })?;

    Ok(Config::from(system_config))
}

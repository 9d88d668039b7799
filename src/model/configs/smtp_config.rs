use crate::common::*;

fn default_tls() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct SmtpConfig {
    pub smtp_name: String,
    #[serde(default)]
    pub port: Option<u16>,
    /* false -> plain connection, for a local relay such as Mailpit */
    #[serde(default = "default_tls")]
    pub tls: bool,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_pw: Option<String>,
}

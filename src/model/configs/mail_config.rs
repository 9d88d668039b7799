use crate::common::*;

fn default_sender() -> String {
    "your_email@example.com".to_string()
}

fn default_subject() -> String {
    "Your Daily Message".to_string()
}

fn default_template_name() -> String {
    "daily-spotify-email".to_string()
}

#[doc = "Fixed parts of the daily email: who sends it, its subject and which template renders the body."]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct MailConfig {
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_template_name")]
    pub template_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        MailConfig {
            sender: default_sender(),
            subject: default_subject(),
            template_name: default_template_name(),
        }
    }
}

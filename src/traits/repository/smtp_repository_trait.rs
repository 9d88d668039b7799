use crate::common::*;

use crate::model::email_message::*;

#[async_trait]
pub trait SmtpRepository: Send + Sync {
    async fn send_html_message(&self, message: &EmailMessage) -> Result<(), anyhow::Error>;
}

use crate::common::*;

use crate::model::{configs::smtp_config::*, email_message::*};

use crate::traits::repository::smtp_repository_trait::*;

#[doc = "lettre 의 `AsyncSmtpTransport` 를 감싸서 html 메일을 한 건씩 보내주는 저장소"]
pub struct SmtpRepositoryImpl {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRepositoryImpl {
    #[doc = r#"
        Builds the SMTP transport from the `[smtp]` config table.

        1. `tls = true`  -> `relay()` (implicit TLS towards a public relay such as gmail)
        2. `tls = false` -> `builder_dangerous()` (plain connection, for Mailpit or another local relay)
        3. Credentials are attached only when both id and password are present.

        # Arguments
        * `smtp_config` - SMTP server configuration information

        # Returns
        * Result<Self, anyhow::Error>
    "#]
    pub fn new(smtp_config: &SmtpConfig) -> Result<Self, anyhow::Error> {
        let mut builder = if *smtp_config.tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_config.smtp_name().as_str())
                .map_err(|e| {
                    anyhow!(
                        "[SmtpRepositoryImpl::new] Invalid relay '{}': {:?}",
                        smtp_config.smtp_name(),
                        e
                    )
                })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp_config.smtp_name().as_str())
        };

        if let Some(port) = smtp_config.port() {
            builder = builder.port(*port);
        }

        if let (Some(id), Some(pw)) = (smtp_config.credential_id(), smtp_config.credential_pw()) {
            builder = builder.credentials(Credentials::new(id.to_string(), pw.to_string()));
        }

        Ok(SmtpRepositoryImpl {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl SmtpRepository for SmtpRepositoryImpl {
    #[doc = "수신자에게 html 형식의 이메일을 보내주는 함수"]
    async fn send_html_message(&self, message: &EmailMessage) -> Result<(), anyhow::Error> {
        let from: Mailbox = message
            .from()
            .parse()
            .map_err(|e| anyhow!("invalid sender address '{}': {}", message.from(), e))?;

        let to: Mailbox = message
            .to()
            .parse()
            .map_err(|e| anyhow!("invalid recipient address '{}': {}", message.to(), e))?;

        let email: Message = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject().as_str())
            .multipart(
                MultiPart::alternative()
                    .singlepart(SinglePart::html(message.html_body().to_string())),
            )
            .map_err(|e| anyhow!("failed to build the message: {}", e))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| anyhow!("{}", e))?;

        Ok(())
    }
}

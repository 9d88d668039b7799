use crate::common::*;

use crate::enums::rotation_error::*;

use crate::model::{
    configs::mail_config::*, email_message::*, recipient::*, recipient_queue::*,
};

use crate::traits::repository::{queue_repository_trait::*, smtp_repository_trait::*};
use crate::traits::service::{rotation_service_trait::*, template_service_trait::*};

#[derive(new)]
pub struct RotationServiceImpl<Q: QueueRepository, T: TemplateService, S: SmtpRepository> {
    queue_repository: Arc<Q>,
    template_service: Arc<T>,
    smtp_repository: Arc<S>,
    mail_config: Arc<MailConfig>,
}

impl<Q, T, S> RotationServiceImpl<Q, T, S>
where
    Q: QueueRepository,
    T: TemplateService,
    S: SmtpRepository,
{
    #[doc = "Renders the configured template for `recipient` and wraps it into an email."]
    fn compose_message(&self, recipient: &Recipient) -> Result<EmailMessage, RotationError> {
        let html_form_map: HashMap<String, String> =
            HashMap::from([("name".to_string(), recipient.first_name().to_string())]);

        let html_body: String = self
            .template_service
            .render_html(self.mail_config.template_name(), &html_form_map)
            .map_err(|e| RotationError::Template {
                recipient: recipient.clone(),
                reason: format!("{:#}", e),
            })?;

        Ok(EmailMessage::new(
            self.mail_config.sender().to_string(),
            recipient.email().to_string(),
            self.mail_config.subject().to_string(),
            html_body,
        ))
    }

    #[doc = r#"
        Sends the email to the head of `queue` and returns the queue to persist next
        together with the outcome of the delivery.

        1. Split off the head recipient
        2. Render and compose the message
        3. Attempt delivery once
        4. Success -> head goes to the back, failure -> head goes back to the front

        An `Err` means nothing was attempted and nothing must be written.
    "#]
    async fn rotate(
        &self,
        queue: RecipientQueue,
    ) -> Result<(RecipientQueue, RunResult), RotationError> {
        let (current, remaining) = queue.dequeue().ok_or(RotationError::EmptyQueue)?;

        let message: EmailMessage = self.compose_message(&current)?;

        match self.smtp_repository.send_html_message(&message).await {
            Ok(_) => {
                info!(
                    "[RotationServiceImpl::rotate] Email sent successfully: {}",
                    current.email()
                );
                Ok((remaining.rotated(current.clone()), Ok(current)))
            }
            Err(e) => {
                error!(
                    "[RotationServiceImpl::rotate] Failed to send email to {}: {:?}",
                    current.email(),
                    e
                );
                let failure: RotationError = RotationError::Delivery {
                    recipient: current.clone(),
                    reason: format!("{:#}", e),
                };
                Ok((remaining.restored(current), Err(failure)))
            }
        }
    }
}

#[async_trait]
impl<Q, T, S> RotationService for RotationServiceImpl<Q, T, S>
where
    Q: QueueRepository,
    T: TemplateService,
    S: SmtpRepository,
{
    async fn run_once(&self) -> RunResult {
        let queue: RecipientQueue = self.queue_repository.load_queue()?;
        info!(
            "[RotationServiceImpl::run_once] {} recipient(s) in the list",
            queue.len()
        );

        let (next_queue, outcome) = self.rotate(queue).await?;

        if let Err(e) = self.queue_repository.save_queue(&next_queue) {
            if let Err(delivery_err) = &outcome {
                error!("[RotationServiceImpl::run_once] {}", delivery_err);
            }
            return Err(e);
        }

        outcome
    }
}

use crate::common::*;

use crate::model::recipient::*;

#[doc = "Outcome of one rotation run: the recipient who got the email, or why nobody did."]
pub type RunResult = Result<Recipient, RotationError>;

#[doc = r#"
    Every way a rotation run can end without a successful send.

    `EmptyQueue`, `MalformedQueue` and `QueueRead` happen before anything is
    touched. `Template` happens before the delivery attempt and also leaves the
    list file alone. `Delivery` is reported after the recipient has been put
    back at the head of the list.
"#]
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("No recipients found in the list.")]
    EmptyQueue,

    #[error("The recipient list at {path} is malformed. Error: {reason}.")]
    MalformedQueue { path: String, reason: String },

    #[error("Could not read the recipient list at {path}. Error: {reason}.")]
    QueueRead { path: String, reason: String },

    #[error("Could not render the email for {}. Error: {reason}.", .recipient.email())]
    Template { recipient: Recipient, reason: String },

    #[error("Could not send the email to {}. Error: {reason}.", .recipient.email())]
    Delivery { recipient: Recipient, reason: String },

    #[error("Could not save the recipient list at {path}. Error: {reason}.")]
    QueueWrite { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_message_matches_cli_output() {
        assert_eq!(
            RotationError::EmptyQueue.to_string(),
            "No recipients found in the list."
        );
    }

    #[test]
    fn delivery_message_names_the_recipient_address() {
        let err: RotationError = RotationError::Delivery {
            recipient: Recipient::new("Toto".to_string(), "toto@test.com".to_string()),
            reason: "Connection refused".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Could not send the email to toto@test.com. Error: Connection refused."
        );
    }
}

use crate::common::*;

use crate::model::recipient::*;

#[doc = r#"
    Ordered list of recipients. The head is the next one to receive the email.

    The queue is a plain value: a run takes it by value, splits off the head
    with `dequeue`, and hands back the next state with `rotated` (delivery
    succeeded) or `restored` (delivery failed).
"#]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct RecipientQueue {
    recipients: VecDeque<Recipient>,
}

impl RecipientQueue {
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipient> {
        self.recipients.iter()
    }

    #[doc = "Splits the queue into its head and the remaining recipients. `None` when empty."]
    pub fn dequeue(mut self) -> Option<(Recipient, RecipientQueue)> {
        let head: Recipient = self.recipients.pop_front()?;
        Some((head, self))
    }

    #[doc = "Puts `recipient` at the back, after everyone still waiting."]
    pub fn rotated(mut self, recipient: Recipient) -> Self {
        self.recipients.push_back(recipient);
        self
    }

    #[doc = "Puts `recipient` back at the front so the next run picks it first."]
    pub fn restored(mut self, recipient: Recipient) -> Self {
        self.recipients.push_front(recipient);
        self
    }
}

impl From<Vec<Recipient>> for RecipientQueue {
    fn from(recipients: Vec<Recipient>) -> Self {
        RecipientQueue {
            recipients: recipients.into(),
        }
    }
}

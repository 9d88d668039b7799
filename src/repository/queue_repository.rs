use crate::common::*;

use crate::enums::rotation_error::*;
use crate::model::{recipient::*, recipient_queue::*};
use crate::traits::repository::queue_repository_trait::*;
use crate::utils_modules::io_utils::*;

#[doc = "Recipient list kept as a json array of `{name, email}` objects in a single file."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct QueueRepositoryImpl {
    queue_path: PathBuf,
}

impl QueueRepositoryImpl {
    fn path_str(&self) -> String {
        self.queue_path.display().to_string()
    }
}

impl QueueRepository for QueueRepositoryImpl {
    #[doc = r#"
        Reads the recipient list from disk.

        A missing file, an empty file and a json `null` all read as an empty
        queue. Anything else that is not an array of recipient records is
        reported as `MalformedQueue`.
    "#]
    fn load_queue(&self) -> Result<RecipientQueue, RotationError> {
        let content: String = match read_to_string_if_exists(&self.queue_path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                warn!(
                    "[QueueRepositoryImpl::load_queue] '{}' does not exist.",
                    self.path_str()
                );
                return Ok(RecipientQueue::default());
            }
            Err(e) => {
                return Err(RotationError::QueueRead {
                    path: self.path_str(),
                    reason: e.to_string(),
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(RecipientQueue::default());
        }

        let recipients: Option<Vec<Recipient>> =
            serde_json::from_str(&content).map_err(|e| RotationError::MalformedQueue {
                path: self.path_str(),
                reason: e.to_string(),
            })?;

        Ok(RecipientQueue::from(recipients.unwrap_or_default()))
    }

    fn save_queue(&self, queue: &RecipientQueue) -> Result<(), RotationError> {
        write_json_pretty_to_file(&self.queue_path, queue).map_err(|e| {
            RotationError::QueueWrite {
                path: self.path_str(),
                reason: format!("{:#}", e),
            }
        })?;

        info!(
            "[QueueRepositoryImpl::save_queue] {} recipient(s) written to '{}'",
            queue.len(),
            self.path_str()
        );

        Ok(())
    }
}

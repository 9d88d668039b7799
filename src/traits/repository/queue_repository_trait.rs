use crate::common::*;

use crate::enums::rotation_error::*;
use crate::model::recipient_queue::*;

pub trait QueueRepository: Send + Sync {
    fn load_queue(&self) -> Result<RecipientQueue, RotationError>;
    fn save_queue(&self, queue: &RecipientQueue) -> Result<(), RotationError>;
}

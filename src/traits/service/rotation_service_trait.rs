use crate::common::*;

use crate::enums::rotation_error::*;

#[async_trait]
pub trait RotationService: Send + Sync {
    async fn run_once(&self) -> RunResult;
}

use crate::errors::Result;
use crate::targets::targets_model::{NewTarget, StoredTarget, TargetInput};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for target repository operations
///
/// Stored targets are append-only: there is no update or delete.
#[async_trait]
pub trait TargetRepositoryTrait: Send + Sync {
    fn load_targets(&self) -> Result<Vec<StoredTarget>>;
    async fn append_target(&self, new_target: NewTarget) -> Result<StoredTarget>;
}

/// Trait for target service operations
#[async_trait]
pub trait TargetServiceTrait: Send + Sync {
    fn get_targets(&self) -> Result<Vec<StoredTarget>>;
    fn preview_target(&self, input: &TargetInput, today: NaiveDate) -> Result<NewTarget>;
    async fn create_target(&self, input: TargetInput, today: NaiveDate) -> Result<StoredTarget>;
}

use tabungan_core::targets::{NewTarget, StoredTarget, TargetRepositoryTrait};
use tabungan_core::Result;

use crate::errors::StorageError;
use async_trait::async_trait;
use chrono::Utc;

use std::sync::RwLock;
use uuid::Uuid;

/// Append-only list of stored targets.
///
/// Appends take the write lock, so concurrent submissions are serialized.
#[derive(Default)]
pub struct TargetRepository {
    targets: RwLock<Vec<StoredTarget>>,
}

impl TargetRepository {
    pub fn new() -> Self {
        TargetRepository::default()
    }
}

#[async_trait]
impl TargetRepositoryTrait for TargetRepository {
    fn load_targets(&self) -> Result<Vec<StoredTarget>> {
        let targets = self
            .targets
            .read()
            .map_err(|_| StorageError::LockPoisoned("targets"))?;
        Ok(targets.clone())
    }

    async fn append_target(&self, new_target: NewTarget) -> Result<StoredTarget> {
        let stored = StoredTarget::from_new(
            Uuid::new_v4().to_string(),
            new_target,
            Utc::now().naive_utc(),
        );

        let mut targets = self
            .targets
            .write()
            .map_err(|_| StorageError::LockPoisoned("targets"))?;
        targets.push(stored.clone());
        log::debug!("Appended target {} ({} stored)", stored.id, targets.len());

        Ok(stored)
    }
}

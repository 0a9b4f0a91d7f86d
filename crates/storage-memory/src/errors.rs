//! Storage-specific error types for in-memory collections.

use thiserror::Error;
use tabungan_core::errors::Error;

/// Storage-specific errors.
///
/// These errors are internal to the storage layer and are converted to
/// `tabungan_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Lock poisoned while accessing {0}")]
    LockPoisoned(&'static str),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Repository(err.to_string())
    }
}

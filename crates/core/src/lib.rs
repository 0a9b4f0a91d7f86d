//! Tabungan Core - savings target validation and commitment calculation.
//!
//! This crate holds the field validators, the commitment calculator, and the
//! service that ties them to a storage-agnostic repository trait implemented
//! by the `storage-memory` crate.

pub mod constants;
pub mod errors;
pub mod targets;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

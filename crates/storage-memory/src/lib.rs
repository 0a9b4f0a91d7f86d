//! In-memory storage implementation for Tabungan.
//!
//! Implements the repository traits defined in `tabungan-core` on top of
//! process-local collections. Nothing survives a restart.
//!
//! ```text
//!       core (domain)
//!             │
//!             ▼
//!  storage-memory (this crate)
//!             │
//!             ▼
//!     RwLock<Vec<_>> in RAM
//! ```

pub mod errors;

// Repository implementations
pub mod targets;

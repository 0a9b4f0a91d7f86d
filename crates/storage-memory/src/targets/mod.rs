//! In-memory storage implementation for targets.

mod repository;

pub use repository::TargetRepository;

//! Targets module - validation, commitment calculation, services, and traits.

mod targets_calculator;
mod targets_model;
mod targets_service;
mod targets_traits;
mod targets_validation;

pub use targets_calculator::compute;
pub use targets_model::{
    CommitmentResult, NewTarget, StoredTarget, TargetInput, Tier, ValidatedTarget,
};
pub use targets_service::{validate_target, TargetService};
pub use targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
pub use targets_validation::{
    latest_start_date, validate_date, validate_name, validate_nominal, validate_term,
};

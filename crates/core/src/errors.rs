//! Core error types for Tabungan.
//!
//! Input-shape failures ([`ValidationError`]) and business-rule rejections
//! ([`BusinessRuleError`]) are kept as separate enums so callers can tell
//! them apart even when both are shown to the user the same way.

use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::{NAME_MAX_LENGTH, NOMINAL_MAX, NOMINAL_MIN};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings target application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BusinessRule(#[from] BusinessRuleError),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation errors for submitted form fields.
///
/// Each variant carries the offending value and, where one applies, the
/// limit it violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("name exceeds maximum length")]
    NameTooLong { length: usize, max: usize },

    #[error("name must contain only letters, digits, and spaces")]
    NameInvalidCharacters { value: String },

    #[error("nominal must be numeric")]
    NominalNotNumeric { value: String },

    #[error("nominal below minimum (100,000)")]
    NominalBelowMinimum { value: String, min: i64 },

    #[error("nominal above maximum (100,000,000)")]
    NominalAboveMaximum { value: String, max: i64 },

    #[error("invalid term")]
    InvalidTerm { value: String },

    #[error("invalid date format")]
    InvalidDateFormat { value: String },

    #[error("start date cannot be before today")]
    DateBeforeToday { date: NaiveDate, today: NaiveDate },

    #[error("start date cannot be more than one year ahead")]
    DateTooFarAhead { date: NaiveDate, latest: NaiveDate },
}

impl ValidationError {
    /// Form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired
            | ValidationError::NameTooLong { .. }
            | ValidationError::NameInvalidCharacters { .. } => "name",
            ValidationError::NominalNotNumeric { .. }
            | ValidationError::NominalBelowMinimum { .. }
            | ValidationError::NominalAboveMaximum { .. } => "nominal",
            ValidationError::InvalidTerm { .. } => "term",
            ValidationError::InvalidDateFormat { .. }
            | ValidationError::DateBeforeToday { .. }
            | ValidationError::DateTooFarAhead { .. } => "startDate",
        }
    }

    pub(crate) fn name_too_long(length: usize) -> Self {
        ValidationError::NameTooLong {
            length,
            max: NAME_MAX_LENGTH,
        }
    }

    pub(crate) fn nominal_below_minimum(value: impl Into<String>) -> Self {
        ValidationError::NominalBelowMinimum {
            value: value.into(),
            min: NOMINAL_MIN,
        }
    }

    pub(crate) fn nominal_above_maximum(value: impl Into<String>) -> Self {
        ValidationError::NominalAboveMaximum {
            value: value.into(),
            max: NOMINAL_MAX,
        }
    }
}

/// Rejections of otherwise well-formed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessRuleError {
    #[error("insurance unavailable for Emergency-Fund category")]
    InsuranceUnavailable { category: String },
}

impl Error {
    /// Form field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::Validation(e) => Some(e.field()),
            Error::BusinessRule(BusinessRuleError::InsuranceUnavailable { .. }) => {
                Some("insurance")
            }
            Error::Repository(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_reasons() {
        assert_eq!(ValidationError::NameRequired.to_string(), "name required");
        assert_eq!(
            ValidationError::name_too_long(51).to_string(),
            "name exceeds maximum length"
        );
        assert_eq!(
            ValidationError::nominal_above_maximum("150000000").to_string(),
            "nominal above maximum (100,000,000)"
        );
        assert_eq!(
            ValidationError::InvalidTerm {
                value: "99".to_string()
            }
            .to_string(),
            "invalid term"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: Error = ValidationError::NameRequired.into();
        assert_eq!(err.to_string(), "name required");

        let err: Error = BusinessRuleError::InsuranceUnavailable {
            category: "Dana Darurat".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "insurance unavailable for Emergency-Fund category"
        );
        assert_eq!(err.field(), Some("insurance"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::NameRequired.field(), "name");
        assert_eq!(
            ValidationError::nominal_below_minimum("50000").field(),
            "nominal"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat {
                value: "25-02-2026".to_string()
            }
            .field(),
            "startDate"
        );
        assert_eq!(Error::Repository("poisoned".to_string()).field(), None);
    }
}

//! Field validators for the target creation form.
//!
//! Every validator is a pure function from the raw submitted string to either
//! the normalized value or the [`ValidationError`] describing the rejection.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::constants::{
    ALLOWED_TERMS, INPUT_DATE_FORMAT, MAX_START_DATE_OFFSET_DAYS, NAME_MAX_LENGTH, NOMINAL_MAX,
    NOMINAL_MIN,
};
use crate::errors::ValidationError;

/// Letters, digits and whitespace only
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s]+$").expect("Invalid regex pattern"));

/// Format: YYYY-MM-DD, ASCII digits only
static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex pattern"));

/// Validates a target name and returns it trimmed.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let length = name.chars().count();
    if length > NAME_MAX_LENGTH {
        return Err(ValidationError::name_too_long(length));
    }

    if !NAME_REGEX.is_match(name) {
        return Err(ValidationError::NameInvalidCharacters {
            value: name.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates the target nominal, tolerating surrounding whitespace.
///
/// Integers that overflow `i64` are out of range rather than non-numeric.
pub fn validate_nominal(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    let nominal = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::nominal_above_maximum(trimmed),
                IntErrorKind::NegOverflow => ValidationError::nominal_below_minimum(trimmed),
                _ => ValidationError::NominalNotNumeric {
                    value: trimmed.to_string(),
                },
            })
        }
    };

    if nominal < NOMINAL_MIN {
        return Err(ValidationError::nominal_below_minimum(trimmed));
    }
    if nominal > NOMINAL_MAX {
        return Err(ValidationError::nominal_above_maximum(trimmed));
    }

    Ok(nominal)
}

/// Validates the term against the whitelist of month counts.
///
/// The raw value must be exactly one of the allowed terms, with no padding.
pub fn validate_term(raw: &str) -> Result<u32, ValidationError> {
    ALLOWED_TERMS
        .iter()
        .copied()
        .find(|term| term.to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidTerm {
            value: raw.to_string(),
        })
}

/// Validates a `YYYY-MM-DD` start date against the window
/// `[today, today + 365 days]`, both ends inclusive.
pub fn validate_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let invalid_format = || ValidationError::InvalidDateFormat {
        value: raw.to_string(),
    };

    if !DATE_SHAPE_REGEX.is_match(raw) {
        return Err(invalid_format());
    }
    let date = NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT).map_err(|_| invalid_format())?;

    if date < today {
        return Err(ValidationError::DateBeforeToday { date, today });
    }

    let latest = latest_start_date(today);
    if date > latest {
        return Err(ValidationError::DateTooFarAhead { date, latest });
    }

    Ok(date)
}

/// Last start date accepted when validating on `today`.
pub fn latest_start_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(MAX_START_DATE_OFFSET_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

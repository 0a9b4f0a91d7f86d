//! Savings target domain models.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DATE_FORMAT;

/// Customer class; only Premium targets are eligible for a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Reguler,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Reguler => "Reguler",
            Tier::Premium => "Premium",
        }
    }

    /// Reads the tier as submitted by the form. Only an exact "Premium"
    /// selects the Premium tier; anything else, including a missing value,
    /// is `Reguler`.
    pub fn from_form(raw: Option<&str>) -> Self {
        match raw {
            Some("Premium") => Tier::Premium,
            _ => Tier::Reguler,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form submission, before any field has been validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetInput {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub nominal: String,
    pub term: String,
    pub start_date: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub insurance: bool,
}

/// A target whose every field passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedTarget {
    pub name: String,
    pub category: String,
    pub nominal: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub tier: Tier,
    pub insurance: bool,
}

/// Monthly installment, discount, insurance fee and total commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentResult {
    pub installment: i64,
    pub installment_exact: Decimal,
    pub discount: i64,
    pub insurance_fee: i64,
    pub total: i64,
    pub insurance_error: bool,
}

/// Input model for appending a target to the repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTarget {
    pub name: String,
    pub category: String,
    pub nominal: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub start_date_display: String,
    pub tier: Tier,
    pub insurance: bool,
    pub installment: i64,
    pub installment_exact: Decimal,
    pub discount: i64,
    pub insurance_fee: i64,
    pub total: i64,
}

impl NewTarget {
    pub fn new(target: ValidatedTarget, commitment: &CommitmentResult) -> Self {
        let start_date_display = target.start_date.format(DISPLAY_DATE_FORMAT).to_string();
        NewTarget {
            name: target.name,
            category: target.category,
            nominal: target.nominal,
            term: target.term,
            start_date: target.start_date,
            start_date_display,
            tier: target.tier,
            insurance: target.insurance,
            installment: commitment.installment,
            installment_exact: commitment.installment_exact,
            discount: commitment.discount,
            insurance_fee: commitment.insurance_fee,
            total: commitment.total,
        }
    }
}

/// Domain model representing a stored target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredTarget {
    pub id: String,
    pub name: String,
    pub category: String,
    pub nominal: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub start_date_display: String,
    pub tier: Tier,
    pub insurance: bool,
    pub installment: i64,
    pub installment_exact: Decimal,
    pub discount: i64,
    pub insurance_fee: i64,
    pub total: i64,
    pub created_at: NaiveDateTime,
}

impl StoredTarget {
    pub fn from_new(id: String, new_target: NewTarget, created_at: NaiveDateTime) -> Self {
        StoredTarget {
            id,
            name: new_target.name,
            category: new_target.category,
            nominal: new_target.nominal,
            term: new_target.term,
            start_date: new_target.start_date,
            start_date_display: new_target.start_date_display,
            tier: new_target.tier,
            insurance: new_target.insurance,
            installment: new_target.installment,
            installment_exact: new_target.installment_exact,
            discount: new_target.discount,
            insurance_fee: new_target.insurance_fee,
            total: new_target.total,
            created_at,
        }
    }
}

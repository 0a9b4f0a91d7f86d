use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabungan_core::targets as core_targets;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Raw nominal as typed by the user; surrounding whitespace is ignored
    pub nominal: String,
    /// One of "3", "6" or "12"
    pub term: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// "Reguler" (default) or "Premium"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default)]
    pub insurance: bool,
}

impl From<TargetRequest> for core_targets::TargetInput {
    fn from(r: TargetRequest) -> Self {
        Self {
            name: r.name,
            category: r.category,
            nominal: r.nominal,
            term: r.term,
            start_date: r.start_date,
            tier: r.tier,
            insurance: r.insurance,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    pub name: String,
    pub category: String,
    pub nominal: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub start_date_display: String,
    pub tier: String,
    pub insurance: bool,
    pub installment: i64,
    #[schema(value_type = f64)]
    pub installment_exact: Decimal,
    pub discount: i64,
    pub insurance_fee: i64,
    pub total: i64,
    pub created_at: NaiveDateTime,
}

impl From<core_targets::StoredTarget> for Target {
    fn from(t: core_targets::StoredTarget) -> Self {
        Self {
            id: t.id,
            name: t.name,
            category: t.category,
            nominal: t.nominal,
            term: t.term,
            start_date: t.start_date,
            start_date_display: t.start_date_display,
            tier: t.tier.to_string(),
            insurance: t.insurance,
            installment: t.installment,
            installment_exact: t.installment_exact,
            discount: t.discount,
            insurance_fee: t.insurance_fee,
            total: t.total,
            created_at: t.created_at,
        }
    }
}

/// A computed target that has not been stored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TargetPreview {
    pub name: String,
    pub category: String,
    pub nominal: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub start_date_display: String,
    pub tier: String,
    pub insurance: bool,
    pub installment: i64,
    #[schema(value_type = f64)]
    pub installment_exact: Decimal,
    pub discount: i64,
    pub insurance_fee: i64,
    pub total: i64,
}

impl From<core_targets::NewTarget> for TargetPreview {
    fn from(t: core_targets::NewTarget) -> Self {
        Self {
            name: t.name,
            category: t.category,
            nominal: t.nominal,
            term: t.term,
            start_date: t.start_date,
            start_date_display: t.start_date_display,
            tier: t.tier.to_string(),
            insurance: t.insurance,
            installment: t.installment,
            installment_exact: t.installment_exact,
            discount: t.discount,
            insurance_fee: t.insurance_fee,
            total: t.total,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: u16,
    /// "validation", "businessRule" or "internal"
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

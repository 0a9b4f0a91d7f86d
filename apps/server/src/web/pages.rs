//! Askama templates for the target form, result and list pages.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;
use tabungan_core::constants::{ALLOWED_TERMS, INPUT_DATE_FORMAT, TARGET_CATEGORIES};
use tabungan_core::targets::{StoredTarget, Tier};

/// Renders a template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}

/// Form page; `error` is the flash message carried over from a rejected
/// submission.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
    pub min_date: String,
    pub max_date: String,
    pub categories: [&'static str; 7],
    pub terms: [u32; 3],
    pub tiers: [Tier; 2],
}

impl IndexTemplate {
    pub fn new(error: Option<String>, today: NaiveDate, latest: NaiveDate) -> Self {
        Self {
            error: error.filter(|m| !m.is_empty()),
            min_date: today.format(INPUT_DATE_FORMAT).to_string(),
            max_date: latest.format(INPUT_DATE_FORMAT).to_string(),
            categories: TARGET_CATEGORIES,
            terms: ALLOWED_TERMS,
            tiers: [Tier::Reguler, Tier::Premium],
        }
    }
}

/// Confirmation page for a freshly stored target.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub target: StoredTarget,
}

/// Every stored target, oldest first.
#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub targets: Vec<StoredTarget>,
}

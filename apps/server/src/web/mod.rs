//! HTML form flow: `/` shows the form, `/create` handles a submission and
//! `/list` shows every stored target.
//!
//! A rejected submission redirects back to `/` with the reason in the
//! `error` query parameter, where it is shown as a flash message.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tabungan_core::targets::{latest_start_date, TargetInput};

use crate::{error::ApiResult, main_lib::AppState};

pub mod pages;

use pages::{HtmlTemplate, IndexTemplate, ListTemplate, ResultTemplate};

/// Fields posted by the creation form.
#[derive(Deserialize, Debug, Default)]
pub struct TargetForm {
    #[serde(default, rename = "nama")]
    pub name: String,
    #[serde(default, rename = "kategori")]
    pub category: String,
    #[serde(default)]
    pub nominal: String,
    #[serde(default, rename = "jangka_waktu")]
    pub term: String,
    #[serde(default, rename = "tanggal_mulai")]
    pub start_date: String,
    #[serde(default, rename = "status")]
    pub tier: Option<String>,
    /// Checkbox value; present as "on" when ticked
    #[serde(default, rename = "asuransi")]
    pub insurance: Option<String>,
}

impl From<TargetForm> for TargetInput {
    fn from(form: TargetForm) -> Self {
        Self {
            name: form.name,
            category: form.category,
            nominal: form.nominal,
            term: form.term,
            start_date: form.start_date,
            tier: form.tier,
            insurance: form.insurance.as_deref() == Some("on"),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct IndexQuery {
    pub error: Option<String>,
}

fn redirect_with_error(message: &str) -> Response {
    let location = format!("/?error={}", urlencoding::encode(message));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> HtmlTemplate<IndexTemplate> {
    let today = state.clock.today();
    HtmlTemplate(IndexTemplate::new(
        query.error,
        today,
        latest_start_date(today),
    ))
}

async fn create(State(state): State<Arc<AppState>>, Form(form): Form<TargetForm>) -> Response {
    let today = state.clock.today();
    match state.target_service.create_target(form.into(), today).await {
        Ok(target) => {
            tracing::info!("Target {} created from form", target.id);
            HtmlTemplate(ResultTemplate { target }).into_response()
        }
        Err(e) => {
            match e.field() {
                Some(field) => tracing::warn!("Form rejected on {}: {}", field, e),
                None => tracing::error!("Form submission failed: {}", e),
            }
            redirect_with_error(&e.to_string())
        }
    }
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<HtmlTemplate<ListTemplate>> {
    let targets = state.target_service.get_targets()?;
    Ok(HtmlTemplate(ListTemplate { targets }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create", post(create))
        .route("/list", get(list))
}

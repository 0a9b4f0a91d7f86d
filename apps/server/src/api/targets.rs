use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ErrorBody, Target, TargetPreview, TargetRequest},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tabungan_core::targets::TargetInput;

fn parse_body(body: Result<Json<TargetRequest>, JsonRejection>) -> ApiResult<TargetRequest> {
    body.map(|Json(request)| request)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

#[utoipa::path(get, path = "/api/v1/targets", responses((status = 200, body = [Target])))]
pub async fn list_targets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Target>>> {
    let targets = state.target_service.get_targets()?;
    Ok(Json(targets.into_iter().map(Target::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/targets",
    request_body = TargetRequest,
    responses(
        (status = 200, body = Target),
        (status = 400, body = ErrorBody, description = "A field failed validation"),
        (status = 422, body = ErrorBody, description = "Insurance requested on an emergency fund"),
    )
)]
pub async fn create_target(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TargetRequest>, JsonRejection>,
) -> ApiResult<Json<Target>> {
    let request = parse_body(body)?;
    let today = state.clock.today();
    let stored = state
        .target_service
        .create_target(request.into(), today)
        .await
        .inspect_err(|e| tracing::warn!("Target rejected: {}", e))?;
    Ok(Json(Target::from(stored)))
}

#[utoipa::path(
    post,
    path = "/api/v1/targets/preview",
    request_body = TargetRequest,
    responses(
        (status = 200, body = TargetPreview),
        (status = 400, body = ErrorBody),
        (status = 422, body = ErrorBody),
    )
)]
pub async fn preview_target(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TargetRequest>, JsonRejection>,
) -> ApiResult<Json<TargetPreview>> {
    let input: TargetInput = parse_body(body)?.into();
    let today = state.clock.today();
    let preview = state.target_service.preview_target(&input, today)?;
    Ok(Json(TargetPreview::from(preview)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/targets", get(list_targets).post(create_target))
        .route("/targets/preview", post(preview_target))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tabungan_core::errors::Error as CoreError;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(CoreError::BusinessRule(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Core(CoreError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Core(CoreError::Validation(_)) | ApiError::BadRequest(_) => "validation",
            ApiError::Core(CoreError::BusinessRule(_)) => "businessRule",
            ApiError::Core(CoreError::Repository(_)) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let field = match &self {
            ApiError::Core(e) => e.field().map(str::to_string),
            _ => None,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            kind: self.kind().to_string(),
            field,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

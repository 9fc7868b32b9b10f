use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use text_completion::CompletionError;
use thiserror::Error;
use tracing::*;

/// Every error answers `{"detail": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("OpenAI API key not found")]
    MissingApiKey,

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Completion(CompletionError::Transport(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Completion(e) if e.is_rate_limited() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            //422 for a missing or mistyped field, 400 for broken json, 415 without content type
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        if status.is_server_error() {
            error!("{} {}", status, detail);
        } else {
            debug!("{} {}", status, detail);
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

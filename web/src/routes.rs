use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use text_completion::{explain_both, CombinedResult, TierResponse};
use tracing::*;

use crate::{ApiError, AppState, TITLE};

#[derive(Deserialize, Serialize, Debug)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct GradeResponse {
    pub grade: u8,
    pub explanation: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct CombinedResponse {
    pub question: String,
    pub grade2_response: GradeResponse,
    pub grade5_response: GradeResponse,
}

impl From<TierResponse> for GradeResponse {
    fn from(r: TierResponse) -> Self {
        GradeResponse {
            grade: r.tier.grade(),
            explanation: r.explanation,
        }
    }
}

impl From<CombinedResult> for CombinedResponse {
    fn from(r: CombinedResult) -> Self {
        CombinedResponse {
            question: r.question,
            grade2_response: r.lower.into(),
            grade5_response: r.upper.into(),
        }
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", TITLE),
        "documentation": {
            "Swagger UI (Interactive)": "/docs",
            "ReDoc": "/redoc"
        },
        "usage": "Send POST request to /explain/ to get explanations for both grade levels"
    }))
}

pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<CombinedResponse>, ApiError> {
    let Json(request) = payload?;
    info!("explain question={}", request.question);

    let handler = state.handler.as_deref().ok_or(ApiError::MissingApiKey)?;
    let result = explain_both(handler, &request.question).await?;
    Ok(Json(result.into()))
}

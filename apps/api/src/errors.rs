use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gateway::GatewayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The closed set mirrors the gateway's failure taxonomy: nothing is retried
/// or recovered locally, every failure goes straight back to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("provider rejected the API credential")]
    Authentication,

    #[error("provider rate limit exceeded")]
    RateLimited,

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Authentication => AppError::Authentication,
            GatewayError::RateLimited => AppError::RateLimited,
            GatewayError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Authentication => (
                StatusCode::UNAUTHORIZED,
                "API 키가 유효하지 않습니다".to_string(),
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "API 호출 한도 초과. 잠시 후 다시 시도해주세요".to_string(),
            ),
            AppError::Upstream(msg) => {
                tracing::error!("Model call failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("AI 분석 중 오류: {msg}"),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}

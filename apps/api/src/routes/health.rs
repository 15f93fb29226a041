use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service identity record. Static — never touches the gateway.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "슬기로운 논문생활 API",
        "status": "running",
        "version": "1.0"
    }))
}

/// GET /health
/// Liveness probe. Static — never touches the gateway.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

use axum::response::Json;
use serde_json::{json, Value};

/// GET /auth - entry point for the unauthenticated flow
pub async fn auth_index() -> Json<Value> {
    Json(json!({ "msg": "Continue towards authentication" }))
}

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /notes - all notes owned by the authenticated user
pub async fn note_list(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let notes = state.notes.list_by_owner(auth_user.user_id).await?;

    Ok(Json(json!({
        "msg": "Data fetched",
        "name": auth_user.name,
        "notes": notes,
    })))
}

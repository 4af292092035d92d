use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use super::parse_user_id;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /auth/user/:id - fetch a user profile.
///
/// The model never serializes its password hash, so the body carries the
/// profile fields only.
pub async fn profile_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_user_id(&id)?;

    let user = state.users.find_by_id(id).await?.ok_or_else(|| {
        ApiError::not_found("Something went wrong, user not found. Please try again later.")
    })?;

    Ok(Json(
        json!({ "msg": "Profile fetched successfully", "user": user }),
    ))
}

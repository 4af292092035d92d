use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_user_id;
use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PATCH /auth/update/:id - partial profile update.
///
/// A password in the payload is replaced by its digest before it reaches
/// the store; the plaintext is never persisted.
pub async fn profile_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_user_id(&id)?;

    if payload.name.is_none() && payload.email.is_none() && payload.password.is_none() {
        return Err(ApiError::bad_request("Nothing to update"));
    }

    let password_hash = match payload.password.as_deref() {
        Some(p) if !p.is_empty() => Some(hash_password(p)?),
        Some(_) => return Err(ApiError::bad_request("Password must not be empty")),
        None => None,
    };

    let updated = state
        .users
        .update_profile(
            id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            password_hash.as_deref(),
        )
        .await?;

    if !updated {
        return Err(ApiError::not_found(
            "Something went wrong, user not found. Please try again later.",
        ));
    }

    Ok(Json(json!({ "msg": "Profile updated successfully" })))
}

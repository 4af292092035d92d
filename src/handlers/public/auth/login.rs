use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    // this body uses "message" rather than "msg"; clients depend on it
    pub message: String,
    pub token: String,
}

/// POST /auth/login - verify credentials and issue a bearer token.
///
/// An unknown email and a wrong password get the same status so the
/// endpoint cannot be used to enumerate accounts by status code alone.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(ApiError::bad_request(
                "Something went wrong. Please give correct credentials and try again later.",
            ))
        }
    };

    let user = state.users.find_by_email(&email).await?.ok_or_else(|| {
        ApiError::bad_request(
            "Something went wrong. Please give correct credentials and try again later.",
        )
    })?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(ApiError::bad_request(
            "Login failed. Invalid credentials, please signup if you haven't.",
        ));
    }

    let token = state.tokens.issue(user.id, &user.name)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token,
    }))
}

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/signup - create a new user account.
///
/// The plaintext password exists only for the duration of this handler;
/// the store only ever sees the digest.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, email, password) = match (payload.name, payload.email, payload.password) {
        (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => {
            (n, e, p)
        }
        _ => return Err(ApiError::bad_request("Please fill all the input fields")),
    };

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::bad_request("Please choose another email"));
    }

    let password_hash = hash_password(&password)?;

    let user = state.users.insert(&name, &email, &password_hash).await?;
    tracing::info!(user_id = %user.id, "user signed up");

    Ok((StatusCode::CREATED, Json(json!({ "msg": "Signup Successful" }))))
}

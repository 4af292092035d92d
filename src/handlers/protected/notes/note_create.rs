use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreateRequest {
    pub user_id: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

/// POST /notes/create - create a note for the authenticated user.
///
/// The body's userId must match the token's identity: a note can never be
/// planted under someone else's account.
pub async fn note_create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<NoteCreateRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (user_id, heading, description, tag) = match (
        payload.user_id,
        payload.heading,
        payload.description,
        payload.tag,
    ) {
        (Some(u), Some(h), Some(d), Some(t))
            if !u.is_empty() && !h.is_empty() && !d.is_empty() && !t.is_empty() =>
        {
            (u, h, d, t)
        }
        _ => return Err(ApiError::bad_request("Please fill all the input fields")),
    };

    let user_id =
        Uuid::parse_str(&user_id).map_err(|_| ApiError::bad_request("Invalid user id"))?;

    if user_id != auth_user.user_id {
        return Err(ApiError::forbidden(
            "Notes can only be created for your own account",
        ));
    }

    state
        .notes
        .insert(user_id, &heading, &description, &tag)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "msg": "Note Created" }))))
}

use axum::{extract::State, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ownership::OwnedNote;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NoteUpdateRequest {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

/// PATCH /notes/update/:id - partial update of an owned note
pub async fn note_update(
    State(state): State<AppState>,
    Extension(OwnedNote(note)): Extension<OwnedNote>,
    Json(payload): Json<NoteUpdateRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.heading.is_none() && payload.description.is_none() && payload.tag.is_none() {
        return Err(ApiError::bad_request("Nothing to update"));
    }

    state
        .notes
        .update(
            note.id,
            payload.heading.as_deref(),
            payload.description.as_deref(),
            payload.tag.as_deref(),
        )
        .await?;

    Ok(Json(json!({ "msg": "Note updated" })))
}

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ownership::OwnedNote;
use crate::state::AppState;

/// DELETE /notes/:id - delete an owned note
pub async fn note_delete(
    State(state): State<AppState>,
    Extension(OwnedNote(note)): Extension<OwnedNote>,
) -> Result<Json<Value>, ApiError> {
    state.notes.delete(note.id).await?;

    Ok(Json(json!({ "msg": "Note deleted" })))
}

use axum::{response::Json, Extension};
use serde_json::{json, Value};

use crate::middleware::ownership::OwnedNote;

/// GET /notes/:id - single note; the ownership gate already loaded and
/// checked it
pub async fn note_get(Extension(OwnedNote(note)): Extension<OwnedNote>) -> Json<Value> {
    Json(json!({ "msg": "Note fetched", "note": note }))
}

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Note loaded by the ownership gate; downstream handlers reuse it
/// instead of querying again
#[derive(Clone, Debug)]
pub struct OwnedNote(pub Note);

const NOT_FOUND_MSG: &str = "Note not found";

/// Ownership middleware for the single-note routes, layered inside the
/// JWT gate.
///
/// A note that does not exist and a note owned by someone else produce the
/// same 404, so these routes cannot be used to probe for other users'
/// notes. A malformed id is treated the same way.
pub async fn note_owner_middleware(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before ownership check"))?;

    let note_id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found(NOT_FOUND_MSG))?;

    match state.notes.find_by_id(note_id).await? {
        Some(note) if note.user_id == auth_user.user_id => {
            request.extensions_mut().insert(OwnedNote(note));
            Ok(next.run(request).await)
        }
        Some(_) => {
            tracing::warn!(
                user_id = %auth_user.user_id,
                note_id = %note_id,
                "ownership check rejected note access"
            );
            Err(ApiError::not_found(NOT_FOUND_MSG))
        }
        None => Err(ApiError::not_found(NOT_FOUND_MSG)),
    }
}

pub mod profile_get;
pub mod profile_update;

pub use profile_get::profile_get;
pub use profile_update::profile_update;

use uuid::Uuid;

use crate::error::ApiError;

/// Shared by the profile handlers: the path id must be a UUID
pub(crate) fn parse_user_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::bad_request("Invalid user id"))
}

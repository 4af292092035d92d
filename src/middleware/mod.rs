pub mod auth;
pub mod ownership;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use ownership::{note_owner_middleware, OwnedNote};

pub mod manager;
pub mod models;
pub mod notes;
pub mod users;

pub use manager::{connect, ensure_schema, health_check, DatabaseError};
pub use notes::NoteRepository;
pub use users::UserRepository;

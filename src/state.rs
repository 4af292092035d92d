use sqlx::PgPool;

use crate::auth::TokenService;
use crate::database::{NoteRepository, UserRepository};

/// Shared application state, read-only after startup.
///
/// Built explicitly in `main` from `AppConfig` and handed to the router;
/// nothing here is reachable as a process global.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenService,
    pub users: UserRepository,
    pub notes: NoteRepository,
}

impl AppState {
    pub fn new(pool: PgPool, tokens: TokenService) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            notes: NoteRepository::new(pool.clone()),
            pool,
            tokens,
        }
    }
}

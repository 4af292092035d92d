pub mod index;
pub mod login;
pub mod signup;

// Re-export handler functions for use in routing
pub use index::auth_index;
pub use login::login;
pub use signup::signup;

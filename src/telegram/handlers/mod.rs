//! Update handlers: dispatcher schema, command router, callback routing

pub mod actions;
pub mod callbacks;
pub mod commands;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use actions::{dispatch, Action};
pub use callbacks::handle_callback;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};

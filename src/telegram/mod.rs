//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod menu;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{handle_callback, schema, HandlerDeps, HandlerError};
pub use menu::show_start_menu;

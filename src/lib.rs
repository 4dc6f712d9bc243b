//! Cheerbot - Telegram entertainment bot
//!
//! This library provides all the core functionality for the Cheerbot bot:
//! command routing, the per-chat trivia session registry, the one-shot
//! reminder scheduler, the content provider adapter, and the Telegram
//! integration.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, and logging
//! - `providers`: Content provider adapter (quotes, jokes, trivia, news, ...)
//! - `trivia`: Per-chat trivia session registry
//! - `reminders`: One-shot reminder scheduler
//! - `telegram`: Bot setup, dispatcher schema, and handlers

pub mod cli;
pub mod core;
pub mod providers;
pub mod reminders;
pub mod telegram;
pub mod trivia;

// Re-export commonly used types for convenience
pub use crate::core::{config, init_logger, AppError, AppResult};
pub use providers::{ContentProviders, ProviderConfig};
pub use reminders::ReminderScheduler;
pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, HandlerError};
pub use trivia::TriviaRegistry;

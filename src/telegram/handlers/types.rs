//! Handler types and dependencies

use std::sync::Arc;

use crate::providers::ContentProviders;
use crate::reminders::ReminderScheduler;
use crate::trivia::TriviaRegistry;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub providers: Arc<ContentProviders>,
    pub trivia: Arc<TriviaRegistry>,
    pub reminders: Arc<ReminderScheduler>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(
        providers: Arc<ContentProviders>,
        trivia: Arc<TriviaRegistry>,
        reminders: Arc<ReminderScheduler>,
    ) -> Self {
        Self {
            providers,
            trivia,
            reminders,
        }
    }
}

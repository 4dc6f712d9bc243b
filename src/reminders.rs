//! One-shot reminder scheduler.
//!
//! Each scheduled reminder owns a sleeping task and an entry in the jobs map.
//! The map entry is the once-token shared by firing and cancellation: whoever
//! removes it wins, so a reminder is delivered at most once and a successful
//! cancel guarantees no delivery. Jobs are in-memory only and do not survive
//! a restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use teloxide::prelude::*;
use tokio::time::Duration;

use crate::core::{AppError, AppResult};

/// Identifier of a scheduled reminder, unique within the process.
pub type JobId = u64;

struct ReminderJob {
    chat_id: ChatId,
    handle: tokio::task::JoinHandle<()>,
}

/// Schedules and delivers one-shot reminders.
///
/// Cheap to clone; clones share the same job table.
#[derive(Clone)]
pub struct ReminderScheduler {
    bot: Bot,
    jobs: Arc<tokio::sync::Mutex<HashMap<JobId, ReminderJob>>>,
    next_id: Arc<AtomicU64>,
}

impl ReminderScheduler {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            jobs: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Schedule a reminder to be delivered after `minutes`.
    ///
    /// Rejects zero and negative delays with a validation error; no job is
    /// created in that case.
    pub async fn schedule(&self, chat_id: ChatId, minutes: i64, message: String) -> AppResult<JobId> {
        if minutes <= 0 {
            return Err(AppError::Validation(
                "Please provide a valid number of minutes.".to_string(),
            ));
        }

        let delay = Duration::from_secs(minutes as u64 * 60);
        Ok(self.schedule_in(chat_id, delay, message).await)
    }

    /// Arm a one-shot timer for `delay` from now.
    ///
    /// The jobs lock is held across the spawn so the timer task cannot observe
    /// the map before its own entry is inserted.
    pub async fn schedule_in(&self, chat_id: ChatId, delay: Duration, message: String) -> JobId {
        let job_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let mut jobs = self.jobs.lock().await;
        let scheduler = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            scheduler.fire(job_id, chat_id, message).await;
        });
        jobs.insert(job_id, ReminderJob { chat_id, handle });

        log::info!(
            "Scheduled reminder job {} for chat {} in {:?}",
            job_id,
            chat_id,
            delay
        );
        job_id
    }

    async fn fire(&self, job_id: JobId, chat_id: ChatId, message: String) {
        // Claim the once-token; a concurrent cancel may have taken it already.
        if self.jobs.lock().await.remove(&job_id).is_none() {
            return;
        }

        if let Err(e) = self.bot.send_message(chat_id, format!("Reminder: {}", message)).await {
            log::error!("Failed to deliver reminder {} to chat {}: {}", job_id, chat_id, e);
        }
    }

    /// Cancel a pending reminder.
    ///
    /// Returns `true` if a pending job was removed, `false` if the job already
    /// fired or was never scheduled.
    pub async fn cancel(&self, job_id: JobId) -> bool {
        match self.jobs.lock().await.remove(&job_id) {
            Some(job) => {
                job.handle.abort();
                log::info!("Cancelled reminder job {} for chat {}", job_id, job.chat_id);
                true
            }
            None => false,
        }
    }

    /// Number of reminders still waiting to fire.
    pub async fn pending_count(&self) -> usize {
        self.jobs.lock().await.len()
    }
}

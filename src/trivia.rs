//! Per-chat trivia session registry.
//!
//! Correlates a sent trivia question to the next button press from the same
//! chat. Each chat holds at most one pending session; sending a new question
//! replaces the old one, and resolving a session removes it before any reply
//! is sent, so duplicate or late presses find nothing to resolve.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use teloxide::types::ChatId;
use tokio::time::{interval, Duration, Instant};

use crate::core::config;

/// A pending trivia question for one chat.
///
/// Read-only after creation; the registry drops it on resolution or expiry.
#[derive(Debug, Clone)]
pub struct TriviaSession {
    correct_answer: String,
    created_at: Instant,
}

impl TriviaSession {
    fn new(correct_answer: String) -> Self {
        Self {
            correct_answer,
            created_at: Instant::now(),
        }
    }

    /// Whether a button payload matches this question's correct answer.
    pub fn is_correct(&self, payload: &str) -> bool {
        self.correct_answer == payload
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Registry of pending trivia sessions, keyed by chat.
pub struct TriviaRegistry {
    sessions: tokio::sync::Mutex<HashMap<ChatId, TriviaSession>>,
    ttl: Duration,
}

impl TriviaRegistry {
    /// Create a registry with the configured session TTL.
    pub fn new() -> Self {
        Self::with_ttl(config::trivia::session_ttl())
    }

    /// Create a registry with a custom session TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: tokio::sync::Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a pending question for a chat.
    ///
    /// A chat holds at most one session: a second question for the same chat
    /// replaces the first.
    pub async fn insert(&self, chat_id: ChatId, correct_answer: String) {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .insert(chat_id, TriviaSession::new(correct_answer))
            .is_some()
        {
            log::info!("Replaced pending trivia session for chat {}", chat_id);
        }
    }

    /// Remove and return the pending session for a chat, if any.
    ///
    /// Removal happens under a single lock acquisition, so of two concurrent
    /// callers for the same chat exactly one receives the session.
    pub async fn take(&self, chat_id: ChatId) -> Option<TriviaSession> {
        self.sessions.lock().await.remove(&chat_id)
    }

    /// Number of chats with a pending question.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Drop sessions older than the TTL. Returns how many were removed.
    pub async fn remove_expired(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.ttl));
        before - sessions.len()
    }

    /// Spawn a background task that periodically evicts expired sessions.
    pub fn spawn_cleanup_task(self: Arc<Self>, check_interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(check_interval);
            loop {
                ticker.tick().await;
                let removed = self.remove_expired().await;
                if removed > 0 {
                    log::info!("Evicted {} expired trivia session(s)", removed);
                }
            }
        })
    }
}

impl Default for TriviaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the answer list for a question: the correct answer inserted at a
/// uniformly random position among the distractors.
pub fn build_choices(correct_answer: &str, distractors: &[String]) -> Vec<String> {
    let mut choices: Vec<String> = distractors.to_vec();
    let slot = rand::thread_rng().gen_range(0..=choices.len());
    choices.insert(slot, correct_answer.to_string());
    choices
}

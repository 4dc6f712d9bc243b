//! Joke provider (Official Joke API).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::AppResult;

/// A two-part joke.
#[derive(Debug, Clone, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl ContentProviders {
    /// Fetch one random joke.
    pub async fn fetch_joke(&self) -> AppResult<Joke> {
        let url = format!("{}/random_joke", self.config().joke_base);
        self.get_json(&url).await
    }
}

//! Trivia question provider (Open Trivia DB).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::{AppError, AppResult};

/// One multiple-choice question with its correct answer and distractors.
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Deserialize)]
struct TriviaResponse {
    results: Vec<TriviaQuestion>,
}

impl ContentProviders {
    /// Fetch one multiple-choice trivia question.
    pub async fn fetch_trivia(&self) -> AppResult<TriviaQuestion> {
        let url = format!("{}/api.php?amount=1&type=multiple", self.config().trivia_base);
        let mut data: TriviaResponse = self.get_json(&url).await?;

        if data.results.is_empty() {
            return Err(AppError::Provider("trivia response contained no questions".to_string()));
        }
        Ok(data.results.remove(0))
    }
}

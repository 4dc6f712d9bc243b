//! Random fact provider (uselessfacts).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::AppResult;

#[derive(Deserialize)]
struct FactResponse {
    text: String,
}

impl ContentProviders {
    /// Fetch one random fact.
    pub async fn fetch_fact(&self) -> AppResult<String> {
        let url = format!("{}/random.json?language=en", self.config().fact_base);
        let fact: FactResponse = self.get_json(&url).await?;
        Ok(fact.text)
    }
}

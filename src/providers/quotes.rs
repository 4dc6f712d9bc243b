//! Quote provider (Quotable API).
//!
//! Serves both `/quote` and `/inspire`; the latter is the same endpoint
//! narrowed to the inspirational tag.

use serde::Deserialize;

use super::ContentProviders;
use crate::core::AppResult;

/// A quote with attribution.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

impl ContentProviders {
    /// Fetch one random quote.
    pub async fn fetch_quote(&self) -> AppResult<Quote> {
        let url = format!("{}/random", self.config().quote_base);
        self.get_json(&url).await
    }

    /// Fetch one random inspirational quote.
    pub async fn fetch_inspirational_quote(&self) -> AppResult<Quote> {
        let url = format!("{}/random?tags=inspirational", self.config().quote_base);
        self.get_json(&url).await
    }
}

//! Meme provider (meme-api).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::{AppError, AppResult};

#[derive(Deserialize)]
struct MemeResponse {
    url: String,
}

impl ContentProviders {
    /// Fetch the image URL of one random meme.
    pub async fn fetch_meme(&self) -> AppResult<url::Url> {
        let api_url = format!("{}/gimme", self.config().meme_base);
        let data: MemeResponse = self.get_json(&api_url).await?;

        url::Url::parse(&data.url).map_err(|e| AppError::Provider(format!("invalid meme image URL: {}", e)))
    }
}

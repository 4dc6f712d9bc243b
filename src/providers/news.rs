//! News headlines provider (NewsAPI top-headlines).

use serde::Deserialize;

use super::ContentProviders;
use crate::core::AppResult;

/// Maximum number of headlines included in a reply.
pub const MAX_HEADLINES: usize = 5;

/// A single headline with its link.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
}

#[derive(Deserialize)]
struct HeadlinesResponse {
    articles: Vec<NewsArticle>,
}

impl ContentProviders {
    /// Fetch up to [`MAX_HEADLINES`] current US top headlines.
    pub async fn fetch_news(&self) -> AppResult<Vec<NewsArticle>> {
        let url = format!(
            "{}/v2/top-headlines?country=us&apiKey={}",
            self.config().news_base,
            self.config().news_api_key,
        );
        let mut data: HeadlinesResponse = self.get_json(&url).await?;

        data.articles.truncate(MAX_HEADLINES);
        Ok(data.articles)
    }
}

//! Content provider adapter
//!
//! One network call per content category, each returning a typed payload or a
//! typed failure. The command router treats every failure here uniformly, so
//! nothing in this module produces user-facing text.

pub mod currency;
pub mod facts;
pub mod jokes;
pub mod memes;
pub mod news;
pub mod quotes;
pub mod trivia;
pub mod weather;

use serde::de::DeserializeOwned;

use crate::core::config;
use crate::core::{AppError, AppResult};

pub use jokes::Joke;
pub use news::NewsArticle;
pub use quotes::Quote;
pub use trivia::TriviaQuestion;
pub use weather::WeatherReport;

/// Provider endpoints and credentials.
///
/// Built from the environment in production; tests construct it directly with
/// every base pointed at a local mock server.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub quote_base: String,
    pub joke_base: String,
    pub fact_base: String,
    pub weather_base: String,
    pub trivia_base: String,
    pub news_base: String,
    pub currency_base: String,
    pub meme_base: String,
    pub news_api_key: String,
    pub weather_api_key: String,
}

impl ProviderConfig {
    /// Read endpoints and API keys from the environment (with built-in defaults).
    pub fn from_env() -> Self {
        Self {
            quote_base: config::api::QUOTE_BASE.clone(),
            joke_base: config::api::JOKE_BASE.clone(),
            fact_base: config::api::FACT_BASE.clone(),
            weather_base: config::api::WEATHER_BASE.clone(),
            trivia_base: config::api::TRIVIA_BASE.clone(),
            news_base: config::api::NEWS_BASE.clone(),
            currency_base: config::api::CURRENCY_BASE.clone(),
            meme_base: config::api::MEME_BASE.clone(),
            news_api_key: config::NEWS_API_KEY.clone(),
            weather_api_key: config::WEATHER_API_KEY.clone(),
        }
    }

    /// All categories rooted at a single base URL. Used by the integration
    /// tests to aim the whole adapter at one wiremock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            quote_base: base.clone(),
            joke_base: base.clone(),
            fact_base: base.clone(),
            weather_base: base.clone(),
            trivia_base: base.clone(),
            news_base: base.clone(),
            currency_base: base.clone(),
            meme_base: base,
            news_api_key: "test-news-key".to_string(),
            weather_api_key: "test-weather-key".to_string(),
        }
    }
}

/// HTTP client over all content providers.
pub struct ContentProviders {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl ContentProviders {
    /// Create the adapter with a timeout-configured client.
    pub fn new(config: ProviderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config::network::timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// Create the adapter from environment configuration.
    pub fn from_env() -> AppResult<Self> {
        Self::new(ProviderConfig::from_env())
    }

    pub(crate) fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// GET `url` and deserialize the JSON body.
    ///
    /// Non-2xx statuses become `AppError::HttpStatus`; transport and decode
    /// errors become `AppError::Http`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Provider returned status {} for {}", status, url);
            return Err(AppError::HttpStatus(status));
        }

        Ok(response.json().await?)
    }
}

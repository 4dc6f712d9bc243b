use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot
/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// API key for the news headlines provider
/// Read from NEWS_API_KEY environment variable
/// An empty key is passed through to the provider and surfaces as a provider failure
pub static NEWS_API_KEY: Lazy<String> = Lazy::new(|| env::var("NEWS_API_KEY").unwrap_or_else(|_| String::new()));

/// API key for the weather provider
/// Read from WEATHER_API_KEY environment variable
pub static WEATHER_API_KEY: Lazy<String> =
    Lazy::new(|| env::var("WEATHER_API_KEY").unwrap_or_else(|_| String::new()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for outbound HTTP requests, Telegram and providers alike (in seconds)
    pub const TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Trivia session configuration
pub mod trivia {
    use super::Duration;

    /// How long an unanswered question stays correlated to its chat (in seconds)
    pub const SESSION_TTL_SECS: u64 = 600; // 10 minutes

    /// Interval between expiry sweeps of the session registry (in seconds)
    pub const CLEANUP_INTERVAL_SECS: u64 = 60;

    /// Session time-to-live duration
    pub fn session_ttl() -> Duration {
        Duration::from_secs(SESSION_TTL_SECS)
    }

    /// Cleanup sweep interval duration
    pub fn cleanup_interval() -> Duration {
        Duration::from_secs(CLEANUP_INTERVAL_SECS)
    }
}

/// Content provider endpoints
///
/// Each base URL can be overridden via its environment variable, which is how
/// the integration tests point the adapter at a local mock server.
pub mod api {
    use super::*;

    /// Quote provider (also serves inspirational quotes via a tag filter)
    pub static QUOTE_BASE: Lazy<String> =
        Lazy::new(|| env::var("QUOTE_API_BASE").unwrap_or_else(|_| "https://api.quotable.io".to_string()));

    /// Joke provider
    pub static JOKE_BASE: Lazy<String> = Lazy::new(|| {
        env::var("JOKE_API_BASE").unwrap_or_else(|_| "https://official-joke-api.appspot.com".to_string())
    });

    /// Random fact provider
    pub static FACT_BASE: Lazy<String> =
        Lazy::new(|| env::var("FACT_API_BASE").unwrap_or_else(|_| "https://uselessfacts.jsph.pl".to_string()));

    /// Weather provider (Visual Crossing timeline API)
    pub static WEATHER_BASE: Lazy<String> = Lazy::new(|| {
        env::var("WEATHER_API_BASE").unwrap_or_else(|_| "https://weather.visualcrossing.com".to_string())
    });

    /// Trivia question provider (Open Trivia DB)
    pub static TRIVIA_BASE: Lazy<String> =
        Lazy::new(|| env::var("TRIVIA_API_BASE").unwrap_or_else(|_| "https://opentdb.com".to_string()));

    /// News headlines provider
    pub static NEWS_BASE: Lazy<String> =
        Lazy::new(|| env::var("NEWS_API_BASE").unwrap_or_else(|_| "https://newsapi.org".to_string()));

    /// Currency exchange rate provider
    pub static CURRENCY_BASE: Lazy<String> = Lazy::new(|| {
        env::var("CURRENCY_API_BASE").unwrap_or_else(|_| "https://api.exchangerate-api.com".to_string())
    });

    /// Meme provider
    pub static MEME_BASE: Lazy<String> =
        Lazy::new(|| env::var("MEME_API_BASE").unwrap_or_else(|_| "https://meme-api.com".to_string()));
}

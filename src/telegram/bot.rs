//! Bot initialization and command definitions
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
///
/// Argument-carrying commands capture the rest of the message line as a single
/// string; their handlers validate the shape before acting.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Here's what I can do:")]
pub enum Command {
    #[command(description = "show the start menu")]
    Start,
    #[command(description = "get a random quote")]
    Quote,
    #[command(description = "hear a random joke")]
    Joke,
    #[command(description = "learn a random fact")]
    Fact,
    #[command(description = "current weather: /weather <city>")]
    Weather(String),
    #[command(description = "play a trivia question")]
    Trivia,
    #[command(description = "latest news headlines")]
    News,
    #[command(description = "convert currency: /currency <amount> <from> <to>")]
    Currency(String),
    #[command(description = "create a poll: /poll <question>")]
    Poll(String),
    #[command(description = "set a reminder: /reminder <minutes> <message>")]
    Reminder(String),
    #[command(description = "get a random meme")]
    Meme,
    #[command(description = "get inspired")]
    Inspire,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (missing token, invalid URL)
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        anyhow::bail!("BOT_TOKEN (or TELOXIDE_TOKEN) environment variable not set");
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    // Check if a local Bot API server is configured
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(token, client).set_api_url(url)
    } else {
        Bot::with_client(token, client)
    };

    Ok(bot)
}

/// Sets up bot commands in the Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

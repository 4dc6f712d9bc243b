use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use cheerbot::cli::{Cli, Commands};
use cheerbot::core::{config, init_logger};
use cheerbot::providers::ContentProviders;
use cheerbot::reminders::ReminderScheduler;
use cheerbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use cheerbot::trivia::TriviaRegistry;

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation, Telegram
/// connectivity).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env before any config static is read
    let _ = dotenv();

    let log_file = match &cli.command {
        Some(Commands::Run { log_file: Some(path) }) => path.clone(),
        _ => config::LOG_FILE_PATH.clone(),
    };
    init_logger(&log_file)?;

    run_bot().await
}

async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let bot = create_bot()?;

    let me = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.username, me.id);

    setup_bot_commands(&bot).await?;

    let providers = Arc::new(ContentProviders::from_env()?);
    let trivia = Arc::new(TriviaRegistry::new());
    let reminders = Arc::new(ReminderScheduler::new(bot.clone()));

    // Evict unanswered trivia questions in the background; runs for the
    // lifetime of the process
    let _trivia_sweeper = Arc::clone(&trivia).spawn_cleanup_task(config::trivia::cleanup_interval());

    let deps = HandlerDeps::new(providers, trivia, reminders);

    log::info!("Bot is running...");
    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

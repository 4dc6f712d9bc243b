//! Canonical actions and the shared dispatch path.
//!
//! Both inbound routes — parsed slash commands and start-menu button presses —
//! are mapped onto [`Action`] and run through one [`dispatch`] call, so a
//! button press and its command twin share a single implementation.
//!
//! `dispatch` is also the uniform failure boundary: a validation failure
//! becomes one usage hint, any provider failure becomes one category-specific
//! apology, and a success sends exactly one message. Raw error details are
//! logged, never shown to the user.

use teloxide::prelude::*;

use super::commands::{
    handle_currency, handle_fact, handle_inspire, handle_joke, handle_meme, handle_news, handle_poll,
    handle_quote, handle_reminder, handle_trivia, handle_weather,
};
use super::types::HandlerDeps;
use crate::core::AppError;
use crate::telegram::bot::Command;
use crate::telegram::menu::show_start_menu;

/// Canonical name of everything the bot can do, shared by the text-command
/// path and the inline-button path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Quote,
    Joke,
    Fact,
    Weather,
    Trivia,
    News,
    Currency,
    Poll,
    Reminder,
    Meme,
    Inspire,
}

impl Action {
    /// Map a parsed command onto its action, splitting off the argument line.
    pub fn from_command(cmd: Command) -> (Self, Option<String>) {
        match cmd {
            Command::Start => (Action::Start, None),
            Command::Quote => (Action::Quote, None),
            Command::Joke => (Action::Joke, None),
            Command::Fact => (Action::Fact, None),
            Command::Weather(arg) => (Action::Weather, Some(arg)),
            Command::Trivia => (Action::Trivia, None),
            Command::News => (Action::News, None),
            Command::Currency(arg) => (Action::Currency, Some(arg)),
            Command::Poll(arg) => (Action::Poll, Some(arg)),
            Command::Reminder(arg) => (Action::Reminder, Some(arg)),
            Command::Meme => (Action::Meme, None),
            Command::Inspire => (Action::Inspire, None),
        }
    }

    /// Map an inline-button payload onto its action.
    pub fn from_payload(payload: &str) -> Option<Self> {
        let action = match payload {
            "start" => Action::Start,
            "quote" => Action::Quote,
            "joke" => Action::Joke,
            "fact" => Action::Fact,
            "weather" => Action::Weather,
            "trivia" => Action::Trivia,
            "news" => Action::News,
            "currency" => Action::Currency,
            "poll" => Action::Poll,
            "reminder" => Action::Reminder,
            "meme" => Action::Meme,
            "inspire" => Action::Inspire,
            _ => return None,
        };
        Some(action)
    }

    /// What the apology message says this action was trying to get.
    fn category(&self) -> &'static str {
        match self {
            Action::Start => "the menu",
            Action::Quote => "a quote",
            Action::Joke => "a joke",
            Action::Fact => "a fact",
            Action::Weather => "the weather",
            Action::Trivia => "a trivia question",
            Action::News => "the latest news",
            Action::Currency => "the exchange rate",
            Action::Poll => "the poll",
            Action::Reminder => "the reminder",
            Action::Meme => "a meme",
            Action::Inspire => "an inspirational quote",
        }
    }
}

/// Run one action for one chat, applying the uniform failure boundary.
pub async fn dispatch(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    action: Action,
    argument: Option<&str>,
) -> ResponseResult<()> {
    log::info!("Dispatching {:?} for chat {}", action, chat_id);

    let result = match action {
        Action::Start => show_start_menu(bot, chat_id).await,
        Action::Quote => handle_quote(bot, deps, chat_id).await,
        Action::Joke => handle_joke(bot, deps, chat_id).await,
        Action::Fact => handle_fact(bot, deps, chat_id).await,
        Action::Weather => handle_weather(bot, deps, chat_id, argument).await,
        Action::Trivia => handle_trivia(bot, deps, chat_id).await,
        Action::News => handle_news(bot, deps, chat_id).await,
        Action::Currency => handle_currency(bot, deps, chat_id, argument).await,
        Action::Poll => handle_poll(bot, chat_id, argument).await,
        Action::Reminder => handle_reminder(bot, deps, chat_id, argument).await,
        Action::Meme => handle_meme(bot, deps, chat_id).await,
        Action::Inspire => handle_inspire(bot, deps, chat_id).await,
    };

    match result {
        Ok(()) => Ok(()),
        // Usage hints were produced before any side effect; send them as-is.
        Err(AppError::Validation(hint)) => {
            bot.send_message(chat_id, hint).await?;
            Ok(())
        }
        // The outbound send itself failed; apologizing would fail the same way.
        Err(AppError::Telegram(e)) => Err(e),
        Err(err) => {
            log::warn!("Handler for {:?} failed for chat {}: {}", action, chat_id, err);
            bot.send_message(
                chat_id,
                format!("Sorry, I couldn't fetch {} at the moment.", action.category()),
            )
            .await?;
            Ok(())
        }
    }
}

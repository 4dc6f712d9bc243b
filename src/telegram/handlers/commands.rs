//! Per-action handler implementations.
//!
//! Each handler validates its input first, performs at most one provider
//! fetch, and sends exactly one message on success. Nothing here talks to the
//! user about errors — that is the dispatcher's job.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, InputPollOption};

use super::types::HandlerDeps;
use crate::core::{AppError, AppResult};
use crate::trivia::build_choices;

const WEATHER_USAGE: &str = "Please provide the city name using the command: /weather <city>";
const CURRENCY_USAGE: &str =
    "Please provide the amount and currency codes using the command: /currency <amount> <from_currency> <to_currency>";
const POLL_USAGE: &str = "Please provide a question for the poll using the command: /poll <question>";
const REMINDER_USAGE: &str =
    "Please provide the number of minutes and reminder message using the command: /reminder <minutes> <message>";

/// Fixed option set for quick polls.
const POLL_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

pub(super) async fn handle_quote(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let quote = deps.providers.fetch_quote().await?;
    bot.send_message(chat_id, format!("{} - {}", quote.content, quote.author))
        .await?;
    Ok(())
}

pub(super) async fn handle_inspire(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let quote = deps.providers.fetch_inspirational_quote().await?;
    bot.send_message(chat_id, format!("{} - {}", quote.content, quote.author))
        .await?;
    Ok(())
}

pub(super) async fn handle_joke(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let joke = deps.providers.fetch_joke().await?;
    bot.send_message(chat_id, format!("{}\n\n{}", joke.setup, joke.punchline))
        .await?;
    Ok(())
}

pub(super) async fn handle_fact(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let fact = deps.providers.fetch_fact().await?;
    bot.send_message(chat_id, fact).await?;
    Ok(())
}

pub(super) async fn handle_weather(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    argument: Option<&str>,
) -> AppResult<()> {
    let city = required_argument(argument, WEATHER_USAGE)?;
    let report = deps.providers.fetch_weather(city).await?;

    bot.send_message(
        chat_id,
        format!(
            "Weather in {}:\nTemperature: {}°C\nDescription: {}\nHumidity: {}%\nWind Speed: {} km/h",
            report.city, report.temperature, report.conditions, report.humidity, report.wind_speed
        ),
    )
    .await?;
    Ok(())
}

pub(super) async fn handle_trivia(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let question = deps.providers.fetch_trivia().await?;
    let choices = build_choices(&question.correct_answer, &question.incorrect_answers);

    let keyboard = InlineKeyboardMarkup::new(
        choices
            .iter()
            .map(|choice| vec![InlineKeyboardButton::callback(choice.clone(), choice.clone())])
            .collect::<Vec<_>>(),
    );

    // Register before sending so the answer buttons are never live without a
    // session; an unanswered leftover is evicted by the TTL sweep.
    deps.trivia.insert(chat_id, question.correct_answer.clone()).await;

    bot.send_message(chat_id, question.question).reply_markup(keyboard).await?;
    Ok(())
}

pub(super) async fn handle_news(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let articles = deps.providers.fetch_news().await?;

    let mut message = String::from("Here are the latest news headlines:\n");
    for (index, article) in articles.iter().enumerate() {
        message.push_str(&format!("\n{}. {}\n{}", index + 1, article.title, article.url));
    }

    bot.send_message(chat_id, message).await?;
    Ok(())
}

pub(super) async fn handle_currency(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    argument: Option<&str>,
) -> AppResult<()> {
    let (amount, from, to) = parse_currency_args(argument)?;
    let converted = deps.providers.convert_currency(amount, &from, &to).await?;

    bot.send_message(chat_id, format!("{} {} = {:.2} {}", amount, from, converted, to))
        .await?;
    Ok(())
}

pub(super) async fn handle_poll(bot: &Bot, chat_id: ChatId, argument: Option<&str>) -> AppResult<()> {
    let question = required_argument(argument, POLL_USAGE)?;

    let options: Vec<InputPollOption> = POLL_OPTIONS.iter().map(|&text| InputPollOption::new(text)).collect();
    bot.send_poll(chat_id, question.to_string(), options).await?;
    Ok(())
}

pub(super) async fn handle_reminder(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    argument: Option<&str>,
) -> AppResult<()> {
    let (minutes, message) = parse_reminder_args(argument)?;
    deps.reminders.schedule(chat_id, minutes, message).await?;

    bot.send_message(chat_id, format!("Reminder set for {} minutes.", minutes))
        .await?;
    Ok(())
}

pub(super) async fn handle_meme(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> AppResult<()> {
    let meme_url = deps.providers.fetch_meme().await?;
    bot.send_photo(chat_id, InputFile::url(meme_url)).await?;
    Ok(())
}

/// Reject an empty or missing argument with the given usage hint.
fn required_argument<'a>(argument: Option<&'a str>, usage: &str) -> AppResult<&'a str> {
    argument
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Validation(usage.to_string()))
}

fn parse_currency_args(argument: Option<&str>) -> AppResult<(f64, String, String)> {
    let raw = required_argument(argument, CURRENCY_USAGE)?;
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(AppError::Validation(CURRENCY_USAGE.to_string()));
    }

    let amount: f64 = parts[0]
        .parse()
        .map_err(|_| AppError::Validation(CURRENCY_USAGE.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::Validation(CURRENCY_USAGE.to_string()));
    }

    Ok((amount, parts[1].to_uppercase(), parts[2].to_uppercase()))
}

fn parse_reminder_args(argument: Option<&str>) -> AppResult<(i64, String)> {
    let raw = required_argument(argument, REMINDER_USAGE)?;
    let (minutes, message) = raw
        .split_once(char::is_whitespace)
        .ok_or_else(|| AppError::Validation(REMINDER_USAGE.to_string()))?;

    let minutes: i64 = minutes
        .parse()
        .map_err(|_| AppError::Validation(REMINDER_USAGE.to_string()))?;

    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::Validation(REMINDER_USAGE.to_string()));
    }

    Ok((minutes, message.to_string()))
}

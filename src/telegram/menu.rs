//! Start menu: welcome message and the inline action grid.
//!
//! Button payloads are the canonical action names, so a button press routes
//! through the same dispatch path as the matching slash command.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::core::AppResult;

const WELCOME_MESSAGE: &str = "🎉 Welcome to Cheerbot! 🎉\n\n\
    I'm here to make your day brighter and keep you entertained. \
    Choose an option below to get started!";

/// Build the start-menu keyboard, two actions per row.
pub fn start_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("🔮 Get a Quote", "quote"),
            InlineKeyboardButton::callback("😂 Hear a Joke", "joke"),
        ],
        vec![
            InlineKeyboardButton::callback("💡 Learn a Fact", "fact"),
            InlineKeyboardButton::callback("🌦️ Weather Info", "weather"),
        ],
        vec![
            InlineKeyboardButton::callback("🧠 Play Trivia", "trivia"),
            InlineKeyboardButton::callback("📰 Latest News", "news"),
        ],
        vec![
            InlineKeyboardButton::callback("💵 Currency Converter", "currency"),
            InlineKeyboardButton::callback("📊 Create a Poll", "poll"),
        ],
        vec![
            InlineKeyboardButton::callback("⏰ Set a Reminder", "reminder"),
            InlineKeyboardButton::callback("😂 Get a Meme", "meme"),
        ],
        vec![InlineKeyboardButton::callback("🌟 Get Inspired", "inspire")],
    ])
}

/// Send the welcome message with the start menu.
pub async fn show_start_menu(bot: &Bot, chat_id: ChatId) -> AppResult<()> {
    bot.send_message(chat_id, WELCOME_MESSAGE)
        .reply_markup(start_menu_keyboard())
        .await?;
    Ok(())
}

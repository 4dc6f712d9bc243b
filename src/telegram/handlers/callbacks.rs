//! Callback query routing.
//!
//! A chat with a pending trivia question claims the next button press from
//! that chat; everything else is treated as a start-menu action and runs
//! through the same dispatch path as the matching slash command. Payloads
//! that are neither are ignored.

use teloxide::prelude::*;

use super::actions::{dispatch, Action};
use super::types::HandlerDeps;

/// Handle an inline-button press.
pub async fn handle_callback(bot: &Bot, deps: &HandlerDeps, q: CallbackQuery) -> ResponseResult<()> {
    // Stop the client-side spinner regardless of what the press means.
    let _ = bot.answer_callback_query(q.id.clone()).await;

    let Some(data) = q.data else {
        return Ok(());
    };
    let Some(chat_id) = q.message.as_ref().map(|m| m.chat().id) else {
        log::debug!("Callback without an originating message, ignoring");
        return Ok(());
    };

    // A pending question correlates to the next press from its chat. The
    // take() removes the session before any reply is sent, so a second press
    // finds no active question.
    if let Some(session) = deps.trivia.take(chat_id).await {
        let reply = if session.is_correct(&data) {
            "Correct! 🎉".to_string()
        } else {
            format!("Oops! The correct answer was {}.", session.correct_answer())
        };
        bot.send_message(chat_id, reply).await?;
        return Ok(());
    }

    match Action::from_payload(&data) {
        Some(action) => dispatch(bot, deps, chat_id, action, None).await,
        None => {
            log::debug!("Ignoring unrecognized callback payload from chat {}: {}", chat_id, data);
            Ok(())
        }
    }
}

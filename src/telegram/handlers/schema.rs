//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::actions::{dispatch, Action};
use super::callbacks::handle_callback;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in the integration
/// tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Recognized commands
        .branch(command_handler(deps_commands))
        // Slash-texts that parsed as no known command
        .branch(unknown_command_handler())
        // Inline keyboard buttons (trivia answers and menu actions)
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands (/start, /quote, /trivia, etc.)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);
                let (action, argument) = Action::from_command(cmd);
                dispatch(&bot, &deps, msg.chat.id, action, argument.as_deref()).await?;
                Ok(())
            }
        },
    ))
}

/// Handler for slash-prefixed text that matched no known command
fn unknown_command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with('/')).unwrap_or(false))
        .endpoint(|bot: Bot, msg: Message| async move {
            log::info!("Unknown command from chat {}: {:?}", msg.chat.id, msg.text());
            bot.send_message(msg.chat.id, "Unknown command.").await?;
            Ok(())
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_callback(&bot, &deps, q).await?;
            Ok(())
        }
    })
}

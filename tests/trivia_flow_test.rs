//! End-to-end trivia flow through the real handlers, with the Telegram API
//! and the trivia provider both mocked.

mod common;

use common::{callback, BotTest};

use cheerbot::telegram::handlers::{dispatch, Action};
use teloxide::types::ChatId;

const QUESTION: &str = "What is the capital of France?";
const CORRECT: &str = "Paris";
const DISTRACTORS: [&str; 3] = ["London", "Berlin", "Madrid"];

async fn ask_question(test: &BotTest, chat_id: i64) {
    test.mock_trivia(QUESTION, CORRECT, &DISTRACTORS).await;
    dispatch(&test.bot, &test.deps, ChatId(chat_id), Action::Trivia, None)
        .await
        .expect("trivia dispatch should succeed");
}

#[tokio::test]
async fn trivia_question_is_sent_with_shuffled_answer_buttons() {
    let test = BotTest::new().await;
    ask_question(&test, 1001).await;

    let sends = test.telegram_requests("sendMessage").await;
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0]["text"].as_str().unwrap(), QUESTION);

    // One button per choice, each carrying its choice text as payload.
    let keyboard = sends[0]["reply_markup"]["inline_keyboard"].as_array().unwrap();
    assert_eq!(keyboard.len(), 4);

    let mut payloads: Vec<String> = keyboard
        .iter()
        .map(|row| row[0]["callback_data"].as_str().unwrap().to_string())
        .collect();
    payloads.sort();

    let mut expected = vec![CORRECT.to_string()];
    expected.extend(DISTRACTORS.iter().map(|d| d.to_string()));
    expected.sort();
    assert_eq!(payloads, expected);

    assert_eq!(test.deps.trivia.len().await, 1);
}

#[tokio::test]
async fn correct_answer_resolves_the_session_exactly_once() {
    let test = BotTest::new().await;
    ask_question(&test, 1001).await;

    // Press the button matching the stored correct answer.
    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback(CORRECT, 1001))
        .await
        .unwrap();

    let texts = test.sent_texts().await;
    assert_eq!(texts.last().unwrap(), "Correct! 🎉");
    assert!(test.deps.trivia.is_empty().await);

    // Re-pressing any answer button yields no trivia-specific response.
    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback(CORRECT, 1001))
        .await
        .unwrap();
    let texts_after = test.sent_texts().await;
    assert_eq!(texts_after.len(), texts.len(), "duplicate press must not answer again");
}

#[tokio::test]
async fn wrong_answer_reveals_the_correct_one() {
    let test = BotTest::new().await;
    ask_question(&test, 1001).await;

    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback("London", 1001))
        .await
        .unwrap();

    let texts = test.sent_texts().await;
    assert_eq!(texts.last().unwrap(), &format!("Oops! The correct answer was {}.", CORRECT));
    assert!(test.deps.trivia.is_empty().await);
}

#[tokio::test]
async fn answers_from_another_chat_do_not_resolve_the_session() {
    let test = BotTest::new().await;
    ask_question(&test, 2001).await;
    let texts_before = test.sent_texts().await;

    // Chat B presses a button with chat A's correct-answer payload.
    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback(CORRECT, 2002))
        .await
        .unwrap();

    // No trivia reply was produced and A's session is still pending.
    assert_eq!(test.sent_texts().await.len(), texts_before.len());
    assert_eq!(test.deps.trivia.len().await, 1);

    // A's own press still resolves normally.
    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback(CORRECT, 2001))
        .await
        .unwrap();
    assert_eq!(test.sent_texts().await.last().unwrap(), "Correct! 🎉");
    assert!(test.deps.trivia.is_empty().await);
}

#[tokio::test]
async fn menu_press_while_question_pending_counts_as_an_answer() {
    let test = BotTest::new().await;
    ask_question(&test, 3001).await;
    let provider_calls_before = test.provider_request_count().await;

    // A pending question claims the next press from its chat, even one whose
    // payload doubles as a menu action.
    cheerbot::telegram::handle_callback(&test.bot, &test.deps, callback("quote", 3001))
        .await
        .unwrap();

    let texts = test.sent_texts().await;
    assert_eq!(texts.last().unwrap(), &format!("Oops! The correct answer was {}.", CORRECT));
    assert!(test.deps.trivia.is_empty().await);
    // The quote provider was never contacted.
    assert_eq!(test.provider_request_count().await, provider_calls_before);
}

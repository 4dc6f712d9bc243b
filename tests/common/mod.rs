//! Shared test harness: mocked Telegram API, mocked content providers, and
//! real handler dependencies wired together.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Me, Message, Update};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cheerbot::providers::{ContentProviders, ProviderConfig};
use cheerbot::reminders::ReminderScheduler;
use cheerbot::telegram::HandlerDeps;
use cheerbot::trivia::TriviaRegistry;

/// Test harness with a mock Telegram server, a mock provider server, and real
/// dependencies pointed at both.
pub struct BotTest {
    pub telegram: MockServer,
    pub providers: MockServer,
    pub bot: Bot,
    pub deps: HandlerDeps,
}

impl BotTest {
    pub async fn new() -> Self {
        let telegram = MockServer::start().await;
        let providers = MockServer::start().await;

        let bot = Bot::new("1234567890:TESTTOKEN").set_api_url(telegram.uri().parse().unwrap());

        let content_providers = Arc::new(
            ContentProviders::new(ProviderConfig::with_base(&providers.uri()))
                .expect("Failed to build provider adapter"),
        );
        let trivia = Arc::new(TriviaRegistry::new());
        let reminders = Arc::new(ReminderScheduler::new(bot.clone()));
        let deps = HandlerDeps::new(content_providers, trivia, reminders);

        let test = Self {
            telegram,
            providers,
            bot,
            deps,
        };
        test.mock_telegram_api().await;
        test
    }

    /// Mock the Telegram API calls the handlers can make.
    async fn mock_telegram_api(&self) {
        let message_result = json!({
            "ok": true,
            "result": {
                "message_id": 42,
                "from": { "id": 987654321, "is_bot": true, "first_name": "TestBot", "username": "test_bot" },
                "chat": { "id": 123456789, "type": "private" },
                "date": 1735992000,
                "text": "Response"
            }
        });

        Mock::given(method("POST"))
            .and(path_regex("/bot[^/]+/sendMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_result.clone()))
            .mount(&self.telegram)
            .await;

        Mock::given(method("POST"))
            .and(path_regex("/bot[^/]+/answerCallbackQuery"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": true })))
            .mount(&self.telegram)
            .await;

        // Catch-all for the remaining methods (sendPhoto, sendPoll, ...); a
        // plain message result deserializes for all of them.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_result))
            .mount(&self.telegram)
            .await;
    }

    /// Bodies of every request made to the given Telegram method.
    pub async fn telegram_requests(&self, method_name: &str) -> Vec<serde_json::Value> {
        let suffix = format!("/{}", method_name);
        self.telegram
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|request| request.url.path().ends_with(&suffix))
            .map(|request| serde_json::from_slice(&request.body).expect("request body should be JSON"))
            .collect()
    }

    /// Raw bodies of every request made to the given Telegram method.
    ///
    /// Methods carrying an `InputFile` (sendPhoto) go out as multipart, so
    /// their bodies are matched as text instead of parsed as JSON.
    pub async fn raw_telegram_requests(&self, method_name: &str) -> Vec<String> {
        let suffix = format!("/{}", method_name);
        self.telegram
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|request| request.url.path().ends_with(&suffix))
            .map(|request| String::from_utf8_lossy(&request.body).to_string())
            .collect()
    }

    /// Texts of every sendMessage call, in order.
    pub async fn sent_texts(&self) -> Vec<String> {
        self.telegram_requests("sendMessage")
            .await
            .iter()
            .map(|body| body["text"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Number of requests the provider mock has received.
    pub async fn provider_request_count(&self) -> usize {
        self.providers.received_requests().await.unwrap().len()
    }

    // ---- provider endpoint mocks -------------------------------------------

    pub async fn mock_quote(&self, content: &str, author: &str) {
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": content, "author": author })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_joke(&self, setup: &str, punchline: &str) {
        Mock::given(method("GET"))
            .and(path("/random_joke"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "setup": setup, "punchline": punchline })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_joke_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/random_joke"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_fact(&self, text: &str) {
        Mock::given(method("GET"))
            .and(path("/random.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": text })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_trivia(&self, question: &str, correct: &str, incorrect: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/api.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response_code": 0,
                "results": [{
                    "question": question,
                    "correct_answer": correct,
                    "incorrect_answers": incorrect,
                }]
            })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_news(&self, titles_and_urls: &[(&str, &str)]) {
        let articles: Vec<_> = titles_and_urls
            .iter()
            .map(|(title, url)| json!({ "title": title, "url": url }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/v2/top-headlines"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": articles })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_currency_rates(&self, from: &str, rates: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/v4/latest/{}", from)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rates": rates })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_meme(&self, image_url: &str) {
        Mock::given(method("GET"))
            .and(path("/gimme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": image_url })))
            .mount(&self.providers)
            .await;
    }

    pub async fn mock_weather(&self, temp: f64, conditions: &str, humidity: f64, windspeed: f64) {
        Mock::given(method("GET"))
            .and(path_regex("^/VisualCrossingWebServices/rest/services/timeline/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "currentConditions": {
                    "temp": temp,
                    "conditions": conditions,
                    "humidity": humidity,
                    "windspeed": windspeed,
                }
            })))
            .mount(&self.providers)
            .await;
    }
}

/// Create a private-chat text message.
pub fn message(text: &str, chat_id: i64) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1735992000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Test", "username": "testuser" },
        "from": {
            "id": 111,
            "is_bot": false,
            "first_name": "Test",
            "username": "testuser",
            "language_code": "en"
        },
        "text": text
    }))
    .expect("Failed to deserialize message")
}

/// Create a callback query for a button press in the given chat.
pub fn callback(data: &str, chat_id: i64) -> CallbackQuery {
    serde_json::from_value(json!({
        "id": "callback_123",
        "from": {
            "id": 111,
            "is_bot": false,
            "first_name": "Test",
            "username": "testuser",
            "language_code": "en"
        },
        "message": {
            "message_id": 42,
            "date": 1735992000,
            "chat": { "id": chat_id, "type": "private", "first_name": "Test", "username": "testuser" },
            "from": { "id": 987654321, "is_bot": true, "first_name": "TestBot", "username": "test_bot" },
            "text": "Original message"
        },
        "chat_instance": "chat_instance_123",
        "data": data
    }))
    .expect("Failed to deserialize callback")
}

/// Create an Update wrapping a text message, for driving the full schema.
pub fn message_update(text: &str, chat_id: i64) -> Update {
    serde_json::from_value(json!({
        "update_id": 1,
        "message": {
            "message_id": 1,
            "date": 1735992000,
            "chat": { "id": chat_id, "type": "private", "first_name": "Test", "username": "testuser" },
            "from": {
                "id": 111,
                "is_bot": false,
                "first_name": "Test",
                "username": "testuser",
                "language_code": "en"
            },
            "text": text
        }
    }))
    .expect("Failed to deserialize update")
}

/// Bot identity required by teloxide's command filter.
pub fn me() -> Me {
    serde_json::from_value(json!({
        "id": 987654321,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
    .expect("Failed to deserialize bot identity")
}

//! End-to-end tests: handler chain from `build_handler_chain` with a recording bot and a mockito
//! MediaWiki endpoint, plus offline rendering.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use deck_handlers::{messages, DeckConfig};
use deckbot_cli::{build_bot_components, build_handler_chain, render_deck, BotConfig, RenderOptions};
use deckbot_core::{
    Bot, Chat, DeckbotError, DocumentSource, DocumentUpload, HandlerError, HandlerResponse, Message,
    User,
};
use deckbot_telegram::TelegramConfig;
use mockito::Matcher;
use wiki_client::WikiConfig;

const EXTRACT: &str = "Великая Китайская стена — крупнейший памятник архитектуры. Её длина превышает 21 тысячу километров. Строительство шло много веков. Стена внесена в список наследия ЮНЕСКО";

fn page_body(title: &str, extract: &str) -> String {
    format!(
        r#"{{"batchcomplete":true,"query":{{"pages":[{{"pageid":1,"ns":0,"title":"{}","extract":"{}"}}]}}}}"#,
        title, extract
    )
}

fn missing_body(title: &str) -> String {
    format!(
        r#"{{"batchcomplete":true,"query":{{"pages":[{{"ns":0,"title":"{}","missing":true}}]}}}}"#,
        title
    )
}

fn deck_config(server: &mockito::ServerGuard) -> DeckConfig {
    DeckConfig {
        wiki: WikiConfig::new("ru", "deckbot-tests/1.0")
            .with_api_url(format!("{}/w/api.php", server.url())),
        ..DeckConfig::default()
    }
}

fn bot_config(server: &mockito::ServerGuard, allowed_user_ids: Vec<i64>) -> BotConfig {
    BotConfig {
        telegram: TelegramConfig::with_token("123456:TEST"),
        deck: deck_config(server),
        log_file: "logs/deckbot-test.log".to_string(),
        allowed_user_ids,
    }
}

fn create_test_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        content: content.to_string(),
        user: User {
            id: user_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct RecordingBot {
    texts: Mutex<Vec<String>>,
    documents: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> deckbot_core::Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_document(
        &self,
        _chat: &Chat,
        document: DocumentUpload,
    ) -> deckbot_core::Result<()> {
        let bytes = match document.source {
            DocumentSource::Path(path) => std::fs::read(path)?,
            DocumentSource::Bytes(bytes) => bytes,
        };
        self.documents.lock().unwrap().push((document.file_name, bytes));
        Ok(())
    }
}

fn slide_count(bytes: &[u8]) -> usize {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count()
}

#[tokio::test]
async fn test_make_command_through_chain() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("titles".into(), "Великая Китайская стена".into()))
        .with_status(200)
        .with_body(page_body("Великая Китайская стена", EXTRACT))
        .create_async()
        .await;

    let config = bot_config(&server, Vec::new());
    let bot = Arc::new(RecordingBot::default());
    let components = build_bot_components(&config, Some(bot.clone())).unwrap();
    let chain = build_handler_chain(&config, &components);

    let response = chain
        .handle(&create_test_message(1, "/make Великая Китайская стена 3"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        response,
        HandlerResponse::Reply("Великая Китайская стена.pptx".to_string())
    );
    assert_eq!(
        *bot.texts.lock().unwrap(),
        vec![messages::making_chunked("Великая Китайская стена", 3)]
    );
    let documents = bot.documents.lock().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(slide_count(&documents[0].1), 3);
}

#[tokio::test]
async fn test_plain_topic_not_found_through_chain() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("titles".into(), "Qwxzvbnm".into()))
        .with_status(200)
        .with_body(missing_body("Qwxzvbnm"))
        .create_async()
        .await;

    let config = bot_config(&server, Vec::new());
    let bot = Arc::new(RecordingBot::default());
    let components = build_bot_components(&config, Some(bot.clone())).unwrap();
    let chain = build_handler_chain(&config, &components);

    let response = chain.handle(&create_test_message(1, "Qwxzvbnm")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        *bot.texts.lock().unwrap(),
        vec![messages::making_flat("Qwxzvbnm"), messages::NOT_FOUND.to_string()]
    );
    assert!(bot.documents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_start_and_unauthorized_user() {
    let server = mockito::Server::new_async().await;
    let config = bot_config(&server, vec![42]);
    let bot = Arc::new(RecordingBot::default());
    let components = build_bot_components(&config, Some(bot.clone())).unwrap();
    let chain = build_handler_chain(&config, &components);

    let response = chain.handle(&create_test_message(42, "/start")).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(*bot.texts.lock().unwrap(), vec![messages::USAGE.to_string()]);

    let result = chain.handle(&create_test_message(7, "/start")).await;
    assert!(matches!(
        result,
        Err(DeckbotError::Handler(HandlerError::Unauthorized))
    ));
    assert_eq!(bot.texts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_render_writes_deck() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("titles".into(), "Великая Китайская стена".into()))
        .with_status(200)
        .with_body(page_body("Великая Китайская стена", EXTRACT))
        .expect(2)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("wall.pptx");
    let config = deck_config(&server);

    let options = RenderOptions {
        topic: "Великая Китайская стена".to_string(),
        slides: Some(3),
        flat: false,
        out: Some(out.clone()),
    };
    let titles = render_deck(&config, &options).await.unwrap().unwrap();
    assert_eq!(
        titles,
        vec![
            "Великая Китайская стена",
            "Великая Китайская стена — часть 1",
            "Великая Китайская стена — часть 2",
        ]
    );
    assert_eq!(slide_count(&std::fs::read(&out).unwrap()), 3);

    let flat = RenderOptions {
        flat: true,
        slides: None,
        ..options
    };
    let titles = render_deck(&config, &flat).await.unwrap().unwrap();
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[4], "Slide 4");
}

#[tokio::test]
async fn test_render_not_found_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("titles".into(), "Qwxzvbnm".into()))
        .with_status(200)
        .with_body(missing_body("Qwxzvbnm"))
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("none.pptx");
    let options = RenderOptions {
        topic: "Qwxzvbnm".to_string(),
        slides: None,
        flat: false,
        out: Some(out.clone()),
    };

    assert!(render_deck(&deck_config(&server), &options).await.unwrap().is_none());
    assert!(!out.exists());
}

//! Unit tests for LoggingMiddleware and AuthMiddleware.

use crate::{AuthMiddleware, LoggingMiddleware};
use chrono::Utc;
use deckbot_core::{Chat, DeckbotError, HandlerError, HandlerResponse, Message, Middleware, User};

fn sample_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_logging_middleware_never_stops_chain() {
    let mw = LoggingMiddleware;
    for content in ["/make Rome 3", "Rome", "", "/"] {
        let msg = sample_message(1, content);
        assert!(mw.before(&msg).await.unwrap());
    }

    let msg = sample_message(1, "/make Rome 3");
    for response in [
        HandlerResponse::Reply("Rome.pptx".to_string()),
        HandlerResponse::Stop,
        HandlerResponse::Continue,
    ] {
        assert!(mw.after(&msg, &response).await.is_ok());
    }
}

#[test]
fn test_auth_admits() {
    let open = AuthMiddleware::new(Vec::new());
    assert!(open.admits(1));
    assert!(open.admits(-42));

    let closed = AuthMiddleware::new([100, 200, 100]);
    assert!(closed.admits(100));
    assert!(closed.admits(200));
    assert!(!closed.admits(300));
}

#[tokio::test]
async fn test_auth_middleware_allowed_user_continues() {
    let mw = AuthMiddleware::new(vec![100, 200]);
    assert!(mw.before(&sample_message(100, "Rome")).await.unwrap());
    assert!(mw
        .after(&sample_message(100, "Rome"), &HandlerResponse::Stop)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_auth_middleware_unauthorized_returns_err() {
    let mw = AuthMiddleware::new(vec![100, 200]);
    let result = mw.before(&sample_message(999, "/make Rome")).await;
    assert!(matches!(
        result,
        Err(DeckbotError::Handler(HandlerError::Unauthorized))
    ));
}

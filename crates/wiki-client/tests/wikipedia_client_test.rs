//! Integration tests for [`wiki_client::WikipediaClient`] against a mockito MediaWiki endpoint.

use mockito::Matcher;
use wiki_client::{ContentProvider, Lookup, WikiConfig, WikiError, WikipediaClient};

const USER_AGENT: &str = "deckbot-tests/1.0 (test@example.org)";

fn client_for(server: &mockito::ServerGuard) -> WikipediaClient {
    let config =
        WikiConfig::new("ru", USER_AGENT).with_api_url(format!("{}/w/api.php", server.url()));
    WikipediaClient::new(config).unwrap()
}

/// **Test: Existing page → Found with the intro extract; request carries title, extract params and User-Agent.**
#[tokio::test]
async fn test_fetch_summary_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/w/api.php")
        .match_header("user-agent", USER_AGENT)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "query".into()),
            Matcher::UrlEncoded("prop".into(), "extracts".into()),
            Matcher::UrlEncoded("explaintext".into(), "1".into()),
            Matcher::UrlEncoded("exintro".into(), "1".into()),
            Matcher::UrlEncoded("titles".into(), "Великая Китайская стена".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"batchcomplete":true,"query":{"pages":[{"pageid":42,"ns":0,"title":"Великая Китайская стена","extract":"Стена длиной 21 тыс. км. Строилась веками. Объект наследия ЮНЕСКО."}]}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let lookup = client.fetch_summary("Великая Китайская стена").await.unwrap();

    mock.assert_async().await;
    match lookup {
        Lookup::Found(summary) => {
            assert_eq!(summary.title, "Великая Китайская стена");
            assert!(summary.text.starts_with("Стена длиной"));
        }
        Lookup::NotFound => panic!("expected Found"),
    }
}

/// **Test: Missing page → NotFound (not an error).**
#[tokio::test]
async fn test_fetch_summary_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded(
            "titles".into(),
            "Xyzzyzz123NotARealTopic".into(),
        ))
        .with_status(200)
        .with_body(r#"{"batchcomplete":true,"query":{"pages":[{"ns":0,"title":"Xyzzyzz123NotARealTopic","missing":true}]}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let lookup = client.fetch_summary("Xyzzyzz123NotARealTopic").await.unwrap();

    assert_eq!(lookup, Lookup::NotFound);
}

/// **Test: Non-2xx status surfaces as WikiError::Api with the status code.**
#[tokio::test]
async fn test_fetch_summary_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_summary("Рим").await.unwrap_err();

    assert!(matches!(err, WikiError::Api { status: 503, .. }));
}

/// **Test: Malformed JSON surfaces as WikiError::Decode.**
#[tokio::test]
async fn test_fetch_summary_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_summary("Рим").await.unwrap_err();

    assert!(matches!(err, WikiError::Decode(_)));
}

mod common;

use adk_extension::AdkClient;
use adk_extension::client::session_id;
use futures::StreamExt;
use serde_json::json;

fn client(url: &str) -> AdkClient {
    AdkClient::new(reqwest::Client::new(), url, "gemini-cli").unwrap()
}

#[tokio::test]
async fn test_list_apps() {
    let url = common::fake_adk_server().await;
    let apps = client(&url).list_apps().await.unwrap();
    assert_eq!(apps, json!(["weather_agent", "travel_agent"]));
}

#[tokio::test]
async fn test_create_session_uses_user_id() {
    let url = common::fake_adk_server().await;
    let session = client(&url).create_session("weather_agent").await.unwrap();
    assert_eq!(session_id(&session), Some("session-gemini-cli"));
    assert_eq!(session["appName"], "weather_agent");
}

#[tokio::test]
async fn test_create_session_error_status() {
    let url = common::fake_adk_server().await;
    let err = client(&url).create_session("missing").await.unwrap_err();
    assert_eq!(err.detail(), "API request failed with status 404");
}

#[tokio::test]
async fn test_run_returns_last_text() {
    let url = common::fake_adk_server().await;
    let reply = client(&url).run("weather_agent", "session-gemini-cli", "hi").await.unwrap();
    assert_eq!(reply, "weather_agent heard: hi");
}

#[tokio::test]
async fn test_run_unknown_session() {
    let url = common::fake_adk_server().await;
    let err = client(&url).run("weather_agent", "other", "hi").await.unwrap_err();
    assert_eq!(err.detail(), "API request failed with status 404");
}

#[tokio::test]
async fn test_run_streaming_yields_fragments() {
    let url = common::fake_adk_server().await;
    let stream = client(&url)
        .run_streaming("weather_agent", "session-gemini-cli", "is it sunny?")
        .await
        .unwrap();
    let fragments: Vec<String> =
        stream.map(|fragment| fragment.unwrap()).collect::<Vec<_>>().await;
    assert_eq!(fragments, vec!["weather_agent heard: ", "is it sunny?"]);
}

#[tokio::test]
async fn test_failing_server() {
    let url = common::failing_server().await;
    let err = client(&url).list_apps().await.unwrap_err();
    assert_eq!(err.detail(), "API request failed with status 500");
}

#[tokio::test]
async fn test_unreachable_server() {
    let url = common::closed_server_url().await;
    let err = client(&url).list_apps().await.unwrap_err();
    assert!(err.detail().starts_with("Request failed"), "{}", err.detail());
}

#[test]
fn test_rejects_invalid_base_url() {
    assert!(AdkClient::new(reqwest::Client::new(), "localhost:8000", "u").is_err());
}

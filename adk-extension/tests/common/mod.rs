//! A fake ADK API server for integration tests.
//!
//! `run_sse` answers `"<app> heard: <message>"`. Sessions are named
//! `session-<user>`; runs against any other session id get a 404.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn fake_adk_server() -> String {
    spawn(
        Router::new()
            .route("/list-apps", get(list_apps))
            .route("/apps/{app}/users/{user}/sessions", post(create_session))
            .route("/run_sse", post(run_sse)),
    )
    .await
}

/// A server answering every request with 500.
pub async fn failing_server() -> String {
    spawn(Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })).await
}

/// A URL nothing listens on.
pub async fn closed_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn list_apps() -> Json<Value> {
    Json(json!(["weather_agent", "travel_agent"]))
}

async fn create_session(Path((app, user)): Path<(String, String)>) -> impl IntoResponse {
    if app == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "App not found"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": format!("session-{user}"),
            "appName": app,
            "userId": user,
            "state": {},
            "events": [],
        })),
    )
}

async fn run_sse(Json(body): Json<Value>) -> impl IntoResponse {
    let app = body["appName"].as_str().unwrap_or_default();
    let user = body["userId"].as_str().unwrap_or_default();
    let session = body["sessionId"].as_str().unwrap_or_default();
    if session != format!("session-{user}") {
        return (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "application/json")], String::new());
    }

    let message = body["newMessage"]["parts"][0]["text"].as_str().unwrap_or_default();
    let prefix = format!("{app} heard: ");
    let reply = format!("{prefix}{message}");

    let events = if body["streaming"].as_bool().unwrap_or(false) {
        vec![
            text_event(&prefix, true),
            text_event(message, true),
            text_event(&reply, false),
        ]
    } else {
        vec![
            text_event("Looking that up.", false),
            json!({
                "author": app,
                "content": {"role": "model", "parts": [{"functionCall": {"name": "lookup", "args": {}}}]},
            }),
            text_event(&reply, false),
        ]
    };

    let body: String = events.iter().map(|event| format!("data: {event}\n\n")).collect();
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/event-stream")], body)
}

fn text_event(text: &str, partial: bool) -> Value {
    json!({
        "author": "agent",
        "partial": partial,
        "content": {"role": "model", "parts": [{"text": text}]},
    })
}

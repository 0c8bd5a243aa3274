use crate::sse::{self, FragmentDecoder, LineBuffer};
use adk_core::{AdkError, Content, Result};
use adk_telemetry::adk_request_span;
use futures::stream::Stream;
use serde::Serialize;
use serde_json::{Value, json};
use std::pin::Pin;
use tracing::{Instrument, debug};

pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Parses `url` as an absolute http(s) URL.
pub fn validate_server_url(url: &str) -> Result<reqwest::Url> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| AdkError::Config(format!("Invalid URL '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(AdkError::Config(format!(
            "Invalid URL '{url}': unsupported scheme '{scheme}'"
        ))),
    }
}

/// Id of a session returned by [`AdkClient::create_session`].
///
/// ADK servers answer with `id`; `sessionId` is accepted as well.
pub fn session_id(session: &Value) -> Option<&str> {
    session.get("id").or_else(|| session.get("sessionId")).and_then(Value::as_str)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunRequest<'a> {
    app_name: &'a str,
    user_id: &'a str,
    session_id: &'a str,
    new_message: Content,
    streaming: bool,
}

/// Client for the REST API of one ADK API server.
#[derive(Clone, Debug)]
pub struct AdkClient {
    http: reqwest::Client,
    base_url: String,
    user_id: String,
}

impl AdkClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        validate_server_url(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// `GET /list-apps`: names of the agents the server hosts.
    pub async fn list_apps(&self) -> Result<Value> {
        let url = format!("{}/list-apps", self.base_url);
        let response = self.send(self.http.get(&url), "GET", &url).await?;
        parse_json(response).await
    }

    /// Creates a session for `app_name` under the configured user.
    pub async fn create_session(&self, app_name: &str) -> Result<Value> {
        let url = format!("{}/apps/{}/users/{}/sessions", self.base_url, app_name, self.user_id);
        let response = self.send(self.http.post(&url).json(&json!({})), "POST", &url).await?;
        let session = parse_json(response).await?;
        debug!(app = app_name, session = ?session_id(&session), "Created ADK session");
        Ok(session)
    }

    /// Sends `message` and returns the agent's final text.
    pub async fn run(&self, app_name: &str, session_id: &str, message: &str) -> Result<String> {
        let response = self.post_run(app_name, session_id, message, false).await?;
        let body = response
            .text()
            .await
            .map_err(|e| AdkError::Http(format!("Failed to read response: {e}")))?;
        Ok(sse::final_text(&body))
    }

    /// Sends `message` with streaming enabled; yields text fragments as they arrive.
    pub async fn run_streaming(
        &self,
        app_name: &str,
        session_id: &str,
        message: &str,
    ) -> Result<TextStream> {
        let response = self.post_run(app_name, session_id, message, true).await?;

        let stream = async_stream::stream! {
            use futures::StreamExt;

            let mut bytes_stream = response.bytes_stream();
            let mut lines = LineBuffer::new();
            let mut decoder = FragmentDecoder::new();

            while let Some(chunk_result) = bytes_stream.next().await {
                let chunk = match chunk_result {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(AdkError::Http(format!("Stream error: {e}")));
                        break;
                    }
                };
                for line in lines.push(&chunk) {
                    if let Some(fragment) = decoder.decode_line(&line) {
                        yield Ok(fragment);
                    }
                }
            }

            if let Some(line) = lines.finish() {
                if let Some(fragment) = decoder.decode_line(&line) {
                    yield Ok(fragment);
                }
            }
        };

        Ok(Box::pin(stream))
    }

    async fn post_run(
        &self,
        app_name: &str,
        session_id: &str,
        message: &str,
        streaming: bool,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/run_sse", self.base_url);
        let body = RunRequest {
            app_name,
            user_id: &self.user_id,
            session_id,
            new_message: Content::new("user").with_text(message),
            streaming,
        };
        self.send(self.http.post(&url).json(&body), "POST", &url).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<reqwest::Response> {
        let response = request
            .send()
            .instrument(adk_request_span(method, url))
            .await
            .map_err(|e| AdkError::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdkError::Http(format!(
                "API request failed with status {}",
                status.as_u16()
            )));
        }
        Ok(response)
    }
}

async fn parse_json(response: reqwest::Response) -> Result<Value> {
    response.json().await.map_err(|e| AdkError::Http(format!("Failed to parse response: {e}")))
}

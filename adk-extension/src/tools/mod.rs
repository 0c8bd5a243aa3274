//! The tools the extension exposes over MCP.
//!
//! Each tool deserializes its arguments into a typed struct whose
//! `JsonSchema` is also what `tools/list` advertises. Failures come back as
//! [`AdkError::Tool`] carrying the exact text shown to the user.

mod project;
mod registry;
mod remote;

pub use project::{
    CreateAgentTool, DeployAgentTool, EvaluateAgentTool, ListAgentToolsTool,
    ScanAgentSafetyTool, VisualizeAgentSystemTool,
};
pub use registry::{AddAdkServerTool, ListAdkServersTool, RemoveAdkServerTool};
pub use remote::{
    ChatAction, CreateSessionTool, ListAdkAgentsTool, ManageChatSessionTool, SendMessageTool,
    StreamMessageTool,
};

use crate::chat::ChatSessions;
use crate::client::AdkClient;
use crate::config::ExtensionConfig;
use crate::registry::ServerRegistry;
use adk_core::{AdkError, Result, Tool};
use schemars::{JsonSchema, r#gen::SchemaSettings};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;

/// Names of every tool, in registration order.
pub const TOOL_NAMES: [&str; 15] = [
    "list_adks",
    "list_adk_agents",
    "create_session",
    "send_message_to_agent",
    "stream_message_to_agent",
    "create_agent",
    "deploy_agent",
    "evaluate_agent",
    "list_agent_tools",
    "manage_chat_session",
    "add_adk_server",
    "remove_adk_server",
    "list_adk_servers",
    "visualize_agent_system",
    "scan_agent_safety",
];

/// State shared by all tools of one server.
pub struct ExtensionState {
    config: ExtensionConfig,
    registry: ServerRegistry,
    http: reqwest::Client,
    chats: ChatSessions,
}

impl ExtensionState {
    pub fn new(config: ExtensionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AdkError::Http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            registry: ServerRegistry::new(config.registry_path.clone()),
            config,
            http,
            chats: ChatSessions::new(),
        })
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    pub fn chats(&self) -> &ChatSessions {
        &self.chats
    }

    /// A client for the ADK API server at `server_url`.
    pub fn client(&self, server_url: &str) -> Result<AdkClient> {
        AdkClient::new(self.http.clone(), server_url, self.config.user_id.clone())
    }
}

/// Every extension tool, bound to `state`.
pub fn build_tools(state: Arc<ExtensionState>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(ListAdkServersTool::new("list_adks", state.clone())),
        Arc::new(ListAdkAgentsTool::new(state.clone())),
        Arc::new(CreateSessionTool::new(state.clone())),
        Arc::new(SendMessageTool::new(state.clone())),
        Arc::new(StreamMessageTool::new(state.clone())),
        Arc::new(CreateAgentTool),
        Arc::new(DeployAgentTool),
        Arc::new(EvaluateAgentTool),
        Arc::new(ListAgentToolsTool),
        Arc::new(ManageChatSessionTool::new(state.clone())),
        Arc::new(AddAdkServerTool::new(state.clone())),
        Arc::new(RemoveAdkServerTool::new(state.clone())),
        Arc::new(ListAdkServersTool::new("list_adk_servers", state)),
        Arc::new(VisualizeAgentSystemTool),
        Arc::new(ScanAgentSafetyTool),
    ]
}

/// JSON Schema for an argument struct, with subschemas inlined.
pub(crate) fn parameters_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let generator = schemars::r#gen::SchemaGenerator::new(settings);
    let mut schema = generator.into_root_schema_for::<T>();
    schema.schema.metadata().title = None;
    serde_json::to_value(schema.schema).unwrap_or_else(|_| json!({"type": "object"}))
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| AdkError::Tool(format!("Invalid arguments: {e}")))
}

/// Rewraps `err` as a tool failure reading `<prefix>: <detail>`.
pub(crate) fn failure(prefix: &str, err: AdkError) -> AdkError {
    AdkError::Tool(format!("{prefix}: {}", err.detail()))
}

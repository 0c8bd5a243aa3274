use super::{ExtensionState, failure, parameters_schema, parse_args};
use crate::chat::ChatSession;
use crate::client::session_id;
use adk_core::{AdkError, Result, Tool};
use async_trait::async_trait;
use futures::StreamExt;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAdkAgentsArgs {
    /// The URL of the ADK server.
    pub adk_server_url: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateSessionArgs {
    /// The URL of the ADK server.
    pub adk_server_url: String,
    /// The name of the agent.
    pub agent_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SendMessageArgs {
    /// The URL of the ADK server.
    pub adk_server_url: String,
    /// The name of the agent.
    pub agent_name: String,
    /// The session ID to use.
    pub session_id: String,
    /// The user's message to the agent.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatAction {
    Start,
    Message,
    End,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ManageChatSessionArgs {
    /// `start`, `message` or `end`
    pub action: ChatAction,
    /// Conversation returned by `start`; required for `message` and `end`.
    pub conversation_id: Option<String>,
    /// Required for `start`; overrides the stored server for `message`.
    pub adk_server_url: Option<String>,
    /// Required for `start`; overrides the stored agent for `message`.
    pub agent_name: Option<String>,
    /// Required for `message`.
    pub message: Option<String>,
}

pub struct ListAdkAgentsTool {
    state: Arc<ExtensionState>,
}

impl ListAdkAgentsTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for ListAdkAgentsTool {
    fn name(&self) -> &str {
        "list_adk_agents"
    }

    fn description(&self) -> &str {
        "Fetches a list of available agents from a specific ADK server."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<ListAdkAgentsArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: ListAdkAgentsArgs = parse_args(args)?;
        let fail = |e| failure("Failed to list agents", e);
        let client = self.state.client(&args.adk_server_url).map_err(fail)?;
        client.list_apps().await.map_err(fail)
    }
}

pub struct CreateSessionTool {
    state: Arc<ExtensionState>,
}

impl CreateSessionTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for CreateSessionTool {
    fn name(&self) -> &str {
        "create_session"
    }

    fn description(&self) -> &str {
        "Creates a new session for a specified agent on a specific ADK server."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<CreateSessionArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CreateSessionArgs = parse_args(args)?;
        let fail = |e| failure("Failed to create session", e);
        let client = self.state.client(&args.adk_server_url).map_err(fail)?;
        let session = client.create_session(&args.agent_name).await.map_err(fail)?;
        Ok(Value::String(session.to_string()))
    }
}

pub struct SendMessageTool {
    state: Arc<ExtensionState>,
}

impl SendMessageTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for SendMessageTool {
    fn name(&self) -> &str {
        "send_message_to_agent"
    }

    fn description(&self) -> &str {
        "Sends a message to an agent session and gets the result."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<SendMessageArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: SendMessageArgs = parse_args(args)?;
        let fail = |e| failure("Failed to send message", e);
        let client = self.state.client(&args.adk_server_url).map_err(fail)?;
        let reply = client
            .run(&args.agent_name, &args.session_id, &args.message)
            .await
            .map_err(fail)?;
        Ok(Value::String(reply))
    }
}

pub struct StreamMessageTool {
    state: Arc<ExtensionState>,
}

impl StreamMessageTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for StreamMessageTool {
    fn name(&self) -> &str {
        "stream_message_to_agent"
    }

    fn description(&self) -> &str {
        "Sends a message to an agent and streams the response."
    }

    fn is_long_running(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<SendMessageArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: SendMessageArgs = parse_args(args)?;
        let fail = |e| failure("Error", e);
        let client = self.state.client(&args.adk_server_url).map_err(fail)?;
        let mut fragments = client
            .run_streaming(&args.agent_name, &args.session_id, &args.message)
            .await
            .map_err(fail)?;

        let mut reply = String::new();
        while let Some(fragment) = fragments.next().await {
            let fragment = fragment.map_err(fail)?;
            debug!(len = fragment.len(), "Received response fragment");
            reply.push_str(&fragment);
        }
        Ok(Value::String(reply))
    }
}

pub struct ManageChatSessionTool {
    state: Arc<ExtensionState>,
}

impl ManageChatSessionTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }

    async fn start(&self, args: ManageChatSessionArgs) -> Result<Value> {
        let (Some(server_url), Some(agent_name)) = (args.adk_server_url, args.agent_name) else {
            return Err(AdkError::Tool(
                "Error: adk_server_url and agent_name are required to start a session."
                    .to_string(),
            ));
        };

        let fail = |e| failure("Failed to create session", e);
        let client = self.state.client(&server_url).map_err(fail)?;
        let session = client.create_session(&agent_name).await.map_err(fail)?;
        let session_id = session_id(&session).map(str::to_string).ok_or_else(|| {
            AdkError::Tool("Failed to create session: response has no session id".to_string())
        })?;

        let conversation_id =
            self.state.chats().open(ChatSession { server_url, agent_name, session_id });
        Ok(Value::String(format!("Session started with ID: {conversation_id}")))
    }

    async fn message(&self, args: ManageChatSessionArgs) -> Result<Value> {
        let (Some(conversation_id), Some(message)) = (args.conversation_id, args.message) else {
            return Err(AdkError::Tool(
                "Error: conversation_id and message are required to send a message.".to_string(),
            ));
        };
        let Some(chat) = self.state.chats().get(&conversation_id) else {
            return Err(AdkError::Tool("Error: Invalid conversation_id.".to_string()));
        };

        let server_url = args.adk_server_url.unwrap_or(chat.server_url);
        let agent_name = args.agent_name.unwrap_or(chat.agent_name);

        let fail = |e| failure("Failed to send message", e);
        let client = self.state.client(&server_url).map_err(fail)?;
        let reply = client.run(&agent_name, &chat.session_id, &message).await.map_err(fail)?;
        Ok(Value::String(reply))
    }

    fn end(&self, args: ManageChatSessionArgs) -> Result<Value> {
        let Some(conversation_id) = args.conversation_id else {
            return Err(AdkError::Tool(
                "Error: conversation_id is required to end a session.".to_string(),
            ));
        };
        self.state.chats().close(&conversation_id);
        Ok(Value::String("Session ended.".to_string()))
    }
}

#[async_trait]
impl Tool for ManageChatSessionTool {
    fn name(&self) -> &str {
        "manage_chat_session"
    }

    fn description(&self) -> &str {
        "Manages an interactive chat session."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<ManageChatSessionArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: ManageChatSessionArgs = parse_args(args)?;
        match args.action {
            ChatAction::Start => self.start(args).await,
            ChatAction::Message => self.message(args).await,
            ChatAction::End => self.end(args),
        }
    }
}

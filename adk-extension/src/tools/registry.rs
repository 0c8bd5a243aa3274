use super::{ExtensionState, failure, parameters_schema, parse_args};
use crate::registry::AddOutcome;
use adk_core::{AdkError, Result, Tool};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoArgs {}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddAdkServerArgs {
    /// Name to register the server under
    pub name: String,
    /// Base URL of the ADK API server
    pub url: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveAdkServerArgs {
    /// Name of the server to remove
    pub name: String,
}

/// Lists the registered ADK servers. Registered twice, as `list_adks` and
/// `list_adk_servers`.
pub struct ListAdkServersTool {
    name: &'static str,
    state: Arc<ExtensionState>,
}

impl ListAdkServersTool {
    pub fn new(name: &'static str, state: Arc<ExtensionState>) -> Self {
        Self { name, state }
    }
}

#[async_trait]
impl Tool for ListAdkServersTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Fetches the list of available ADK servers from adk_agent_list.json."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<NoArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let _: NoArgs = parse_args(args)?;
        let servers = self
            .state
            .registry()
            .servers()
            .await
            .map_err(|e| AdkError::Tool(e.detail()))?;
        Ok(serde_json::to_value(servers)?)
    }
}

pub struct AddAdkServerTool {
    state: Arc<ExtensionState>,
}

impl AddAdkServerTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for AddAdkServerTool {
    fn name(&self) -> &str {
        "add_adk_server"
    }

    fn description(&self) -> &str {
        "Adds a new ADK server to the configuration."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<AddAdkServerArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: AddAdkServerArgs = parse_args(args)?;
        let outcome = self
            .state
            .registry()
            .add(&args.name, &args.url)
            .await
            .map_err(|e| failure("Error", e))?;
        let message = match outcome {
            AddOutcome::Added => format!("Server '{}' added successfully.", args.name),
            AddOutcome::Replaced => format!("Server '{}' updated successfully.", args.name),
        };
        Ok(Value::String(message))
    }
}

pub struct RemoveAdkServerTool {
    state: Arc<ExtensionState>,
}

impl RemoveAdkServerTool {
    pub fn new(state: Arc<ExtensionState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Tool for RemoveAdkServerTool {
    fn name(&self) -> &str {
        "remove_adk_server"
    }

    fn description(&self) -> &str {
        "Removes an ADK server from the configuration."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<RemoveAdkServerArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: RemoveAdkServerArgs = parse_args(args)?;
        self.state.registry().remove(&args.name).await.map_err(|e| failure("Error", e))?;
        Ok(Value::String(format!("Server '{}' removed successfully.", args.name)))
    }
}

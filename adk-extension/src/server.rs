//! [`AdkExtensionServer`], the rmcp [`ServerHandler`] implementation.
//!
//! It serves the tools of a [`BasicToolset`] through `tools/list` and
//! `tools/call`; initialize, ping and shutdown use rmcp's defaults.

use crate::bridge::{arguments_to_value, output_to_call_result, tool_to_mcp};
use crate::config::ExtensionConfig;
use crate::tools::{ExtensionState, build_tools};
use adk_core::{Result, Toolset};
use adk_telemetry::tool_execute_span;
use adk_tool::{BasicToolset, string_predicate};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};
use std::sync::Arc;
use tracing::{Instrument, info, warn};

pub const SERVER_NAME: &str = "google-adk-agent-server";

const INSTRUCTIONS: &str = "Manage Google ADK agents: keep a list of ADK API servers, \
    list their agents, open sessions and chat with agents, create new agent projects, \
    and inspect projects for tools, sub-agents and security issues.";

#[derive(Clone)]
pub struct AdkExtensionServer {
    toolset: Arc<BasicToolset>,
    state: Arc<ExtensionState>,
}

impl AdkExtensionServer {
    /// A server exposing every extension tool.
    pub fn new(config: ExtensionConfig) -> Result<Self> {
        Self::with_allowed_tools(config, None)
    }

    /// A server exposing only the named tools, or all of them for `None`.
    pub fn with_allowed_tools(
        config: ExtensionConfig,
        allowed_tools: Option<Vec<String>>,
    ) -> Result<Self> {
        let state = Arc::new(ExtensionState::new(config)?);
        let mut toolset = BasicToolset::new(SERVER_NAME, build_tools(state.clone()));
        if let Some(allowed) = allowed_tools {
            toolset = toolset.with_predicate(string_predicate(allowed));
        }
        Ok(Self { toolset: Arc::new(toolset), state })
    }

    pub fn state(&self) -> &ExtensionState {
        &self.state
    }

    pub fn toolset(&self) -> &BasicToolset {
        &self.toolset
    }
}

impl ServerHandler for AdkExtensionServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        let tools = self
            .toolset
            .tools()
            .await
            .map_err(|e| McpError::internal_error(e.detail(), None))?;
        Ok(ListToolsResult::with_all_items(
            tools.iter().map(|tool| tool_to_mcp(tool.as_ref())).collect(),
        ))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let name = request.name.to_string();
        let Some(tool) = self.toolset.get(&name) else {
            warn!(tool = %name, "Call to unknown tool");
            return Err(McpError::invalid_params(format!("Unknown tool: {name}"), None));
        };

        let args = arguments_to_value(request.arguments);
        let output = tool.execute(args).instrument(tool_execute_span(&name)).await;
        match &output {
            Ok(_) => info!(tool = %name, "Tool call succeeded"),
            Err(e) => warn!(tool = %name, error = %e.detail(), "Tool call failed"),
        }
        Ok(output_to_call_result(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> AdkExtensionServer {
        AdkExtensionServer::new(ExtensionConfig::default()).unwrap()
    }

    #[test]
    fn get_info_enables_tools_capability() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, SERVER_NAME);
    }

    #[tokio::test]
    async fn all_tools_listed_by_default() {
        let tools = server().toolset().tools().await.unwrap();
        assert_eq!(tools.len(), crate::tools::TOOL_NAMES.len());
    }

    #[tokio::test]
    async fn allowed_tools_filter() {
        let server = AdkExtensionServer::with_allowed_tools(
            ExtensionConfig::default(),
            Some(vec!["create_agent".to_string(), "scan_agent_safety".to_string()]),
        )
        .unwrap();
        let tools = server.toolset().tools().await.unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["create_agent", "scan_agent_safety"]);
        assert!(server.toolset().get("list_adks").is_none());
    }

    #[test]
    fn server_is_cloneable() {
        let server = server();
        let clone = server.clone();
        assert_eq!(clone.state().config(), server.state().config());
    }
}

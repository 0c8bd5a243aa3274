//! # adk-extension
//!
//! MCP server for managing Google ADK agents from an MCP host such as the
//! Gemini CLI.
//!
//! The server speaks line-delimited JSON-RPC over stdio and exposes tools to:
//!
//! - keep a registry of named ADK API servers (`adk_agent_list.json`)
//! - list the agents a server hosts, create sessions and send messages
//! - hold multi-turn chat conversations keyed by a conversation id
//! - scaffold new agent projects from the root agent template
//! - inspect agent projects: tools, sub-agent graph, security findings
//!
//! ## Host configuration
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "adk-agent-extension": {
//!       "command": "adk-agent-extension",
//!       "args": ["serve"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! MCP host
//!       │  stdin/stdout (line-delimited JSON-RPC)
//!       ▼
//! AdkExtensionServer (rmcp ServerHandler)
//!       │
//!       ▼
//! BasicToolset ──► Tool::execute() ──► AdkClient / ServerRegistry / filesystem
//! ```

pub mod bridge;
pub mod chat;
pub mod client;
pub mod commands;
pub mod config;
pub mod inspect;
pub mod registry;
pub mod scaffold;
pub mod server;
pub mod sse;
pub mod tools;

pub use chat::{ChatSession, ChatSessions};
pub use client::{AdkClient, TextStream};
pub use config::ExtensionConfig;
pub use inspect::Finding;
pub use registry::{AdkServer, AddOutcome, ServerRegistry};
pub use server::{AdkExtensionServer, SERVER_NAME};
pub use tools::{ExtensionState, TOOL_NAMES, build_tools};

use anyhow::Result;
use rmcp::ServiceExt;

/// Serves the extension tools on stdin/stdout until the host disconnects.
///
/// `allowed_tools` restricts the exposed tools to the named ones.
pub async fn serve_stdio(config: ExtensionConfig, allowed_tools: Option<Vec<String>>) -> Result<()> {
    let server = AdkExtensionServer::with_allowed_tools(config, allowed_tools)?;
    let running = server
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .map_err(|e| anyhow::anyhow!("MCP server init error: {e}"))?;
    running.waiting().await.map_err(|e| anyhow::anyhow!("MCP server error: {e}"))?;
    Ok(())
}

//! # adk-cli
//!
//! Command-line entry point for the ADK agent extension.
//!
//! ```bash
//! # MCP stdio server (default)
//! adk-agent-extension
//! adk-agent-extension serve --registry ./adk_agent_list.json --tools list_adks,create_agent
//!
//! # Release archive
//! adk-agent-extension package --platform linux --arch x64
//! ```
//!
//! Logs go to stderr; stdout carries the MCP protocol.

pub mod cli;
pub mod package;
pub mod serve;

pub use cli::{Cli, Commands, ServeArgs};

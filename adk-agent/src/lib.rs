//! # adk-agent
//!
//! Declarative agent configuration for the ADK agent extension.
//!
//! - [`AgentConfig`] / [`AgentConfigBuilder`] - name, model, instruction and tools
//! - [`root_agent`] - the configuration new agent projects start from
//! - [`render_agent_module`] - the `agent.py` form consumed by the Python ADK runtime
//!
//! ```rust
//! use adk_agent::root_agent;
//!
//! let agent = root_agent();
//! assert_eq!(agent.name(), "my-new-agent");
//! assert_eq!(agent.tool_names(), vec!["google_search"]);
//! ```

mod config;
mod python;

pub use config::{
    AgentConfig, AgentConfigBuilder, DEFAULT_INSTRUCTION, DEFAULT_MODEL, ROOT_AGENT_NAME,
    root_agent,
};
pub use python::{render_agent_module, render_package_init};

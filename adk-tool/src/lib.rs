//! # adk-tool
//!
//! Tool infrastructure for the ADK agent extension.
//!
//! - [`GoogleSearchTool`] - Web search via Gemini's grounding
//! - [`BasicToolset`] - Group multiple tools together, optionally filtered
//!
//! ```rust
//! use adk_tool::{BasicToolset, GoogleSearchTool, string_predicate};
//! use adk_core::Tool;
//! use std::sync::Arc;
//!
//! let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(GoogleSearchTool::new())];
//! let toolset = BasicToolset::new("search", tools)
//!     .with_predicate(string_predicate(vec!["google_search".to_string()]));
//! assert!(toolset.get("google_search").is_some());
//! ```

pub mod builtin;
pub mod toolset;

pub use adk_core::{Tool, Toolset};
pub use builtin::GoogleSearchTool;
pub use toolset::{BasicToolset, string_predicate};

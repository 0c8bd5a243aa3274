//! # adk-core
//!
//! Core traits and types shared by the ADK agent extension crates.
//!
//! - [`Tool`] / [`Toolset`] - Capabilities exposed to agents and MCP clients
//! - [`Content`] / [`Part`] - Messages in ADK wire form
//! - [`AdkError`] / [`Result`] - Unified error handling
//!
//! ## Tool
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait Tool: Send + Sync {
//!     fn name(&self) -> &str;
//!     fn description(&self) -> &str;
//!     async fn execute(&self, args: Value) -> Result<Value>;
//! }
//! ```

pub mod error;
pub mod tool;
pub mod types;

pub use error::{AdkError, Result};
pub use tool::{Tool, ToolPredicate, Toolset};
pub use types::{Content, Part};

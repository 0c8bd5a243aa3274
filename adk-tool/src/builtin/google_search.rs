use adk_core::{Result, Tool};
use async_trait::async_trait;
use serde_json::Value;

/// GoogleSearch is a built-in tool that is automatically invoked by Gemini
/// models to retrieve search results from Google Search.
/// The tool operates internally within the model and does not require or
/// perform local code execution.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleSearchTool;

impl GoogleSearchTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        "google_search"
    }

    fn description(&self) -> &str {
        "Performs a Google search to retrieve information from the web."
    }

    async fn execute(&self, _args: Value) -> Result<Value> {
        // Grounding happens inside the model; there is nothing to run locally.
        Err(adk_core::AdkError::Tool("GoogleSearch is handled internally by Gemini".to_string()))
    }
}

use adk_core::{AdkError, Result, Tool};
use adk_tool::GoogleSearchTool;
use std::sync::Arc;

pub const ROOT_AGENT_NAME: &str = "my-new-agent";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_INSTRUCTION: &str = "You are a helpful assistant.";

/// A declarative agent: which model to run, what to tell it, and which
/// tools it may call. Fields are fixed once built.
#[derive(Clone)]
pub struct AgentConfig {
    name: String,
    model: String,
    instruction: String,
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentConfig {
    pub fn builder(name: impl Into<String>) -> AgentConfigBuilder {
        AgentConfigBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Same model, instruction and tools under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("instruction", &self.instruction)
            .field("tools", &self.tool_names())
            .finish()
    }
}

// Tools are compared by name; the trait objects carry no other identity.
impl PartialEq for AgentConfig {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.model == other.model
            && self.instruction == other.instruction
            && self.tool_names() == other.tool_names()
    }
}

impl Eq for AgentConfig {}

pub struct AgentConfigBuilder {
    name: String,
    model: Option<String>,
    instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), model: None, instruction: None, tools: Vec::new() }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn build(self) -> Result<AgentConfig> {
        if self.name.trim().is_empty() {
            return Err(AdkError::Config("Agent name is required".to_string()));
        }
        let model = self
            .model
            .filter(|model| !model.trim().is_empty())
            .ok_or_else(|| AdkError::Config("Model is required".to_string()))?;

        Ok(AgentConfig {
            name: self.name,
            model,
            instruction: self.instruction.unwrap_or_default(),
            tools: self.tools,
        })
    }
}

/// The agent every new project starts from: a Gemini Flash assistant with
/// Google Search grounding.
pub fn root_agent() -> AgentConfig {
    AgentConfig {
        name: ROOT_AGENT_NAME.to_string(),
        model: DEFAULT_MODEL.to_string(),
        instruction: DEFAULT_INSTRUCTION.to_string(),
        tools: vec![Arc::new(GoogleSearchTool::new())],
    }
}

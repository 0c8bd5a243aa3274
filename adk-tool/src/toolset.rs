use adk_core::{Result, Tool, ToolPredicate, Toolset};
use async_trait::async_trait;
use std::sync::Arc;

pub struct BasicToolset {
    name: String,
    tools: Vec<Arc<dyn Tool>>,
    predicate: Option<ToolPredicate>,
}

impl BasicToolset {
    pub fn new(name: impl Into<String>, tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { name: name.into(), tools, predicate: None }
    }

    pub fn with_predicate(mut self, predicate: ToolPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Looks up a visible tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.visible().find(|tool| tool.name() == name).cloned()
    }

    fn visible(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter().filter(|tool| match &self.predicate {
            Some(predicate) => predicate(tool.as_ref()),
            None => true,
        })
    }
}

#[async_trait]
impl Toolset for BasicToolset {
    fn name(&self) -> &str {
        &self.name
    }

    async fn tools(&self) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.visible().cloned().collect())
    }
}

/// Creates a predicate that allows only tools with names in the provided list
pub fn string_predicate(allowed_tools: Vec<String>) -> ToolPredicate {
    let allowed_set: std::collections::HashSet<String> = allowed_tools.into_iter().collect();
    Box::new(move |tool: &dyn Tool| allowed_set.contains(tool.name()))
}

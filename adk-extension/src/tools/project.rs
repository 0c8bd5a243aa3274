use super::{failure, parameters_schema, parse_args};
use crate::commands::{DeployTarget, deploy_command, dry_run, eval_command};
use crate::{inspect, scaffold};
use adk_core::{Result, Tool};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

pub const NO_TOOLS_FOUND: &str = "No tools found for this agent.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateAgentArgs {
    /// Name of the agent; also the project directory name
    pub agent_name: String,
    /// Directory the project directory is created in
    pub directory_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeployAgentArgs {
    /// Directory of the agent project to deploy
    pub agent_path: String,
    /// Deployment target: `cloud-run` or `gke`
    pub target: DeployTarget,
    /// Google Cloud project id
    pub project_id: String,
    /// Google Cloud region, e.g. us-central1
    pub location: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EvaluateAgentArgs {
    /// Directory of the agent project to evaluate
    pub agent_path: String,
    /// Path of the evaluation set file
    pub eval_set_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentPathArgs {
    /// Directory containing the agent's agent.py
    pub agent_path: String,
}

pub struct CreateAgentTool;

#[async_trait]
impl Tool for CreateAgentTool {
    fn name(&self) -> &str {
        "create_agent"
    }

    fn description(&self) -> &str {
        "Creates a new ADK agent project."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<CreateAgentArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CreateAgentArgs = parse_args(args)?;
        let agent_dir = scaffold::create_agent(&args.agent_name, &args.directory_path)
            .await
            .map_err(|e| failure("Error", e))?;
        Ok(Value::String(format!(
            "Agent '{}' created at {}",
            args.agent_name,
            agent_dir.display()
        )))
    }
}

pub struct DeployAgentTool;

#[async_trait]
impl Tool for DeployAgentTool {
    fn name(&self) -> &str {
        "deploy_agent"
    }

    fn description(&self) -> &str {
        "Deploys an ADK agent."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<DeployAgentArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: DeployAgentArgs = parse_args(args)?;
        let command =
            deploy_command(&args.agent_path, args.target, &args.project_id, &args.location);
        Ok(Value::String(dry_run(&command)))
    }
}

pub struct EvaluateAgentTool;

#[async_trait]
impl Tool for EvaluateAgentTool {
    fn name(&self) -> &str {
        "evaluate_agent"
    }

    fn description(&self) -> &str {
        "Runs `adk eval` on a specified agent."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<EvaluateAgentArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: EvaluateAgentArgs = parse_args(args)?;
        Ok(Value::String(dry_run(&eval_command(&args.agent_path, &args.eval_set_path))))
    }
}

pub struct ListAgentToolsTool;

#[async_trait]
impl Tool for ListAgentToolsTool {
    fn name(&self) -> &str {
        "list_agent_tools"
    }

    fn description(&self) -> &str {
        "Lists the tools available to a specific agent."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<AgentPathArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: AgentPathArgs = parse_args(args)?;
        let tools =
            inspect::list_agent_tools(&args.agent_path).await.map_err(|e| failure("Error", e))?;
        if tools.is_empty() {
            return Ok(Value::String(NO_TOOLS_FOUND.to_string()));
        }
        Ok(serde_json::to_value(tools)?)
    }
}

pub struct VisualizeAgentSystemTool;

#[async_trait]
impl Tool for VisualizeAgentSystemTool {
    fn name(&self) -> &str {
        "visualize_agent_system"
    }

    fn description(&self) -> &str {
        "Generates a Mermaid diagram of a multi-agent system."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<AgentPathArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: AgentPathArgs = parse_args(args)?;
        let mermaid = inspect::visualize_agent_system(&args.agent_path)
            .await
            .map_err(|e| failure("Error", e))?;
        Ok(Value::String(mermaid))
    }
}

pub struct ScanAgentSafetyTool;

#[async_trait]
impl Tool for ScanAgentSafetyTool {
    fn name(&self) -> &str {
        "scan_agent_safety"
    }

    fn description(&self) -> &str {
        "Scans an agent for potential security vulnerabilities."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(parameters_schema::<AgentPathArgs>())
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: AgentPathArgs = parse_args(args)?;
        let findings =
            inspect::scan_agent_safety(&args.agent_path).await.map_err(|e| failure("Error", e))?;
        Ok(serde_json::to_value(findings)?)
    }
}

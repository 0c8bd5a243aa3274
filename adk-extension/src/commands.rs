//! Shell commands for deploying and evaluating agents.
//!
//! The commands are planned, not run: the host CLI shows them to the user,
//! who executes them with their own credentials.

use schemars::JsonSchema;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum DeployTarget {
    #[serde(rename = "cloud-run")]
    CloudRun,
    #[serde(rename = "gke")]
    Gke,
}

/// Command deploying the agent project at `agent_path` to `target`.
pub fn deploy_command(
    agent_path: &str,
    target: DeployTarget,
    project_id: &str,
    location: &str,
) -> String {
    match target {
        DeployTarget::CloudRun => {
            let service = Path::new(agent_path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| agent_path.to_string());
            format!(
                "gcloud run deploy {service} --source {agent_path} --project {project_id} \
                 --region {location} --allow-unauthenticated"
            )
        }
        DeployTarget::Gke => "echo \"GKE deployment not yet implemented\"".to_string(),
    }
}

/// Command running an evaluation set against the agent at `agent_path`.
pub fn eval_command(agent_path: &str, eval_set_path: &str) -> String {
    format!("adk eval {agent_path} {eval_set_path}")
}

pub fn dry_run(command: &str) -> String {
    format!("Would run command: {command}")
}

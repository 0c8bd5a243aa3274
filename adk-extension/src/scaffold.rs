use adk_agent::{render_agent_module, render_package_init, root_agent};
use adk_core::{AdkError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Rejects names that would escape `directory_path` or produce no directory.
pub fn validate_agent_name(agent_name: &str) -> Result<()> {
    let invalid = agent_name.trim().is_empty()
        || agent_name == "."
        || agent_name == ".."
        || agent_name.contains(['/', '\\']);
    if invalid {
        return Err(AdkError::Agent(format!("Invalid agent name '{agent_name}'")));
    }
    Ok(())
}

/// Writes a new ADK agent project at `<directory_path>/<agent_name>`.
///
/// The project holds `agent.py`, the root agent configuration under the new
/// name, and an `__init__.py` importing it. Existing files are overwritten.
pub async fn create_agent(agent_name: &str, directory_path: impl AsRef<Path>) -> Result<PathBuf> {
    validate_agent_name(agent_name)?;

    let agent_dir = directory_path.as_ref().join(agent_name);
    tokio::fs::create_dir_all(&agent_dir).await?;

    let config = root_agent().renamed(agent_name);
    tokio::fs::write(agent_dir.join("agent.py"), render_agent_module(&config)).await?;
    tokio::fs::write(agent_dir.join("__init__.py"), render_package_init()).await?;

    info!(agent = agent_name, path = %agent_dir.display(), "Created agent project");
    Ok(agent_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_agent_name() {
        assert!(validate_agent_name("weather_agent").is_ok());
        assert!(validate_agent_name("my-new-agent").is_ok());
        assert!(validate_agent_name("").is_err());
        assert!(validate_agent_name("..").is_err());
        assert!(validate_agent_name("a/b").is_err());
        assert!(validate_agent_name("a\\b").is_err());
    }
}

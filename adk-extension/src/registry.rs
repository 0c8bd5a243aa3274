//! The ADK server registry: a JSON file listing named ADK API servers.
//!
//! ```json
//! {
//!   "agents": [
//!     { "name": "local", "url": "http://localhost:8000" }
//!   ]
//! }
//! ```

use crate::client::validate_server_url;
use adk_core::{AdkError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdkServer {
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Fields other than `name` and `url`, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdkServer {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), extra: Map::new() }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    agents: Vec<AdkServer>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
}

pub struct ServerRegistry {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl ServerRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// All registered servers.
    ///
    /// A missing or malformed file, a file without an `agents` array and an
    /// empty registry are all errors; callers only ever see usable entries.
    pub async fn servers(&self) -> Result<Vec<AdkServer>> {
        let label = self.label();
        let read_error = |e: &dyn std::fmt::Display| {
            AdkError::Registry(format!("Error reading or parsing {label}: {e}"))
        };

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| read_error(&e))?;
        let parsed: Value = serde_json::from_str(&raw).map_err(|e| read_error(&e))?;

        let Some(entries) = parsed.get("agents").filter(|agents| agents.is_array()) else {
            return Err(AdkError::Registry(format!(
                "Error: Invalid format for {label}. It should have an \"agents\" array."
            )));
        };
        let servers: Vec<AdkServer> =
            serde_json::from_value(entries.clone()).map_err(|e| read_error(&e))?;

        if servers.is_empty() {
            return Err(AdkError::Registry(format!("Error: No ADK servers found in {label}.")));
        }
        debug!(count = servers.len(), path = %self.path.display(), "Loaded ADK server registry");
        Ok(servers)
    }

    /// Registers `url` under `name`. An existing entry of that name gets the
    /// new URL and keeps its other fields.
    pub async fn add(&self, name: &str, url: &str) -> Result<AddOutcome> {
        validate_server_url(url)?;
        let _guard = self.write_lock.lock().await;

        let mut file = match tokio::fs::try_exists(&self.path).await? {
            true => self.load().await?,
            false => RegistryFile::default(),
        };

        let outcome = match file.agents.iter_mut().find(|server| server.name == name) {
            Some(existing) => {
                existing.url = url.to_string();
                AddOutcome::Replaced
            }
            None => {
                file.agents.push(AdkServer::new(name, url));
                AddOutcome::Added
            }
        };

        self.store(&file).await?;
        info!(server = name, url, ?outcome, "Registered ADK server");
        Ok(outcome)
    }

    /// Removes every entry named `name` and returns how many were removed.
    pub async fn remove(&self, name: &str) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        if !tokio::fs::try_exists(&self.path).await? {
            return Err(AdkError::Registry("Configuration file not found.".to_string()));
        }

        let mut file = self.load().await?;
        let before = file.agents.len();
        file.agents.retain(|server| server.name != name);
        let removed = before - file.agents.len();

        if removed == 0 {
            return Err(AdkError::Registry(format!(
                "Server '{name}' not found in configuration."
            )));
        }

        self.store(&file).await?;
        info!(server = name, removed, "Removed ADK server");
        Ok(removed)
    }

    async fn load(&self) -> Result<RegistryFile> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn store(&self, file: &RegistryFile) -> Result<()> {
        let json = serde_json::to_string_pretty(file)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

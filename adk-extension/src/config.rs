use adk_core::{AdkError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// File the server registry is kept in, relative to the working directory.
pub const REGISTRY_FILE_NAME: &str = "adk_agent_list.json";
/// User id sessions are created under on remote ADK servers.
pub const DEFAULT_USER_ID: &str = "gemini-cli";
/// Generous default: a single agent turn may run tools and several model calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub const ENV_REGISTRY_PATH: &str = "ADK_AGENT_LIST";
pub const ENV_USER_ID: &str = "ADK_USER_ID";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ADK_REQUEST_TIMEOUT_SECS";

/// Configuration for the extension server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionConfig {
    /// Path of the JSON server registry
    pub registry_path: PathBuf,
    /// User id for sessions created on ADK servers
    pub user_id: String,
    /// Timeout applied to every ADK API request, body included
    pub request_timeout: Duration,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(REGISTRY_FILE_NAME),
            user_id: DEFAULT_USER_ID.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ExtensionConfig {
    /// Defaults overridden by `ADK_AGENT_LIST`, `ADK_USER_ID` and
    /// `ADK_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ExtensionConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_REGISTRY_PATH).filter(|v| !v.trim().is_empty()) {
            config.registry_path = PathBuf::from(path);
        }
        if let Some(user_id) = lookup(ENV_USER_ID).filter(|v| !v.trim().is_empty()) {
            config.user_id = user_id;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AdkError::Config(format!(
                    "{ENV_REQUEST_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            if secs == 0 {
                return Err(AdkError::Config(format!(
                    "{ENV_REQUEST_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = path.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

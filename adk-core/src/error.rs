#[derive(Debug, thiserror::Error)]
pub enum AdkError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AdkError {
    /// The message without the category prefix that `Display` adds.
    ///
    /// Tool results surface this text directly to the MCP client.
    pub fn detail(&self) -> String {
        match self {
            AdkError::Agent(msg)
            | AdkError::Tool(msg)
            | AdkError::Config(msg)
            | AdkError::Registry(msg)
            | AdkError::Http(msg) => msg.clone(),
            AdkError::Io(err) => err.to_string(),
            AdkError::Serde(err) => err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdkError::Agent("test error".to_string());
        assert_eq!(err.to_string(), "Agent error: test error");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let adk_err: AdkError = io_err.into();
        assert!(matches!(adk_err, AdkError::Io(_)));
        assert_eq!(adk_err.detail(), "file not found");
    }

    #[test]
    fn test_detail_strips_category() {
        let err = AdkError::Http("API request failed with status 404".to_string());
        assert_eq!(err.to_string(), "HTTP error: API request failed with status 404");
        assert_eq!(err.detail(), "API request failed with status 404");
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(AdkError::Config("invalid".to_string()));
        assert!(err_result.is_err());
    }
}

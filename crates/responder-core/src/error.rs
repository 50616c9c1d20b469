//! Error types for Responder

/// Result type alias using Responder's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Responder operations
///
/// These are the errors surfaced synchronously by construction and
/// configuration paths. Evaluation never returns one of these: rule
/// failures travel inside an ERROR [`RespondingResult`](crate::RespondingResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Engine or rule configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid rule in a rule set, e.g. an empty or duplicated name
    #[error("rule error: {0}")]
    Rule(String),

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new rule error
    pub fn rule(msg: impl Into<String>) -> Self {
        Self::Rule(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("rules are empty").to_string(),
            "configuration error: rules are empty"
        );
        assert_eq!(Error::rule("bad").to_string(), "rule error: bad");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}

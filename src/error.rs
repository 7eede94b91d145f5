use thiserror::Error;

/// Error type for the probe library
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Wrong status code: {0}")]
    Status(u16),

    #[error("Failed to decode graphite response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid graphite url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid target name regexp: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for the probe library
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProbeError::Config(msg.into())
    }
}

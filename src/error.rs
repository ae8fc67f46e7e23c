use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    #[error("Invalid target format: {0}")]
    InvalidTarget(String),

    #[error("Timeout occurred during {operation}")]
    Timeout { operation: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("External tool unavailable: {0}")]
    ToolUnavailable(String),

    #[error("Orchestration error: {0}")]
    Orchestration(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
}

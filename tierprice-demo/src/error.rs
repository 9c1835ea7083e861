#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to encode quote: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;

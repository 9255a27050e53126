use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// The canvas could not be resolved into a computable description,
    /// even after applying field defaults.
    #[error("Invalid Canvas: {0}")]
    InvalidCanvas(String),

    #[error("Storage Error: {0}")]
    Storage(String),
}

pub type ArenaResult<T> = Result<T, ArenaError>;

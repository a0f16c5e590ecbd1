use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Lookup error: {0}")]
    Lookup(String),
}

pub type Result<T> = std::result::Result<T, CardboxError>;

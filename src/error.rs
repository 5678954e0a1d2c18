use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("{0}")]
    Other(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

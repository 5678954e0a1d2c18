use crate::model::CourseHole;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct RoundPlayer {
    pub player_id: String,
    pub course_handicap: i32,
}

#[derive(Debug, Clone)]
pub struct RoundDetails {
    pub total_holes: u32,
    pub players: Vec<RoundPlayer>,
}

/// One raw hole entry as the external score store records it, before any
/// handicap adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScore {
    pub player_id: String,
    pub hole: u32,
    pub gross: i32,
}

/// A wager as stored: the kind tag and the untyped configuration payload.
/// Decoding into a typed [`crate::model::WagerConfig`] happens at the
/// orchestration boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagerRecord {
    pub wager_id: i64,
    pub kind: String,
    pub config: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Read-only view of the external round/score store. The core borrows a
/// consistent snapshot per call and never writes back; persisting results and
/// settlements stays with the caller.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn round_details(&self, round_id: i64) -> Result<Option<RoundDetails>, StorageError>;
    async fn course_holes(&self, round_id: i64) -> Result<Vec<CourseHole>, StorageError>;
    async fn raw_scores(&self, round_id: i64) -> Result<Vec<RawScore>, StorageError>;
    async fn wagers_for_round(&self, round_id: i64) -> Result<Vec<WagerRecord>, StorageError>;
}

//! Error taxonomy for the friction analysis engine.
//!
//! Failures split into three groups: `Fetch` (the upstream tracker was
//! unavailable or refused the request), `Data` (the issue record or its
//! changelog is malformed or incomplete), and `PartialBatch` (one or more
//! issues inside a project batch failed without aborting the batch).
//! Nothing here is fatal to the process; the API layer maps any of these
//! into an [`ErrorEnvelope`](crate::api::ErrorEnvelope) at the boundary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrictionError>;

#[derive(Error, Debug)]
pub enum FrictionError {
    #[error("failed to fetch issue data for {id}: {reason}")]
    Fetch { id: String, reason: String },

    #[error("malformed issue data: {0}")]
    Data(String),

    #[error("{failed} of {total} issues failed during batch analysis")]
    PartialBatch { failed: usize, total: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrictionError {
    pub fn fetch<S: Into<String>, R: std::fmt::Display>(id: S, reason: R) -> Self {
        Self::Fetch {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    pub fn data<S: std::fmt::Display>(message: S) -> Self {
        Self::Data(message.to_string())
    }

    pub fn config<S: std::fmt::Display>(message: S) -> Self {
        Self::Config(message.to_string())
    }

    /// True when the failure came from the upstream tracker rather than
    /// from the issue data itself.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

//! Error taxonomy shared by the composer, the collaborator client and the UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised while composing a search, before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no query: the search text is empty")]
    NoQuery,

    #[error("invalid verse range: {0:?} (expected 1-5 or \"chapter\")")]
    InvalidRange(String),
}

/// Failures talking to the remote scripture service.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceError {
    /// Connectivity failure, non-2xx status or an undecodable body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Well-formed response carrying `success: false`.
    #[error("collaborator error: {0}")]
    Collaborator(String),
}

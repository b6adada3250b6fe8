//! Backend client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single request to the backend did not produce a usable body.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("backend responded with status {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Failure of one of the two backend operations.
///
/// The display text is fixed per operation; the underlying cause is only
/// reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to index URL content.")]
    Indexing(#[source] RequestFailure),

    #[error("Failed to perform semantic search.")]
    Search(#[source] RequestFailure),
}

/// Errors from the introspection pipeline.
use std::path::PathBuf;

use thiserror::Error;

use crate::sink::SinkError;

/// Every fatal condition of a run.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// The query document does not exist at the expected path.
    #[error("Introspection query document not found at '{}'", path.display())]
    QueryNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The query document exists but could not be read.
    #[error("Failed to read introspection query document '{}': {source}", path.display())]
    QueryRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The query document is empty.
    #[error("Introspection query document from {origin} is empty")]
    EmptyQuery {
        /// Where the document came from.
        origin: String,
    },

    /// A `-H` value could not be turned into an HTTP header.
    #[error("Invalid header '{header}': {reason}")]
    InvalidHeader {
        /// The raw header string as given.
        header: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP request failed at the transport level.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with an empty body.
    #[error("Empty response from endpoint")]
    EmptyResponse,

    /// The endpoint answered with GraphQL errors.
    #[error("GraphQL errors: {errors}")]
    GraphQL {
        /// Excerpt of the `"errors":[...]` member as received.
        errors: String,
    },

    /// Delivering the payload failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl IntrospectError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::QueryNotFound { .. }
            | Self::QueryRead { .. }
            | Self::EmptyQuery { .. }
            | Self::InvalidHeader { .. }
            | Self::Request(_)
            | Self::EmptyResponse
            | Self::GraphQL { .. }
            | Self::Sink(_) => 1,
        }
    }
}

//! Error types for the augmentation pipeline.

use thiserror::Error;

/// Errors surfaced while building trees, synthesizing fragments, or handing
/// them to a sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AugmentError {
    /// A declaration or option violated a precondition of the pipeline.
    #[error("invalid {what} '{value}': {reason}")]
    InvalidInput {
        /// The attribute that failed validation (for example, `name`).
        what: &'static str,
        /// The offending value.
        value: String,
        /// Human-readable explanation of the failure.
        reason: &'static str,
    },

    /// A syntax document could not be lowered into a tree.
    #[error("invalid syntax document at {path}: {message}")]
    InvalidDocument {
        /// Slash-separated position of the offending node (for example,
        /// `root/0/1`).
        path: String,
        /// Explanation of the structural problem.
        message: String,
    },

    /// A node handle did not belong to the tree it was used with.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(usize),

    /// Parsing a JSON syntax document failed.
    #[cfg(feature = "serde_json")]
    #[error("failed to parse syntax document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The sink refused a fragment.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Errors reported by a [`crate::FragmentSink`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SinkError {
    /// A fragment key was registered twice under a rejecting policy.
    #[error("fragment key '{0}' was already registered during this pass")]
    Collision(String),

    /// Writing the fragment failed.
    #[error("failed to write fragment '{key}': {source}")]
    Io {
        /// Key of the fragment being written.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AugmentError {
    /// Builds an [`AugmentError::InvalidInput`] value.
    #[must_use]
    pub fn invalid_input(
        what: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidInput {
            what,
            value: value.into(),
            reason,
        }
    }

    pub(crate) fn invalid_document(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for results returned by this crate.
pub type Result<T, E = AugmentError> = std::result::Result<T, E>;

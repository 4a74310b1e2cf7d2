//! Error types for the `augmentor` command-line driver.

use augmentor::AugmentError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration layer could not be extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicit `--config` path does not exist.
    #[error("configuration file not found at {0}")]
    MissingConfig(Utf8PathBuf),

    /// A driver setting failed validation.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig {
        /// Configuration key that failed validation.
        key: &'static str,
        /// Explanation of the failure.
        message: String,
    },

    /// The pipeline reported an error.
    #[error(transparent)]
    Augment(#[from] AugmentError),

    /// The manifest could not be serialized.
    #[error("failed to write manifest JSON: {0}")]
    ManifestJson(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

use std::{io, path::PathBuf};

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while loading, fetching or reconciling labels.
#[derive(Error, Debug)]
pub enum Error {
    /// The desired-state file does not exist.
    #[error("Label file not found: {}", path.display())]
    LabelFileNotFound { path: PathBuf },

    /// The desired-state file exists but could not be read.
    #[error("Failed to read label file {}: {source}", path.display())]
    ReadLabelFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The desired-state file is not a YAML list of labels.
    #[error("Failed to parse label file {}: {source}", path.display())]
    ParseLabelFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A label in the desired-state file has an unusable name or color.
    #[error("Invalid label '{name}': {reason}")]
    InvalidLabel { name: String, reason: String },

    /// The repository identifier is not of the form `owner/repo`.
    #[error("Invalid repository '{0}', expected the form owner/repo")]
    InvalidRepository(String),

    /// A request to the GitHub API failed.
    #[error("GitHub request failed: {0}")]
    GitHub(#[from] github_client::Error),

    /// A single create, update or delete operation failed.
    #[error("Failed to {operation} label '{label}': {source}")]
    Operation {
        operation: String,
        label: String,
        #[source]
        source: github_client::Error,
    },

    /// Some operations failed while the run continued past failures.
    #[error("Failed to reconcile {} label(s): {}", failed.len(), failed.join(", "))]
    PartialFailure { failed: Vec<String> },
}

/// Result alias used throughout the crate.
pub type LabelSyncResult<T> = Result<T, Error>;

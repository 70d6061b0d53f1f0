use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the label-sync CLI application.
///
/// Every variant ends the run with exit code 1; the variants only differ in
/// the diagnostic printed to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as invalid values, unknown keys, or file access problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments or prompt answers were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to read an answer from standard input.
    #[error("Failed to read input: {0}")]
    ReadInput(io::Error),

    /// Failed to flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write a prompt to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    Client(github_client::Error),

    /// Loading, fetching or reconciling labels failed.
    #[error(transparent)]
    Sync(#[from] label_sync_core::Error),
}

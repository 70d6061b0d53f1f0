//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when talking to the GitHub
//! labels API through the github_client crate. Every failure reported by octocrab
//! is classified into one of these variants so callers can report it without
//! knowing anything about the HTTP stack.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, LabelClient};
///
/// match client.delete_label("my-org", "my-repo", "stale").await {
///     Ok(()) => println!("Label deleted"),
///     Err(Error::NotFound) => eprintln!("Label was already gone"),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered with a non-success status that has no dedicated variant.
    ///
    /// The status code and the message from the GitHub error body are kept so
    /// the diagnostic printed to the user explains what the API rejected, for
    /// example a 422 when a label with the same name already exists.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The token is invalid, expired or lacks the required scopes (401/403)
    /// - The client cannot be built from the supplied credentials
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The client configuration is unusable, e.g. an API base URL that is not a valid URI.
    #[error("Invalid GitHub client configuration: {0}")]
    InvalidConfiguration(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// For the labels API this usually means the body was not a label (or list
    /// of labels) at all.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// Returned for a 404, which GitHub also uses for private repositories the
    /// token cannot see.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// No retry is attempted; the run stops and the user can try again once
    /// the limit resets.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The request never produced an HTTP response (DNS, TLS, connection reset, ...).
    #[error("Failed to reach the GitHub API: {0}")]
    Transport(String),
}

impl Error {
    /// Classifies a non-success HTTP status returned by GitHub.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Error::AuthError(message),
            404 => Error::NotFound,
            429 => Error::RateLimitExceeded,
            _ => Error::ApiError { status, message },
        }
    }
}

//! Crate for interacting with the GitHub labels REST API.
//!
//! This crate provides a client for listing, creating, updating and deleting the
//! labels of a repository, authenticating with a personal access token. The
//! [`LabelClient`] trait is the seam used by the reconciliation logic so it can
//! be exercised without a network connection.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod label;
pub use label::Label;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The largest page size the labels endpoint accepts.
pub const MAX_LABELS_PER_PAGE: usize = 100;

/// Trait for the label operations of a single repository.
///
/// Every method issues exactly one request. Non-success responses are
/// reported as errors, never ignored.
#[async_trait]
pub trait LabelClient: Send + Sync {
    /// Lists the labels of a repository.
    ///
    /// Only the first page (up to [`MAX_LABELS_PER_PAGE`] labels) is returned.
    ///
    /// # Errors
    /// Returns an `Error` if the request fails, GitHub answers with a
    /// non-success status, or the body is not a list of labels.
    async fn list_repository_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error>;

    /// Creates a new label on a repository.
    async fn create_label(&self, owner: &str, repo: &str, label: &Label) -> Result<(), Error>;

    /// Updates the color (and description) of the label with the same name.
    async fn update_label(&self, owner: &str, repo: &str, label: &Label) -> Result<(), Error>;

    /// Deletes the label with the given name.
    async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<(), Error>;
}

/// A client for the GitHub labels API, authenticated with a token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an already configured `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct ListLabelsQuery {
    per_page: usize,
}

#[async_trait]
impl LabelClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_repository_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        let path = labels_route(owner, repo);
        let query = ListLabelsQuery {
            per_page: MAX_LABELS_PER_PAGE,
        };

        debug!("Making API call to: {}", path);
        let response: OctocrabResult<Vec<Label>> = self.client.get(path, Some(&query)).await;
        match response {
            Ok(labels) => {
                info!(
                    owner = owner,
                    repo = repo,
                    count = labels.len(),
                    "Retrieved repository labels"
                );
                if labels.len() >= MAX_LABELS_PER_PAGE {
                    warn!(
                        owner = owner,
                        repo = repo,
                        page_size = MAX_LABELS_PER_PAGE,
                        "Label list filled a whole page, labels beyond the first page are not fetched"
                    );
                }
                Ok(labels)
            }
            Err(e) => Err(map_octocrab_error("Failed to list repository labels", e)),
        }
    }

    #[instrument(skip(self, label), fields(owner = %owner, repo = %repo, label = %label.name))]
    async fn create_label(&self, owner: &str, repo: &str, label: &Label) -> Result<(), Error> {
        let path = labels_route(owner, repo);
        let response: OctocrabResult<Label> = self.client.post(path, Some(label)).await;
        match response {
            Ok(created) => {
                info!(name = created.name, color = created.color, "Created label");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to create label", e)),
        }
    }

    #[instrument(skip(self, label), fields(owner = %owner, repo = %repo, label = %label.name))]
    async fn update_label(&self, owner: &str, repo: &str, label: &Label) -> Result<(), Error> {
        let path = label_route(owner, repo, &label.name);
        let response: OctocrabResult<Label> = self.client.patch(path, Some(label)).await;
        match response {
            Ok(updated) => {
                info!(name = updated.name, color = updated.color, "Updated label");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to update label", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, label = %name))]
    async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<(), Error> {
        let path = label_route(owner, repo, name);

        // DELETE answers 204 without a body, so the raw response is checked
        // instead of deserializing one.
        let response = self
            .client
            ._delete(path, None::<&()>)
            .await
            .map_err(|e| map_octocrab_error("Failed to delete label", e))?;

        ensure_success(response.status(), "Failed to delete label")?;
        info!(name = name, "Deleted label");
        Ok(())
    }
}

/// Creates an `Octocrab` client that authenticates every request with the given token.
///
/// The token is sent as a bearer token in the `Authorization` header.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token (or any token accepted as bearer auth).
/// * `base_uri` - Alternative API root, e.g. a GitHub Enterprise server. `None`
///   keeps octocrab's default of `https://api.github.com`.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `base_uri` is not a valid URI and
/// `Error::AuthError` if the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, LabelClient};
/// use secrecy::SecretString;
///
/// # async fn example() -> Result<(), github_client::Error> {
/// let token = SecretString::from("ghp_example".to_string());
/// let client = GitHubClient::new(create_token_client(&token, None)?);
/// let labels = client.list_repository_labels("octocat", "hello-world").await?;
/// println!("{} labels", labels.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.expose_secret().to_string());

    if let Some(uri) = base_uri {
        debug!(base_uri = uri, "Using custom GitHub API base URI");
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::InvalidConfiguration(format!("Invalid API base URI '{}': {}", uri, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client with token credentials");
        Error::AuthError(format!("Failed to build the GitHub client: {}", e))
    })
}

fn labels_route(owner: &str, repo: &str) -> String {
    format!("/repos/{}/{}/labels", owner, repo)
}

fn label_route(owner: &str, repo: &str, name: &str) -> String {
    format!(
        "/repos/{}/{}/labels/{}",
        owner,
        repo,
        urlencoding::encode(name)
    )
}

fn ensure_success(status: http::StatusCode, message: &str) -> Result<(), Error> {
    if status.is_success() {
        return Ok(());
    }

    let reason = status.canonical_reason().unwrap_or("unexpected status");
    error!(
        status = status.as_u16(),
        reason = reason,
        "{}. Received an error from GitHub",
        message
    );
    Err(Error::from_status(status.as_u16(), reason))
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code.as_u16();
            error!(
                status = status,
                error_message = source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            Error::from_status(status, source.message.clone())
        }
        octocrab::Error::Serde { source, .. } => {
            error!(
                error_message = source.to_string(),
                "{}. The response body could not be parsed.", message
            );
            Error::InvalidResponse
        }
        octocrab::Error::Json { source, .. } => {
            error!(
                error_message = source.to_string(),
                path = source.path().to_string(),
                "{}. The response body could not be parsed.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::UriParse { source, .. } => {
            error!(
                error_message = source.to_string(),
                "{}. Failed to parse URI.", message
            );
            Error::InvalidConfiguration(source.to_string())
        }
        octocrab::Error::Uri { source, .. } => {
            error!(
                error_message = source.to_string(),
                "{}, Failed to parse URI.", message
            );
            Error::InvalidConfiguration(source.to_string())
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::Transport(e.to_string())
        }
    }
}

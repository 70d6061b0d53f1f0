//! Fetching of the labels currently defined on a repository.

use github_client::LabelClient;
use tracing::info;

use crate::{LabelSet, LabelSyncResult, RepositoryId};

#[cfg(test)]
#[path = "remote_state_tests.rs"]
mod tests;

/// Lists the labels of `repository` with a single request.
///
/// Labels beyond the first page of results are not fetched; the client logs
/// a warning when the page is full.
///
/// # Errors
///
/// Returns `Error::GitHub` on transport failure, a non-success status, or a
/// malformed response body.
pub async fn fetch_remote_labels(
    client: &dyn LabelClient,
    repository: &RepositoryId,
) -> LabelSyncResult<LabelSet> {
    let labels = client
        .list_repository_labels(repository.owner(), repository.name())
        .await?;

    let set = LabelSet::from_labels(labels);
    info!(
        repository = %repository,
        label_count = set.len(),
        "Fetched remote labels"
    );
    Ok(set)
}

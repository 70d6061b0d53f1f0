//! # Label Sync Core
//!
//! This crate converges the labels of a GitHub repository to a set declared in
//! a local YAML file.
//!
//! ## Overview
//!
//! A sync run has three steps:
//! 1. Load the desired labels from the label file ([`load_desired_labels`])
//! 2. Fetch the labels currently on the repository ([`fetch_remote_labels`])
//! 3. Create, update and delete labels until both sides match ([`LabelReconciler`])
//!
//! [`sync_labels`] runs all three for a [`SyncRequest`].
//!
//! ## Architecture
//!
//! All GitHub access goes through the [`github_client::LabelClient`] trait, which
//! is passed in explicitly. There is no global client or credential state.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use github_client::{create_token_client, GitHubClient};
//! use label_sync_core::{sync_labels, SyncRequest};
//! use secrecy::SecretString;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let token = SecretString::from("ghp_example".to_string());
//! let client = Arc::new(GitHubClient::new(create_token_client(&token, None)?));
//!
//! let request = SyncRequest::new("my-org/my-repo".parse()?, "labels.yml");
//! let outcome = sync_labels(client, &request, |_| {}).await?;
//!
//! if let Some(result) = outcome.result {
//!     println!("Created {}, updated {}, deleted {}", result.created, result.updated, result.deleted);
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use github_client::LabelClient;
use tracing::info;

pub mod desired_state;
pub mod errors;
pub mod label_set;
pub mod reconciler;
pub mod remote_state;
pub mod repository;

pub use desired_state::{load_desired_labels, parse_desired_labels, DEFAULT_LABELS_FILENAME};
pub use errors::{Error, LabelSyncResult};
pub use label_set::LabelSet;
pub use reconciler::{
    plan_reconciliation, FailurePolicy, LabelOperation, LabelReconciler, ReconcileResult,
    ReconciliationPlan,
};
pub use remote_state::fetch_remote_labels;
pub use repository::RepositoryId;

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Everything needed for one sync run.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Repository whose labels are reconciled
    pub repository: RepositoryId,

    /// Path of the YAML file holding the desired labels
    pub labels_file: PathBuf,

    /// Compute the plan without issuing any create, update or delete
    pub dry_run: bool,

    pub failure_policy: FailurePolicy,
}

impl SyncRequest {
    /// Creates a request that applies changes and aborts on the first failure.
    pub fn new(repository: RepositoryId, labels_file: impl AsRef<Path>) -> Self {
        Self {
            repository,
            labels_file: labels_file.as_ref().to_path_buf(),
            dry_run: false,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

/// Step of a sync run, reported before the step starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    LoadingDesiredLabels,
    FetchingRemoteLabels,
    ApplyingChanges,
}

impl SyncPhase {
    /// Short human readable description of the step.
    pub fn description(&self) -> &'static str {
        match self {
            SyncPhase::LoadingDesiredLabels => "Loading labels from file",
            SyncPhase::FetchingRemoteLabels => "Loading labels from GitHub repo",
            SyncPhase::ApplyingChanges => "Updating labels on GitHub repo",
        }
    }
}

/// What a sync run computed and, unless it was a dry run, what it applied.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub plan: ReconciliationPlan,

    /// `None` for a dry run
    pub result: Option<ReconcileResult>,
}

/// Runs a full sync: load desired labels, fetch remote labels, reconcile.
///
/// `on_phase` is called before each step so callers can report progress.
///
/// # Errors
///
/// Any error loading the label file or fetching the remote labels is
/// returned as is. Operation failures follow `request.failure_policy`.
pub async fn sync_labels(
    client: Arc<dyn LabelClient>,
    request: &SyncRequest,
    mut on_phase: impl FnMut(SyncPhase),
) -> LabelSyncResult<SyncOutcome> {
    info!(
        repository = %request.repository,
        labels_file = %request.labels_file.display(),
        dry_run = request.dry_run,
        "Starting label sync"
    );

    on_phase(SyncPhase::LoadingDesiredLabels);
    let desired = load_desired_labels(&request.labels_file)?;

    on_phase(SyncPhase::FetchingRemoteLabels);
    let remote = fetch_remote_labels(client.as_ref(), &request.repository).await?;

    let plan = plan_reconciliation(&desired, &remote);
    if request.dry_run {
        info!(
            operation_count = plan.len(),
            "Dry run, no changes applied"
        );
        return Ok(SyncOutcome { plan, result: None });
    }

    on_phase(SyncPhase::ApplyingChanges);
    let reconciler = LabelReconciler::new(client, request.failure_policy);
    let result = reconciler.apply(&request.repository, &plan).await?;

    Ok(SyncOutcome {
        plan,
        result: Some(result),
    })
}

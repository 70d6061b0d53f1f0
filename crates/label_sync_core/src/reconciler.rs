//! Label reconciliation for repositories.
//!
//! This module computes the operations that turn the remote label set into the
//! desired one and provides the [`LabelReconciler`] component that issues them
//! one at a time through a [`LabelClient`].

use std::{fmt, sync::Arc};

use github_client::{Label, LabelClient};
use tracing::{debug, info, warn};

use crate::{Error, LabelSet, LabelSyncResult, RepositoryId};

/// A single change to the labels of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOperation {
    /// The label is desired but missing remotely.
    Create(Label),

    /// The label exists on both sides; carries the desired attributes.
    Update(Label),

    /// The label exists remotely but is not desired.
    Delete { name: String },
}

impl LabelOperation {
    /// Name of the label the operation applies to.
    pub fn label_name(&self) -> &str {
        match self {
            LabelOperation::Create(label) | LabelOperation::Update(label) => &label.name,
            LabelOperation::Delete { name } => name,
        }
    }

    /// Verb used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            LabelOperation::Create(_) => "create",
            LabelOperation::Update(_) => "update",
            LabelOperation::Delete { .. } => "delete",
        }
    }
}

impl fmt::Display for LabelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelOperation::Create(label) | LabelOperation::Update(label) => {
                write!(f, "{} {} (#{})", self.kind(), label.name, label.color)
            }
            LabelOperation::Delete { name } => write!(f, "{} {}", self.kind(), name),
        }
    }
}

/// The ordered list of operations produced by [`plan_reconciliation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    operations: Vec<LabelOperation>,
}

impl ReconciliationPlan {
    pub fn operations(&self) -> &[LabelOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn creates(&self) -> impl Iterator<Item = &Label> {
        self.operations.iter().filter_map(|op| match op {
            LabelOperation::Create(label) => Some(label),
            _ => None,
        })
    }

    pub fn updates(&self) -> impl Iterator<Item = &Label> {
        self.operations.iter().filter_map(|op| match op {
            LabelOperation::Update(label) => Some(label),
            _ => None,
        })
    }

    pub fn deletes(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            LabelOperation::Delete { name } => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Computes the operations that converge `remote` to `desired`.
///
/// Every desired label yields an update when a label with the same name exists
/// remotely, even if the attributes already match, and a create otherwise.
/// Every remote label that is not desired yields a delete. Creates and updates
/// come first in name order, then deletes in name order.
pub fn plan_reconciliation(desired: &LabelSet, remote: &LabelSet) -> ReconciliationPlan {
    let mut remaining = remote.clone();
    let mut operations = Vec::with_capacity(desired.len() + remote.len());

    for label in desired {
        if remaining.remove(&label.name).is_some() {
            operations.push(LabelOperation::Update(label.clone()));
        } else {
            operations.push(LabelOperation::Create(label.clone()));
        }
    }

    operations.extend(
        remaining
            .into_iter()
            .map(|label| LabelOperation::Delete { name: label.name }),
    );

    ReconciliationPlan { operations }
}

/// What to do when a single label operation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,

    /// Record the failure and carry on with the remaining operations.
    Continue,
}

/// Issues reconciliation operations against a repository.
///
/// Operations are sent one at a time in plan order. Nothing is rolled back
/// when an operation fails; labels handled before the failure stay changed.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use github_client::{Label, LabelClient};
/// use label_sync_core::{FailurePolicy, LabelReconciler, LabelSet, RepositoryId};
///
/// # async fn example(client: Arc<dyn LabelClient>) -> Result<(), Box<dyn std::error::Error>> {
/// let reconciler = LabelReconciler::new(client, FailurePolicy::Abort);
/// let repository: RepositoryId = "my-org/my-repo".parse()?;
///
/// let desired = LabelSet::from_labels(vec![Label::new("bug", "d73a4a")]);
/// let remote = LabelSet::new();
///
/// let result = reconciler.reconcile(&repository, &desired, &remote).await?;
/// println!("Created: {}, Updated: {}", result.created, result.updated);
/// # Ok(())
/// # }
/// ```
pub struct LabelReconciler {
    /// Client used for the create, update and delete calls
    client: Arc<dyn LabelClient>,

    policy: FailurePolicy,
}

impl LabelReconciler {
    /// Creates a new LabelReconciler.
    pub fn new(client: Arc<dyn LabelClient>, policy: FailurePolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Plans and applies the operations converging `remote` to `desired`.
    pub async fn reconcile(
        &self,
        repository: &RepositoryId,
        desired: &LabelSet,
        remote: &LabelSet,
    ) -> LabelSyncResult<ReconcileResult> {
        let plan = plan_reconciliation(desired, remote);
        self.apply(repository, &plan).await
    }

    /// Applies a plan to a repository.
    ///
    /// # Errors
    ///
    /// With [`FailurePolicy::Abort`], returns `Error::Operation` for the first
    /// operation that fails. With [`FailurePolicy::Continue`] failures are
    /// collected in the returned [`ReconcileResult`] instead.
    pub async fn apply(
        &self,
        repository: &RepositoryId,
        plan: &ReconciliationPlan,
    ) -> LabelSyncResult<ReconcileResult> {
        info!(
            repository = %repository,
            operation_count = plan.len(),
            policy = ?self.policy,
            "Applying label reconciliation"
        );

        let mut result = ReconcileResult::new();

        for operation in plan.operations() {
            debug!(operation = %operation, "Applying label operation");

            match self.execute(repository, operation).await {
                Ok(()) => result.record_success(operation),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(Error::Operation {
                            operation: operation.kind().to_string(),
                            label: operation.label_name().to_string(),
                            source: e,
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!(
                            name = operation.label_name(),
                            operation = operation.kind(),
                            error = ?e,
                            "Failed to apply label operation"
                        );
                        result.failed += 1;
                        result
                            .failed_labels
                            .push(operation.label_name().to_string());
                    }
                },
            }
        }

        info!(
            created = result.created,
            updated = result.updated,
            deleted = result.deleted,
            failed = result.failed,
            "Label reconciliation complete"
        );

        Ok(result)
    }

    async fn execute(
        &self,
        repository: &RepositoryId,
        operation: &LabelOperation,
    ) -> Result<(), github_client::Error> {
        let (owner, repo) = (repository.owner(), repository.name());
        match operation {
            LabelOperation::Create(label) => self.client.create_label(owner, repo, label).await,
            LabelOperation::Update(label) => self.client.update_label(owner, repo, label).await,
            LabelOperation::Delete { name } => self.client.delete_label(owner, repo, name).await,
        }
    }
}

/// Result of reconciling the labels of a repository.
///
/// Contains counters for the different outcomes of label operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileResult {
    /// Number of labels created
    pub created: usize,

    /// Number of labels updated
    pub updated: usize,

    /// Number of labels deleted
    pub deleted: usize,

    /// Number of operations that failed
    pub failed: usize,

    /// Names of labels whose operation failed (for error reporting)
    pub failed_labels: Vec<String>,
}

impl ReconcileResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Returns true if any label was created, updated or deleted.
    pub fn has_changes(&self) -> bool {
        self.created > 0 || self.updated > 0 || self.deleted > 0
    }

    fn record_success(&mut self, operation: &LabelOperation) {
        match operation {
            LabelOperation::Create(_) => self.created += 1,
            LabelOperation::Update(_) => self.updated += 1,
            LabelOperation::Delete { .. } => self.deleted += 1,
        }
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;

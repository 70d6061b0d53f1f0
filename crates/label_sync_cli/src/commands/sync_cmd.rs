//! Label sync command module.
//!
//! This module resolves the settings of a run from the command line, the
//! environment, the configuration file and interactive prompts, then drives
//! [`label_sync_core::sync_labels`] with a spinner and prints the outcome.

use std::{path::PathBuf, sync::Arc};

use clap::Args;
use colored::Colorize;
use github_client::{create_token_client, GitHubClient, LabelClient};
use label_sync_core::{
    sync_labels, FailurePolicy, RepositoryId, SyncOutcome, SyncRequest,
};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::{
    config::AppConfig,
    errors::Error,
    progress::Spinner,
    prompt::{resolve_repository, resolve_token},
};

#[cfg(test)]
#[path = "sync_cmd_tests.rs"]
mod tests;

/// Command-line arguments for a sync run.
///
/// Every argument is optional. Without `--token` and `--repo` the values are
/// asked for interactively.
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// GitHub API token used as bearer authentication.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository to update, in the form owner/repo.
    #[arg(long)]
    pub repo: Option<String>,

    /// YAML file with the desired labels [default: labels.yml].
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Path to a TOML configuration file [default: ./label-sync.toml if present].
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the planned changes without applying them.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going when a single label operation fails and report all failures at the end.
    #[arg(long)]
    pub keep_going: bool,
}

/// Fully resolved settings of one run.
pub struct SyncSettings {
    pub token: SecretString,
    pub request: SyncRequest,
    pub api_base_url: String,
}

impl SyncSettings {
    /// Merges arguments, configuration and prompt answers.
    ///
    /// Command line values win over the configuration file. The token is asked
    /// for before the repository, matching the prompt order users expect.
    pub fn resolve(
        args: &SyncArgs,
        config: &AppConfig,
        ask: &dyn Fn(&str) -> Result<String, Error>,
    ) -> Result<Self, Error> {
        let token = resolve_token(args.token.as_deref(), ask)?;
        let repository: RepositoryId = resolve_repository(args.repo.as_deref(), ask)?;

        let labels_file = args
            .labels
            .clone()
            .unwrap_or_else(|| config.labels_file.clone());

        let failure_policy = if args.keep_going || config.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        };

        let mut request = SyncRequest::new(repository, labels_file);
        request.dry_run = args.dry_run;
        request.failure_policy = failure_policy;

        Ok(Self {
            token,
            request,
            api_base_url: config.api_base_url.clone(),
        })
    }
}

/// Runs the sync command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, a prompt fails,
/// the GitHub client cannot be created, the sync fails, or (with
/// `--keep-going`) any label operation failed.
pub async fn execute(
    args: &SyncArgs,
    ask: &dyn Fn(&str) -> Result<String, Error>,
) -> Result<SyncOutcome, Error> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    let settings = SyncSettings::resolve(args, &config, ask)?;

    debug!(
        repository = %settings.request.repository,
        api_base_url = settings.api_base_url,
        "Creating GitHub client"
    );
    let octocrab = create_token_client(&settings.token, Some(&settings.api_base_url))
        .map_err(Error::Client)?;
    let client: Arc<dyn LabelClient> = Arc::new(GitHubClient::new(octocrab));

    let spinner = Spinner::start();
    let outcome = sync_labels(client, &settings.request, |phase| spinner.set_phase(phase)).await;
    spinner.finish();
    let outcome = outcome?;

    report(&settings.request, &outcome)?;
    Ok(outcome)
}

fn report(request: &SyncRequest, outcome: &SyncOutcome) -> Result<(), Error> {
    let Some(result) = &outcome.result else {
        println!(
            "{} {} change(s) planned for {}",
            "Dry run:".yellow().bold(),
            outcome.plan.len(),
            request.repository
        );
        for operation in outcome.plan.operations() {
            println!("  {}", operation);
        }
        return Ok(());
    };

    info!(
        created = result.created,
        updated = result.updated,
        deleted = result.deleted,
        failed = result.failed,
        "Sync finished"
    );
    println!(
        "Created {}, updated {}, deleted {}",
        result.created, result.updated, result.deleted
    );

    if !result.is_success() {
        println!(
            "{} {}",
            "Failed:".red().bold(),
            result.failed_labels.join(", ")
        );
        return Err(label_sync_core::Error::PartialFailure {
            failed: result.failed_labels.clone(),
        }
        .into());
    }

    println!(
        "{} {}",
        "Labels Updated:".green().bold(),
        request.repository.labels_url()
    );
    Ok(())
}

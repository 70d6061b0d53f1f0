use clap::Parser;
use label_sync_cli::{
    commands::sync_cmd::{self, SyncArgs},
    prompt::ask_user_for_value,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// label-sync: make the labels of a GitHub repository match a YAML file
#[derive(Parser)]
#[command(name = "label-sync", version)]
#[command(
    about = "Create, update and delete GitHub labels to match a labels.yml file",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    sync: SyncArgs,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with prompts and the summary.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("LABEL_SYNC_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = sync_cmd::execute(&cli.sync, &ask_user_for_value).await {
        error!("Label sync failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

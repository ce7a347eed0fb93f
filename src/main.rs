//! commitgen - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitgen::config::{CompletionConfig, run_timeout};
use commitgen::credential::acquire_credential;
use commitgen::{
    CommitMode, CommitOutcome, CommitRequest, CommitWorkflow, OpenAiClient, PromptOptions,
    SystemRunner,
};

/// Generate a commit message for staged changes and commit with it.
#[derive(Parser, Debug)]
#[command(name = "commitgen")]
#[command(about = "Generate a commit message for staged changes using a language model")]
#[command(version)]
struct Cli {
    /// Repository directory (defaults to the current directory)
    #[arg(short = 'C', long = "cwd")]
    cwd: Option<PathBuf>,

    /// Comma-separated keywords to steer the message
    #[arg(short, long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Subject hint for the message
    #[arg(short, long)]
    subject: Option<String>,

    /// Dry run - print the message without committing
    #[arg(long)]
    dry_run: bool,

    /// Model identifier (overrides COMMITGEN_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Chat-completions endpoint URL (overrides COMMITGEN_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Abort the whole run after this many seconds (overrides COMMITGEN_TIMEOUT)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(cli).await?;

    if outcome.is_failure() {
        eprintln!("{}", outcome.summary());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", outcome.summary());
    Ok(ExitCode::SUCCESS)
}

async fn run(cli: Cli) -> Result<CommitOutcome> {
    let workspace = match cli.cwd {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    let config = CompletionConfig::from_env().with_overrides(cli.model, cli.api_url);
    let timeout = cli
        .timeout
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .or_else(run_timeout);

    let request = CommitRequest {
        credential: acquire_credential(),
        workspace: Some(workspace),
        options: PromptOptions {
            keywords: cli.keywords,
            subject: cli.subject,
        },
        mode: if cli.dry_run {
            CommitMode::Preview
        } else {
            CommitMode::Apply
        },
    };

    let runner = SystemRunner;
    let client = OpenAiClient::new(config);
    let workflow = CommitWorkflow::new(&runner, &client);

    match timeout {
        Some(limit) => match tokio::time::timeout(limit, workflow.run(request)).await {
            Ok(outcome) => Ok(outcome),
            Err(_) => bail!("Timed out after {} seconds", limit.as_secs()),
        },
        None => Ok(workflow.run(request).await),
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "commitgen=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

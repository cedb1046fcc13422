//! pr-milestone binary
//!
//! Entry point invoked by the host runtime when a pull request is closed.

use clap::Parser;
use pr_milestone::config::ActionConfig;
use pr_milestone::error::Result;
use pr_milestone::event::FileEventSource;
use pr_milestone::notifier::{Flow, RunOutcome, check_event, notify};
use pr_milestone::platform::GitHubService;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Comment on and label pull requests whose author reaches a merge milestone
#[derive(Parser)]
#[command(name = "pr-milestone", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing with the given verbosity level
///
/// - 0: info (debug if the runner has debug logging enabled)
/// - 1: debug (-v)
/// - 2+: trace (-vv)
fn init_tracing(verbosity: u8) {
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let level = match verbosity {
        0 if runner_debug => tracing::Level::DEBUG,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Allow RUST_LOG to override if set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(config: ActionConfig) -> Result<RunOutcome> {
    debug!(
        repository = %config.repository,
        actor = %config.actor,
        event = %config.event_name,
        thresholds = ?config.milestones.thresholds().collect::<Vec<_>>(),
        "starting milestone run"
    );

    let source = FileEventSource::new(&config.event_name, config.event_path.clone());
    let pr = match check_event(&source)? {
        Flow::Continue(pr) => pr,
        Flow::Stop(reason) => return Ok(reason.into()),
    };

    let platform = GitHubService::new(
        config.require_token()?,
        config.repository.clone(),
        &config.api_url,
    )?;

    notify(&pr, &config.milestones, &platform).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match ActionConfig::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            info!(%outcome, "run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

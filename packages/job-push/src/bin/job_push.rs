//! CLI entry point.
//!
//!   job-push fetch [--heartbeat]       scrape listings into jobs.json
//!   job-push push --send | --dry-run   filter, dedup, and deliver

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use job_push_core::common::utils::{read_json, write_json_pretty};
use job_push_core::domains::jobs::{Job, RunState};
use job_push_core::kernel::should_run_now;
use job_push_core::workflows::{run_fetch, run_push, PushMode};
use job_push_core::{Config, Secrets};
use linkedin_client::LinkedInClient;
use telegram::TelegramService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "job-push")]
#[command(about = "Push new LinkedIn job postings to Telegram")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape job listings and write them to the jobs file
    Fetch {
        /// Only run if the current time matches the configured schedule (±5 min)
        #[arg(long)]
        heartbeat: bool,

        #[arg(long, default_value = "config.json")]
        config: PathBuf,

        #[arg(long, default_value = "jobs.json")]
        jobs: PathBuf,
    },

    /// Filter and deduplicate the jobs file, then send or preview
    Push(PushArgs),
}

#[derive(Args)]
#[group(id = "mode", required = true, multiple = false)]
struct PushModeArgs {
    /// Send to Telegram
    #[arg(long)]
    send: bool,

    /// Print the message only, no send
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct PushArgs {
    #[command(flatten)]
    mode: PushModeArgs,

    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    #[arg(long, default_value = "jobs.json")]
    jobs: PathBuf,

    #[arg(long, default_value = "state.json")]
    state: PathBuf,

    #[arg(long, default_value = "secrets.json")]
    secrets: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_push_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            heartbeat,
            config,
            jobs,
        } => fetch(heartbeat, config, jobs).await,
        Commands::Push(args) => push(args).await,
    }
}

async fn fetch(heartbeat: bool, config_path: PathBuf, jobs_path: PathBuf) -> Result<()> {
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    if heartbeat && !should_run_now(&config.schedule, Utc::now())? {
        tracing::info!("Not scheduled time. Exiting silently.");
        return Ok(());
    }

    let client = LinkedInClient::new().context("Failed to create LinkedIn client")?;
    let jobs = run_fetch(&config, &client).await?;

    write_json_pretty(&jobs_path, &jobs)?;
    tracing::info!(count = jobs.len(), path = %jobs_path.display(), "Wrote jobs");
    Ok(())
}

async fn push(args: PushArgs) -> Result<()> {
    let config = Config::load(&args.config).context("Failed to load configuration")?;
    let jobs: Vec<Job> = read_json(&args.jobs).context("Failed to load jobs")?;
    let mut state = RunState::load(&args.state).context("Failed to load state")?;
    let tz = config.delivery.tz()?;

    // Credentials are checked before anything is sent or saved
    let service = if args.mode.send {
        let secrets = Secrets::load(&args.secrets)?;
        Some(TelegramService::new(secrets.into()).context("Failed to create Telegram client")?)
    } else {
        None
    };

    let mode = match &service {
        Some(service) => PushMode::Send(service),
        None => PushMode::DryRun,
    };

    let now = Utc::now().with_timezone(&tz);
    let report = run_push(&jobs, &config, &mut state, mode, now).await;

    if let Some(preview) = &report.preview {
        println!("\n--- DRY RUN (message preview) ---\n");
        println!("{}", preview);
    }

    state.save(&args.state).context("Failed to save state")?;
    tracing::info!(total_seen = state.seen_job_ids.len(), "State saved");

    if let Some(err) = report.delivery_error {
        return Err(err.into());
    }
    Ok(())
}

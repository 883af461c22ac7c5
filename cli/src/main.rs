//! Tracker portfolio report CLI
//!
//! Loads every project visible to the configured token and prints iteration
//! and velocity reports. Configuration comes from the environment (see
//! `ptracker::Config`); flags override it.

mod window;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ptracker::app::IterationSummary;
use ptracker::domain::entities::WorkInfo;
use ptracker::report::{
    render_current_iterations, render_iteration_data, render_owners, render_work_info,
};
use ptracker::{Config, HttpTrackerClient, PortfolioLoader, ReportService};
use window::{parse_date, ReportWindow};

#[derive(Parser)]
#[command(name = "ptracker")]
#[command(about = "Iteration and velocity reports across tracker projects")]
struct Cli {
    /// Projects endpoint (overrides TRACKER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Seconds allowed for the whole run (overrides TRACKER_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
enum Commands {
    /// Iterations in progress and the cross-project totals (default)
    Current {
        /// Reference time, YYYY-MM-DD or RFC 3339 [default: two days ago]
        #[arg(long, value_parser = parse_date)]
        at: Option<DateTime<Utc>>,
    },
    /// Points per project for stories updated within a window
    Range {
        /// Window start [default: sixteen days ago]
        #[arg(long, value_parser = parse_date)]
        start: Option<DateTime<Utc>>,

        /// Window end, inclusive [default: two days ago]
        #[arg(long, value_parser = parse_date)]
        end: Option<DateTime<Utc>>,
    },
    /// Feature points per owner for iterations in progress
    Owners {
        /// Reference time [default: two days ago]
        #[arg(long, value_parser = parse_date)]
        at: Option<DateTime<Utc>>,
    },
}

#[derive(Serialize)]
struct CurrentReport<'a> {
    iterations: &'a [IterationSummary],
    all_projects: &'a WorkInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ptracker=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(secs) = cli.timeout {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    tracing::debug!(?config, "Configuration loaded");

    let output = tokio::time::timeout(config.timeout, run(&cli, &config))
        .await
        .with_context(|| format!("Report did not finish within {:?}", config.timeout))??;

    print!("{}", output);
    Ok(())
}

async fn run(cli: &Cli, config: &Config) -> Result<String> {
    let client = Arc::new(HttpTrackerClient::new(config).context("Failed to build tracker client")?);
    let portfolio = PortfolioLoader::new(client)
        .load_portfolio()
        .await
        .context("Failed to load portfolio")?;
    let service = ReportService::new(portfolio);

    let window = ReportWindow::ending_before(Utc::now());
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Current { at: None });

    report(&service, &window, command, cli.json)
}

fn report(
    service: &ReportService,
    window: &ReportWindow,
    command: Commands,
    json: bool,
) -> Result<String> {
    match command {
        Commands::Current { at } => {
            let at = at.unwrap_or(window.current);
            let iterations = service.current_iterations(at);
            let info = service.get_work_info(at);

            if json {
                to_json(&CurrentReport {
                    iterations: &iterations,
                    all_projects: &info,
                })
            } else {
                Ok(render_current_iterations(&iterations) + &render_work_info(&info))
            }
        }
        Commands::Range { start, end } => {
            let start = start.unwrap_or(window.last);
            let end = end.unwrap_or(window.current);
            if start > end {
                bail!("Window start {} is after its end {}", start, end);
            }
            let data = service.get_iteration_data(start, end);

            if json {
                to_json(&data)
            } else {
                Ok(render_iteration_data(&data, start, end))
            }
        }
        Commands::Owners { at } => {
            let iterations = service.current_iterations(at.unwrap_or(window.current));

            if json {
                to_json(&iterations)
            } else {
                Ok(render_owners(&iterations))
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("Failed to encode report")?;
    out.push('\n');
    Ok(out)
}

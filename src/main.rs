//! Fightstats main entry point
//!
//! This is the command-line interface for the fighter statistics importer.

use clap::Parser;
use fightstats::config::{load_config_from_env, Config};
use fightstats::crawler::{import_concurrent, import_sequential};
use fightstats::output::{loading_banner, page_progress_bar, render_report};
use fightstats::{FightStatsError, PageId, ResultTable};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Fightstats: a fighter statistics importer
///
/// Downloads the A-Z fighter listings, prints them as a table and reports
/// how long the import took. Set FIGHTSTATS_CONFIG to a TOML file to
/// override the host, concurrency cap or HTTP timeouts.
#[derive(Parser, Debug)]
#[command(name = "fightstats")]
#[command(version = "1.0.0")]
#[command(about = "Import fighter statistics", long_about = None)]
struct Cli {
    /// Run import synchronously
    #[arg(short, long)]
    sync: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging();

    let config = match load_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let start = Instant::now();
    println!("{}", loading_banner(&host_label(&config), cli.sync));

    let result = if cli.sync {
        import_sequential(&config)
    } else {
        run_concurrent(&config)
    };

    match result {
        Ok(table) => {
            println!("{}", render_report(&table, start.elapsed()));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Import failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber, honouring `RUST_LOG`
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fightstats=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Drives the concurrent import on a single-threaded runtime
fn run_concurrent(config: &Config) -> Result<ResultTable, FightStatsError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let progress = page_progress_bar(PageId::COUNT as u64, true);
    runtime.block_on(import_concurrent(config, &progress))
}

fn host_label(config: &Config) -> String {
    Url::parse(&config.source.base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| config.source.base_url.clone())
}

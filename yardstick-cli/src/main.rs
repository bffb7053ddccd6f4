//! `yardstick` command: compare tickers against benchmarks and print a table.
mod args;
mod config;
mod export;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use yardstick::{ChartProvider, Clock, ComparisonRequest, SystemClock, Yardstick};
use yardstick_mock::MockChartProvider;
use yardstick_relay::RelayFetcher;

use crate::args::Cli;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Human-readable logs on stderr; `RUST_LOG` overrides the default `warn`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = CliConfig::resolve(&cli)?;
    let request = ComparisonRequest::new(&cli.tickers)?;

    let (provider, clock): (Arc<dyn ChartProvider>, Arc<dyn Clock>) = if cli.use_mock() {
        tracing::info!("using mock provider");
        let mock = MockChartProvider::new();
        (Arc::new(mock), Arc::new(mock.clock()))
    } else {
        let fetcher = RelayFetcher::builder()
            .relays(cfg.relays.clone())
            .retry(cfg.retry)
            .build()?;
        (Arc::new(fetcher), Arc::new(SystemClock))
    };

    let ys = Yardstick::builder()
        .with_provider(provider)
        .clock(Arc::clone(&clock))
        .config(cfg.yardstick)
        .build()?;

    let report = ys.compare(&request).await?;
    println!("{}", render::table(&report));
    println!("{}", render::summary(&report));

    if let Some(target) = &cli.export {
        let path = target
            .clone()
            .unwrap_or_else(|| export::default_file_name(&report, clock.now()));
        export::write_csv(&report, &path)?;
        println!("Exported to {}", path.display());
    }
    Ok(())
}

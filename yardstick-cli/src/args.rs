use std::path::PathBuf;

use clap::Parser;

/// Compare stock tickers against benchmark indices over fixed look-back periods.
#[derive(Debug, Parser)]
#[command(name = "yardstick", version)]
#[command(about = "Benchmark stock tickers against indices and ETFs", long_about = None)]
pub struct Cli {
    /// Tickers to compare (e.g. AAPL MSFT)
    #[arg(required = true, value_name = "TICKERS")]
    pub tickers: Vec<String>,

    /// Comma-separated benchmark tickers (default: SPY,QQQ,IWM,EFA,GLD)
    #[arg(long, value_delimiter = ',', conflicts_with = "no_benchmarks")]
    pub benchmarks: Option<Vec<String>>,

    /// Skip the benchmark rows
    #[arg(long, default_value_t = false)]
    pub no_benchmarks: bool,

    /// Write the table as CSV; without a path, benchmark_{TICKER}_{DATE}.csv
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,

    /// Pause between tickers in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// JSON file with retry, relay and benchmark settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Serve deterministic fixture data instead of fetching (also: YARDSTICK_USE_MOCK)
    #[arg(long, default_value_t = false)]
    pub mock: bool,
}

impl Cli {
    /// True when the mock provider was requested by flag or environment.
    pub fn use_mock(&self) -> bool {
        self.mock || std::env::var("YARDSTICK_USE_MOCK").is_ok()
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use yardstick::{Benchmark, RelayConfig, RetryConfig, YardstickConfig, YardstickError};

use crate::args::Cli;

/// Settings file layout. Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Relay pass policy.
    pub retry: RetryConfig,
    /// Relays in attempt order.
    pub relays: Vec<RelayConfig>,
    /// Pause, market timezone and default benchmarks.
    pub yardstick: YardstickConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            relays: RelayConfig::defaults(),
            yardstick: YardstickConfig::default(),
        }
    }
}

impl CliConfig {
    /// Read a settings file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `InvalidArg` if it is not
    /// valid settings JSON.
    pub fn load(path: &Path) -> Result<Self, YardstickError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| YardstickError::Io(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&text).map_err(|e| {
            YardstickError::InvalidArg(format!("invalid config {}: {e}", path.display()))
        })
    }

    /// Resolve the settings for one invocation: file (or defaults), then flags.
    ///
    /// # Errors
    /// See [`CliConfig::load`].
    pub fn resolve(cli: &Cli) -> Result<Self, YardstickError> {
        let mut cfg = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        cfg.apply_flags(cli);
        Ok(cfg)
    }

    fn apply_flags(&mut self, cli: &Cli) {
        if let Some(ms) = cli.pause_ms {
            self.yardstick.ticker_pause_ms = ms;
        }
        if cli.no_benchmarks {
            self.yardstick.benchmarks.clear();
        } else if let Some(symbols) = &cli.benchmarks {
            self.yardstick.benchmarks = symbols
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| named_benchmark(s, &self.yardstick.benchmarks))
                .collect();
        }
    }
}

/// Keep the display name of a known benchmark; unknown symbols are named after themselves.
fn named_benchmark(symbol: &str, known: &[Benchmark]) -> Benchmark {
    let upper = symbol.to_ascii_uppercase();
    let defaults = Benchmark::defaults();
    known
        .iter()
        .chain(defaults.iter())
        .find(|b| b.ticker.eq_ignore_ascii_case(&upper))
        .map_or_else(
            || Benchmark::new(upper.clone(), upper.clone()),
            |b| Benchmark::new(upper.clone(), b.name.clone()),
        )
}

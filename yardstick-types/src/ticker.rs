//! Ticker requests and benchmark definitions.

use serde::{Deserialize, Serialize};

use crate::error::YardstickError;

/// Whether a row was entered by the user or comes from the benchmark set.
///
/// The role only affects presentation; computation is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TickerRole {
    /// Entered by the user.
    User,
    /// Reference ticker the user's tickers are compared against.
    Benchmark,
}

/// A reference ticker with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Market symbol, e.g. `SPY`.
    pub ticker: String,
    /// Display name, e.g. `S&P 500`.
    pub name: String,
}

impl Benchmark {
    /// Build a benchmark entry.
    pub fn new(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
        }
    }

    /// The stock benchmark set: broad US equity, tech, small caps, developed ex-US and gold.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("SPY", "S&P 500"),
            Self::new("QQQ", "Nasdaq-100"),
            Self::new("IWM", "Russell 2000"),
            Self::new("EFA", "Intl Developed (EAFE)"),
            Self::new("GLD", "Gold"),
        ]
    }
}

/// A validated, upper-cased ticker scheduled for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerRequest {
    symbol: String,
    name: String,
    role: TickerRole,
}

impl TickerRequest {
    /// Normalize and validate a symbol, then build a request.
    ///
    /// The display name defaults to the symbol itself.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is empty after trimming or contains
    /// characters that cannot appear in a chart URL path segment.
    pub fn new(symbol: &str, role: TickerRole) -> Result<Self, YardstickError> {
        let symbol = normalize_symbol(symbol)?;
        Ok(Self {
            name: symbol.clone(),
            symbol,
            role,
        })
    }

    /// Shorthand for a user-entered ticker.
    ///
    /// # Errors
    /// See [`TickerRequest::new`].
    pub fn user(symbol: &str) -> Result<Self, YardstickError> {
        Self::new(symbol, TickerRole::User)
    }

    /// Build a benchmark request from a [`Benchmark`] definition.
    ///
    /// # Errors
    /// See [`TickerRequest::new`].
    pub fn benchmark(b: &Benchmark) -> Result<Self, YardstickError> {
        Self::new(&b.ticker, TickerRole::Benchmark).map(|r| r.with_name(b.name.clone()))
    }

    /// Replace the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Upper-cased symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presentation role.
    #[must_use]
    pub const fn role(&self) -> TickerRole {
        self.role
    }

    /// True for user-entered rows.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == TickerRole::User
    }
}

fn normalize_symbol(raw: &str) -> Result<String, YardstickError> {
    let s = raw.trim().to_ascii_uppercase();
    if s.is_empty() {
        return Err(YardstickError::InvalidArg(
            "please enter a ticker symbol".to_string(),
        ));
    }
    if let Some(bad) = s
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '&' | '#' | '%'))
    {
        return Err(YardstickError::InvalidArg(format!(
            "ticker '{s}' contains invalid character '{bad}'"
        )));
    }
    Ok(s)
}

//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use sercalc_core::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};

/// SerCalc-rs — concurrent series-sum verifier.
#[derive(Parser, Debug)]
#[command(name = "sercalc", version, about)]
pub struct AppConfig {
    /// Series parameter (the comparison needs |x| > 1).
    #[arg(short, long, default_value = "3.0", env = "SERCALC_X")]
    pub x: f64,

    /// Convergence threshold.
    #[arg(short, long, default_value = "1e-7", env = "SERCALC_EPSILON")]
    pub epsilon: f64,

    /// Overall deadline for obtaining a result (e.g., "5s", "500ms").
    #[arg(long, default_value = "5s")]
    pub timeout: String,

    /// Consumer wait policy: blocking or polling.
    #[arg(long, default_value = "blocking")]
    pub wait_policy: String,

    /// Wake interval for the polling wait policy (e.g., "100ms").
    #[arg(long, default_value = "100ms")]
    pub poll_interval: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the series sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout string into a Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        parse_duration(&self.timeout).unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Parse the poll interval string into a Duration.
    #[must_use]
    pub fn poll_interval_duration(&self) -> Duration {
        parse_duration(&self.poll_interval).unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}

/// Parse a duration string like "5m", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::AppError;

const DEFAULT_SCREEN_LATENCY_MS: u64 = 2000;
const DEFAULT_BIAS_LATENCY_MS: u64 = 1000;
const DEFAULT_EXTRACT_LATENCY_MS: u64 = 800;
const DEFAULT_MATCH_LATENCY_MS: u64 = 1500;
const DEFAULT_PROGRESS_TICK_MS: u64 = 200;

/// Simulated network latency for each mock operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub screen: Duration,
    pub bias: Duration,
    pub extract: Duration,
    pub match_resume: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            screen: Duration::from_millis(DEFAULT_SCREEN_LATENCY_MS),
            bias: Duration::from_millis(DEFAULT_BIAS_LATENCY_MS),
            extract: Duration::from_millis(DEFAULT_EXTRACT_LATENCY_MS),
            match_resume: Duration::from_millis(DEFAULT_MATCH_LATENCY_MS),
        }
    }
}

/// Which bias analyzer backs `analyze_bias`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BiasAnalyzerKind {
    #[default]
    PassThrough,
    Reroll,
}

impl FromStr for BiasAnalyzerKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" | "pass-through" => Ok(Self::PassThrough),
            "reroll" => Ok(Self::Reroll),
            other => Err(AppError::Config(format!(
                "unknown bias analyzer '{other}' (expected 'passthrough' or 'reroll')"
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub latency: LatencyConfig,
    pub progress_tick: Duration,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub bias_analyzer: BiasAnalyzerKind,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            progress_tick: Duration::from_millis(DEFAULT_PROGRESS_TICK_MS),
            seed: None,
            bias_analyzer: BiasAnalyzerKind::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let latency = LatencyConfig {
            screen: millis(&lookup, "SCREEN_LATENCY_MS", DEFAULT_SCREEN_LATENCY_MS)?,
            bias: millis(&lookup, "BIAS_LATENCY_MS", DEFAULT_BIAS_LATENCY_MS)?,
            extract: millis(&lookup, "EXTRACT_LATENCY_MS", DEFAULT_EXTRACT_LATENCY_MS)?,
            match_resume: millis(&lookup, "MATCH_LATENCY_MS", DEFAULT_MATCH_LATENCY_MS)?,
        };

        let progress_tick = millis(&lookup, "PROGRESS_TICK_MS", DEFAULT_PROGRESS_TICK_MS)?;
        if progress_tick.is_zero() {
            anyhow::bail!("PROGRESS_TICK_MS must be greater than zero");
        }

        let seed = lookup("SCREENER_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .context("SCREENER_SEED must be an unsigned integer")
            })
            .transpose()?;

        let bias_analyzer = match lookup("BIAS_ANALYZER") {
            Some(raw) => raw.parse::<BiasAnalyzerKind>()?,
            None => BiasAnalyzerKind::default(),
        };

        Ok(Config {
            latency,
            progress_tick,
            seed,
            bias_analyzer,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default,
    };
    Ok(Duration::from_millis(value))
}

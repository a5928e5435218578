//! Configuration types for trend-tracker

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub oracle: OracleConfig,
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub upkeep: UpkeepConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    pub telemetry: TelemetryConfig,
}

/// Price oracle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// Oracle provider; only "coinbase" is currently wired up
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the provider API
    #[serde(default = "default_oracle_url")]
    pub base_url: String,

    /// Currency pair to track
    #[serde(default = "default_pair")]
    pub pair: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "coinbase".to_string()
}
fn default_oracle_url() -> String {
    crate::oracle::COINBASE_API_URL.to_string()
}
fn default_pair() -> String {
    "ETH-USD".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_oracle_url(),
            pair: default_pair(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Tracker seeding and persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Base URI the band index is appended to
    pub base_uri: String,

    /// Seed price in whole USD, used when no state has been persisted yet
    #[serde(default = "default_seed_price")]
    pub seed_price: Decimal,

    /// Seed unix timestamp; defaults to startup time when absent
    #[serde(default)]
    pub seed_timestamp: Option<i64>,

    /// Path of the persisted state file
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
}

fn default_seed_price() -> Decimal {
    Decimal::from(2000)
}
fn default_state_path() -> PathBuf {
    PathBuf::from("./data/state.json")
}

/// Upkeep polling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpkeepConfig {
    /// Seconds between oracle polls. The day-gate makes any cadence safe;
    /// polling more often than daily only produces skipped cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    300
}

impl Default for UpkeepConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Observation journal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Enable the CSV journal of committed updates
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path of the journal file
    #[serde(default = "default_journal_path")]
    pub path: PathBuf,
}

fn default_true() -> bool {
    true
}
fn default_journal_path() -> PathBuf {
    PathBuf::from("./data/journal.csv")
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_journal_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Port for the Prometheus exporter; absent disables it
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

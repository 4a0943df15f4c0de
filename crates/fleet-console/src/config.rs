//! TOML configuration for the fleet console.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fleet_cases::{DeriveConfig, SummaryLimits};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIXTURE_PATH: &str = "assets-data.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Console configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Path of the asset fixture JSON.
    pub fixture_path: PathBuf,
    /// Seed for score sampling; unset means a fresh ordering on every run.
    pub score_seed: Option<u64>,
    /// Default tracing filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    pub limits: LimitsConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
            score_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Row limits for the dashboard summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub top_risk: usize,
    pub recent_alerts: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = SummaryLimits::default();
        Self {
            top_risk: limits.top_risk,
            recent_alerts: limits.recent_alerts,
        }
    }
}

impl ConsoleConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid console config")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// `<config_dir>/fleet-console/config.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fleet-console").join("config.toml"))
    }

    /// Resolve the active config: an explicit path must exist; otherwise the
    /// default location is used if present, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, fixture: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(fixture) = fixture {
            self.fixture_path = fixture;
        }
        if seed.is_some() {
            self.score_seed = seed;
        }
        self
    }

    pub fn summary_limits(&self) -> SummaryLimits {
        SummaryLimits {
            top_risk: self.limits.top_risk,
            recent_alerts: self.limits.recent_alerts,
        }
    }

    pub fn derive_config(&self, today: Option<chrono::NaiveDate>) -> DeriveConfig {
        DeriveConfig {
            score_seed: self.score_seed,
            today,
        }
    }
}

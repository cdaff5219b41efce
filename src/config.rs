//! Engine configuration
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock tuning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error reading config: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Heuristic constants for seniority scoring and recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score boost when a leadership-action verb appears ("architected", "led", ...)
    pub leadership_boost: f64,
    /// Score boost when only a title word appears ("senior", "staff", ...)
    pub title_boost: f64,
    /// Relevance multiplier for senior bridge skills offered to non-senior profiles
    pub senior_bridge_multiplier: f64,
    /// Years at or above which the numeric rule yields Senior
    pub senior_years: u32,
    /// Score strictly above which the numeric rule yields Senior
    pub senior_score: f64,
    /// Years at or above which the numeric rule yields Mid
    pub mid_years: u32,
    /// Score strictly above which the numeric rule yields Mid
    pub mid_score: f64,
    /// Extracted year counts at or above this are treated as noise ("2024 years")
    pub max_plausible_years: u32,
    /// Number of bridge skills returned
    pub max_bridges: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            leadership_boost: 0.15,
            title_boost: 0.10,
            senior_bridge_multiplier: 1.5,
            senior_years: 5,
            senior_score: 0.7,
            mid_years: 3,
            mid_score: 0.4,
            max_plausible_years: 40,
            max_bridges: 3,
        }
    }
}

/// Snapshot loading and hot reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Snapshot file (None = start with an empty graph)
    pub snapshot_path: Option<PathBuf>,
    /// Watch the snapshot file and reload on change
    pub watch: bool,
    /// Quiet period after a change notification before re-reading
    pub debounce_ms: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            watch: true,
            debounce_ms: 500,
        }
    }
}

impl ReloadConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub reload: ReloadConfig,
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let config = Self::from_yaml_str(&fs::read_to_string(path)?)?;
        info!("Loaded engine config from {:?}", path);
        Ok(config)
    }
}

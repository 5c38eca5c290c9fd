// copycheck-config - Detection policy configuration
//
// The window lengths, match counts and collusion window are policy knobs,
// not derived quantities, so they load from layered sources:
// 1. Environment variables (COPYCHECK_* prefix, highest priority)
// 2. Config file path from COPYCHECK_CONFIG
// 3. ./copycheck.toml if present
// 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

mod env_overrides;
mod validation;

pub use env_overrides::{EnvSource, ENV_PREFIX};

/// Detection policy thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Token-window length whose single verbatim match is decisive.
    pub long_window: usize,
    /// Token-window length for the accumulating short tier.
    pub short_window: usize,
    /// Short-window matches required for a pairwise report.
    pub short_match_count: usize,
    /// Distinct pooled short-window matches required for a patchwork report.
    pub patchwork_count: usize,
    /// Two matching submissions closer together than this are both flagged.
    pub collusion_window_ms: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            long_window: 75,
            short_window: 15,
            short_match_count: 10,
            patchwork_count: 20,
            collusion_window_ms: 1500,
        }
    }
}

impl DetectionConfig {
    pub fn collusion_window(&self) -> Duration {
        Duration::from_millis(self.collusion_window_ms)
    }

    /// Load configuration from all sources with priority.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(path) = std::env::var("COPYCHECK_CONFIG") {
            Self::parse_file(Path::new(&path))?
        } else if Path::new("./copycheck.toml").exists() {
            Self::parse_file(Path::new("./copycheck.toml"))?
        } else {
            Self::default()
        };

        env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path, then apply environment
    /// overrides on top.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::parse_file(path.as_ref())?;
        env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }
}

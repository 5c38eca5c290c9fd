use super::DetectionConfig;
use anyhow::{anyhow, Result};

pub const ENV_PREFIX: &str = "COPYCHECK_";

/// Abstraction over environment-variable lookups so tests (and hosts without
/// `std::env`) can supply their own source of overrides.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides (highest priority) to the config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut DetectionConfig, env: &E) -> Result<()> {
    if let Some(val) = get_env_usize(env, "LONG_WINDOW")? {
        config.long_window = val;
    }
    if let Some(val) = get_env_usize(env, "SHORT_WINDOW")? {
        config.short_window = val;
    }
    if let Some(val) = get_env_usize(env, "SHORT_MATCH_COUNT")? {
        config.short_match_count = val;
    }
    if let Some(val) = get_env_usize(env, "PATCHWORK_COUNT")? {
        config.patchwork_count = val;
    }
    if let Some(val) = get_env_u64(env, "COLLUSION_WINDOW_MS")? {
        config.collusion_window_ms = val;
    }

    Ok(())
}

fn get_env_usize<E: EnvSource>(env: &E, key: &str) -> Result<Option<usize>> {
    match env.get(key) {
        Some(val) => {
            let parsed = val
                .parse::<usize>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn get_env_u64<E: EnvSource>(env: &E, key: &str) -> Result<Option<u64>> {
    match env.get(key) {
        Some(val) => {
            let parsed = val
                .parse::<u64>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

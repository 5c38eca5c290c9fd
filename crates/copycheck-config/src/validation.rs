// Configuration validation
//
// The detection thresholds interact: the short tier only exists to catch
// what the long tier cannot, so the short window must not exceed the long
// one, and a zero window or count would make a tier fire on everything.

use crate::DetectionConfig;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &DetectionConfig) -> Result<()> {
    if config.long_window == 0 {
        bail!("long_window must be greater than 0");
    }

    if config.short_window == 0 {
        bail!("short_window must be greater than 0");
    }

    if config.short_window > config.long_window {
        bail!(
            "short_window ({}) must not exceed long_window ({})",
            config.short_window,
            config.long_window
        );
    }

    if config.short_match_count == 0 {
        bail!("short_match_count must be greater than 0");
    }

    if config.patchwork_count == 0 {
        bail!("patchwork_count must be greater than 0");
    }

    // A collusion window of zero is legal: it disables the both-flagged rule
    // entirely. Warn when it dwarfs plausible submission spacing.
    if config.collusion_window_ms > 60 * 60 * 1000 {
        warn!(
            collusion_window_ms = config.collusion_window_ms,
            "collusion_window_ms is over an hour; most matches will flag both parties"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DetectionConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_windows_rejected() {
        let mut config = DetectionConfig::default();
        config.long_window = 0;
        assert!(validate_config(&config).is_err());

        let mut config = DetectionConfig::default();
        config.short_window = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_short_window_must_fit_inside_long() {
        let mut config = DetectionConfig::default();
        config.short_window = config.long_window + 1;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("short_window"));
    }

    #[test]
    fn test_zero_counts_rejected() {
        let mut config = DetectionConfig::default();
        config.short_match_count = 0;
        assert!(validate_config(&config).is_err());

        let mut config = DetectionConfig::default();
        config.patchwork_count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_collusion_window_allowed() {
        let mut config = DetectionConfig::default();
        config.collusion_window_ms = 0;
        assert!(validate_config(&config).is_ok());
    }
}

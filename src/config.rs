//! Configuration management module
//!
//! Loads environment-based configuration for storage, reward amounts and the
//! cosmetic processing delays.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid number format in environment variable {0}")]
    ParseError(&'static str),
}

/// Local persistence settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the persisted user record
    pub data_dir: PathBuf,
    /// Fixed application namespace the user record is keyed by
    pub namespace: String,
}

/// Vibe point rewards
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RewardSettings {
    pub submission_points: u32,
    pub kit_order_points: u32,
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            submission_points: 25,
            kit_order_points: 50,
        }
    }
}

/// Simulated latency settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SimulationSettings {
    /// Delay before a mood analysis result is revealed
    pub analysis_delay_ms: u64,
    /// Interval between rotating status messages
    pub status_step_ms: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub rewards: RewardSettings,
    pub simulation: SimulationSettings,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            storage: StorageSettings {
                data_dir: env::var("VIBESYNC_DATA_DIR")
                    .unwrap_or_else(|_| ".vibesync".into())
                    .into(),
                namespace: env::var("VIBESYNC_NAMESPACE")
                    .unwrap_or_else(|_| "vibesync_user".into()),
            },
            rewards: RewardSettings {
                submission_points: parse_var("VIBESYNC_SUBMISSION_POINTS", 25)?,
                kit_order_points: parse_var("VIBESYNC_KIT_ORDER_POINTS", 50)?,
            },
            simulation: SimulationSettings {
                analysis_delay_ms: parse_var("VIBESYNC_ANALYSIS_DELAY_MS", 2000)?,
                status_step_ms: parse_var("VIBESYNC_STATUS_STEP_MS", 800)?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, SettingsError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| SettingsError::ParseError(key)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test touches a disjoint set of variables so they can run in parallel.

    #[test]
    fn test_default_settings() {
        env::remove_var("VIBESYNC_NAMESPACE");
        env::remove_var("VIBESYNC_SUBMISSION_POINTS");
        env::remove_var("VIBESYNC_ANALYSIS_DELAY_MS");

        let settings = Settings::from_env().unwrap();

        assert_eq!(settings.storage.namespace, "vibesync_user");
        assert_eq!(settings.rewards.submission_points, 25);
        assert_eq!(settings.simulation.analysis_delay_ms, 2000);
    }

    #[test]
    fn test_custom_settings() {
        env::set_var("VIBESYNC_KIT_ORDER_POINTS", "75");
        env::set_var("VIBESYNC_STATUS_STEP_MS", "10");

        let settings = Settings::from_env().unwrap();

        assert_eq!(settings.rewards.kit_order_points, 75);
        assert_eq!(settings.simulation.status_step_ms, 10);

        env::remove_var("VIBESYNC_KIT_ORDER_POINTS");
        env::remove_var("VIBESYNC_STATUS_STEP_MS");
    }

    #[test]
    fn test_reward_defaults() {
        let rewards = RewardSettings::default();
        assert_eq!(rewards.submission_points, 25);
        assert_eq!(rewards.kit_order_points, 50);
    }
}

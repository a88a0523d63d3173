// src/config/app_config.rs
//! Application boot configuration.
//!
//! Layered sources in order: optional TOML files, then environment
//! variables prefixed `PROCHECK__`. Runtime-mutable scoring thresholds are
//! not boot config; they live in the settings store.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub profile: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { profile: "development".to_string() }
    }
}

/// Timer windows for the simulated audit scans, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub scan_delay_ms: u64,
    pub batch_stagger_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { scan_delay_ms: 1500, batch_stagger_ms: 150 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data") }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Generative-summary bridge. Absent endpoint or key keeps the bridge
/// offline and the summarizer on its fallback copy.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { endpoint: None, api_key: None, timeout_secs: 10 }
    }
}

impl AppConfig {
    /// Load from the default file locations plus the environment.
    pub fn load() -> Result<Self> {
        Self::load_from_sources(&[
            PathBuf::from("config/default.toml"),
            PathBuf::from("config/local.toml"),
        ])
    }

    /// Load files in order (later files override), then environment
    /// variables, then validate.
    pub fn load_from_sources(config_paths: &[PathBuf]) -> Result<Self> {
        let mut builder = Config::builder();

        for path in config_paths {
            if path.exists() {
                builder = builder.add_source(File::from(path.clone()));
                info!("loaded config file: {:?}", path);
            } else {
                info!("config file not found, skipping: {:?}", path);
            }
        }

        builder = builder.add_source(Environment::with_prefix("PROCHECK").separator("__"));

        let built = builder.build().context("failed to build configuration")?;
        let app_config: AppConfig =
            built.try_deserialize().context("failed to deserialize configuration")?;

        Self::validate(&app_config)?;
        Ok(app_config)
    }

    fn validate(cfg: &AppConfig) -> Result<()> {
        let valid_profiles = ["development", "staging", "production"];
        if !valid_profiles.contains(&cfg.environment.profile.as_str()) {
            anyhow::bail!(
                "invalid environment profile '{}', must be one of {:?}",
                cfg.environment.profile,
                valid_profiles
            );
        }
        if cfg.scan.scan_delay_ms == 0 {
            anyhow::bail!("scan.scan_delay_ms must be non-zero");
        }
        if cfg.scan.batch_stagger_ms == 0 {
            anyhow::bail!("scan.batch_stagger_ms must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.environment.profile, "development");
        assert_eq!(cfg.scan.scan_delay_ms, 1500);
        assert_eq!(cfg.scan.batch_stagger_ms, 150);
        assert!(cfg.summary.endpoint.is_none());
        AppConfig::validate(&cfg).unwrap();
    }

    #[test]
    fn bad_profile_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.environment.profile = "qa".to_string();
        assert!(AppConfig::validate(&cfg).is_err());
    }

    #[test]
    fn zero_delay_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.scan.scan_delay_ms = 0;
        assert!(AppConfig::validate(&cfg).is_err());
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let cfg =
            AppConfig::load_from_sources(&[PathBuf::from("does/not/exist.toml")]).unwrap();
        assert_eq!(cfg.scan.scan_delay_ms, 1500);
    }
}

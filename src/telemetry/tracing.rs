// src/telemetry/tracing.rs
//! Tracing bootstrap for the host application.
//!
//! Level resolution order: explicit config, then `RUST_LOG`, then `info`.
//! Safe to call more than once; only the first initialization wins.

use tracing_subscriber::EnvFilter;

use crate::config::app_config::LoggingConfig;

pub fn init_tracing(cfg: &LoggingConfig) {
    let filter = match &cfg.level {
        Some(level) => EnvFilter::new(level.clone()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_initialization_is_harmless() {
        let cfg = LoggingConfig { level: Some("debug".to_string()) };
        init_tracing(&cfg);
        init_tracing(&cfg);
    }
}

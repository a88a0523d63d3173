// src/repository/settings_store.rs

use anyhow::Result;
use std::sync::Arc;

use crate::domain::model::settings::ThresholdSettings;
use crate::repository::kv::{self, keys, KeyValueBackend};

/// Threshold settings persistence. The object is written whole; there is no
/// per-metric patching.
#[derive(Clone)]
pub struct SettingsStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl SettingsStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Persisted settings, `None` when the user never saved any.
    pub async fn get(&self) -> Result<Option<ThresholdSettings>> {
        kv::get_json_or(self.backend.as_ref(), keys::SETTINGS, None).await
    }

    /// Persisted settings or the shipped scoring defaults.
    pub async fn get_or_default(&self) -> Result<ThresholdSettings> {
        Ok(self.get().await?.unwrap_or_default())
    }

    pub async fn save(&self, settings: &ThresholdSettings) -> Result<()> {
        kv::put_json(self.backend.as_ref(), keys::SETTINGS, settings).await
    }
}

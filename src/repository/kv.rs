// src/repository/kv.rs
//! Key-value persistence backend.
//!
//! This module provides:
//! - `KeyValueBackend` trait: whole-document get/put/remove under stable,
//!   namespaced keys. No partial updates, no cross-key atomicity.
//! - `InMemoryBackend` for fast tests and local dev.
//! - `FileBackend` writing one JSON document per key, standing in for the
//!   future REST-backed store with the same contract.
//!
//! An absent key is a defined default for the caller (empty list, `None`,
//! `false`), never an error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Namespaced keys shared by every store. Stable strings: renaming one
/// orphans previously persisted data.
pub mod keys {
    pub const TENANTS: &str = "procheck_v4_tenants";
    pub const LOGS: &str = "procheck_v4_logs";
    pub const SESSION: &str = "procheck_v4_session";
    pub const SETTINGS: &str = "procheck_v4_settings";
    pub const ENGINEERS: &str = "procheck_v4_engineers";
    pub const GUIDE_SEEN: &str = "procheck_v4_guide_seen";
    pub const TUTORIALS_SEEN: &str = "procheck_v4_tutorials_seen";
}

#[async_trait]
pub trait KeyValueBackend: Send + Sync + 'static {
    /// Fetch the raw document stored under `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the document stored under `key`. Removing an absent key is fine.
    async fn remove(&self, key: &str) -> Result<()>;
}

pub struct InMemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self { entries: RwLock::new(HashMap::new()) }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueBackend for InMemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// One JSON file per key under a data directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read key {key}")),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .with_context(|| format!("failed to write key {key}"))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove key {key}")),
        }
    }
}

/// Decode helper: absent or empty documents become the caller's default.
pub async fn get_json_or<T>(backend: &dyn KeyValueBackend, key: &str, default: T) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match backend.get(key).await? {
        Some(raw) => {
            serde_json::from_str(&raw).with_context(|| format!("corrupt document under key {key}"))
        }
        None => Ok(default),
    }
}

/// Encode helper shared by the typed stores.
pub async fn put_json<T>(backend: &dyn KeyValueBackend, key: &str, value: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let raw = serde_json::to_string(value).with_context(|| format!("failed to encode key {key}"))?;
    backend.put(key, &raw).await
}

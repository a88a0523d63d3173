// src/repository/log_store.rs
//! Append-only audit log store.
//!
//! Newest-first, capped at the most recent 1000 entries; older entries are
//! silently dropped on append. Entries are immutable once written. Filtering
//! by type or severity is a read-side convenience, the stored sequence is
//! returned as-is.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::model::log::{LogEntry, LogSeverity, LogType, NewLogEntry};
use crate::repository::kv::{self, keys, KeyValueBackend};

pub const LOG_CAPACITY: usize = 1000;

#[derive(Clone)]
pub struct LogStore {
    backend: Arc<dyn KeyValueBackend>,
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl LogStore {
    /// Load the persisted sequence (newest first) and take ownership of it.
    pub async fn open(backend: Arc<dyn KeyValueBackend>) -> Result<Self> {
        let entries: Vec<LogEntry> =
            kv::get_json_or(backend.as_ref(), keys::LOGS, Vec::new()).await?;
        Ok(Self { backend, entries: Arc::new(RwLock::new(entries)) })
    }

    /// Complete a partial entry with a fresh id and the current timestamp,
    /// prepend it, trim to capacity, persist and return the completed entry.
    pub async fn append(&self, new_entry: NewLogEntry) -> Result<LogEntry> {
        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            log_type: new_entry.log_type,
            severity: new_entry.severity,
            user: new_entry.user,
            message: new_entry.message,
            target_id: new_entry.target_id,
            tenant_id: new_entry.tenant_id,
            tenant_name: new_entry.tenant_name,
        };

        let mut entries = self.entries.write().await;
        entries.insert(0, entry.clone());
        entries.truncate(LOG_CAPACITY);
        kv::put_json(self.backend.as_ref(), keys::LOGS, &*entries).await?;
        metrics::counter!("procheck_log_appends").increment(1);

        Ok(entry)
    }

    /// Full stored sequence, newest first.
    pub async fn get_all(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Read-side filter used by the activity view. Every predicate is
    /// optional; `search` matches message or actor, case-insensitive.
    pub async fn query(
        &self,
        log_type: Option<LogType>,
        severity: Option<LogSeverity>,
        search: Option<&str>,
    ) -> Vec<LogEntry> {
        let needle = search.map(|s| s.to_lowercase());
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| {
                if let Some(t) = log_type {
                    if entry.log_type != t {
                        return false;
                    }
                }
                if let Some(s) = severity {
                    if entry.severity != s {
                        return false;
                    }
                }
                if let Some(ref needle) = needle {
                    if !entry.message.to_lowercase().contains(needle)
                        && !entry.user.to_lowercase().contains(needle)
                    {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::kv::InMemoryBackend;

    #[tokio::test]
    async fn append_assigns_identity_and_prepends() {
        let store = LogStore::open(Arc::new(InMemoryBackend::new())).await.unwrap();

        let first = store
            .append(NewLogEntry::simple(LogType::System, LogSeverity::Info, "System", "boot"))
            .await
            .unwrap();
        let second = store
            .append(NewLogEntry::simple(LogType::Audit, LogSeverity::Info, "System", "scan"))
            .await
            .unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let all = store.get_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id, "newest entry sits at index 0");
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn reopen_recovers_persisted_entries() {
        let backend: Arc<dyn KeyValueBackend> = Arc::new(InMemoryBackend::new());

        let store = LogStore::open(backend.clone()).await.unwrap();
        store
            .append(NewLogEntry::simple(LogType::Security, LogSeverity::Info, "admin", "login"))
            .await
            .unwrap();

        let reopened = LogStore::open(backend).await.unwrap();
        let all = reopened.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].message, "login");
    }

    #[tokio::test]
    async fn query_filters_by_type_severity_and_text() {
        let store = LogStore::open(Arc::new(InMemoryBackend::new())).await.unwrap();
        store
            .append(NewLogEntry::simple(LogType::Audit, LogSeverity::Info, "System", "Audit scan completed"))
            .await
            .unwrap();
        store
            .append(NewLogEntry::simple(LogType::Security, LogSeverity::Error, "intruder", "Login denied"))
            .await
            .unwrap();

        let audits = store.query(Some(LogType::Audit), None, None).await;
        assert_eq!(audits.len(), 1);

        let errors = store.query(None, Some(LogSeverity::Error), None).await;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].user, "intruder");

        let hits = store.query(None, None, Some("SCAN")).await;
        assert_eq!(hits.len(), 1);
    }
}

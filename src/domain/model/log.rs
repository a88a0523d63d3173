// src/domain/model/log.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogType {
    System,
    Audit,
    Security,
    Tenant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
}

/// Immutable audit record. Created only by appending through the log store,
/// which assigns `id` and `timestamp`; entries are never edited or deleted
/// individually, only bulk-trimmed by the retention cap.
///
/// Correlation fields are a closed set; there is no free-form metadata bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub severity: LogSeverity,
    pub user: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

/// Partial entry handed to the store; id and timestamp are assigned there.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub log_type: LogType,
    pub severity: LogSeverity,
    pub user: String,
    pub message: String,
    pub target_id: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_name: Option<String>,
}

impl NewLogEntry {
    /// Entry with no tenant correlation, the common case for system and
    /// security events.
    pub fn simple(
        log_type: LogType,
        severity: LogSeverity,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        NewLogEntry {
            log_type,
            severity,
            user: user.into(),
            message: message.into(),
            target_id: None,
            tenant_id: None,
            tenant_name: None,
        }
    }

    /// Entry correlated with a tenant record.
    pub fn for_tenant(
        log_type: LogType,
        severity: LogSeverity,
        user: impl Into<String>,
        message: impl Into<String>,
        tenant_id: impl Into<String>,
        tenant_name: impl Into<String>,
    ) -> Self {
        let tenant_id = tenant_id.into();
        NewLogEntry {
            log_type,
            severity,
            user: user.into(),
            message: message.into(),
            target_id: Some(tenant_id.clone()),
            tenant_id: Some(tenant_id),
            tenant_name: Some(tenant_name.into()),
        }
    }
}

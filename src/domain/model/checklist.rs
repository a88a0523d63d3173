// src/domain/model/checklist.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::ResourceIssue;
use super::tenant::HealthStatus;

/// SOP rule grouping shown in the checklist UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Compute,
    Storage,
    Network,
    Protection,
    Governance,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Compute => "Compute",
            Category::Storage => "Storage",
            Category::Network => "Network",
            Category::Protection => "Protection",
            Category::Governance => "Governance",
        };
        f.write_str(label)
    }
}

/// Power/activity state attached to a single metric sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingState {
    Active,
    Idle,
    Maintenance,
}

/// One timestamped sample inside a metric history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReading {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub status: ReadingState,
}

/// Named measurement with its evaluation threshold and recent history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    pub name: String,
    pub value: f64,
    pub threshold: f64,
    pub unit: String,
    pub status: HealthStatus,
    pub history: Vec<MetricReading>,
}

/// One evaluated compliance rule within a tenant's checklist.
///
/// Item ids come from the fixed SOP catalog and stay stable across scans so
/// that runs can be compared by id. Diagnostic fields (`error_code`, `cause`,
/// `resolution`) are populated only when the status is not Healthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub category: Category,
    pub status: HealthStatus,
    pub last_checked: DateTime<Utc>,
    pub summary: String,
    pub checks_performed: Vec<String>,
    pub affected_resources: Vec<ResourceIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricValue>,
    pub is_applicable: bool,
}

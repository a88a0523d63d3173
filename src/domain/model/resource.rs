// src/domain/model/resource.rs

use serde::{Deserialize, Serialize};

use super::tenant::HealthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceState {
    Active,
    Idle,
}

/// One synthetic cloud asset referenced by a checklist item's evaluation.
///
/// Not independently persisted. Lives nested under a checklist item and is
/// flattened into tenant-level and portfolio-level inventory views, where
/// `tenant_name` is stamped on by the global flattening only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceIssue {
    pub resource_name: String,
    pub resource_type: String,
    pub status: HealthStatus,
    pub state: ResourceState,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

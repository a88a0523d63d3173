// src/domain/model/tenant.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checklist::ChecklistItem;

/// Aggregate health verdict used for tenants, checklist items, metrics and
/// resources alike. Serialized forms match the dashboard display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    Unknown,
    #[serde(rename = "N/A")]
    Na,
    #[serde(rename = "Disabled by Policy")]
    Disabled,
}

impl HealthStatus {
    /// Relative severity used when folding checklist items into one tenant
    /// verdict. Non-applicable and policy-disabled items do not participate.
    fn severity_rank(self) -> Option<u8> {
        match self {
            HealthStatus::Critical => Some(3),
            HealthStatus::Warning => Some(2),
            HealthStatus::Unknown => Some(1),
            HealthStatus::Healthy => Some(0),
            HealthStatus::Na | HealthStatus::Disabled => None,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Warning => "Warning",
            HealthStatus::Critical => "Critical",
            HealthStatus::Unknown => "Unknown",
            HealthStatus::Na => "N/A",
            HealthStatus::Disabled => "Disabled by Policy",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStatus {
    Pending,
    Complete,
    #[serde(rename = "Missing Prerequisites")]
    MissingPrerequisites,
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OnboardingStatus::Pending => "Pending",
            OnboardingStatus::Complete => "Complete",
            OnboardingStatus::MissingPrerequisites => "Missing Prerequisites",
        };
        f.write_str(label)
    }
}

/// One customer Azure subscription under MSP management.
///
/// A tenant exclusively owns its checklist; scans replace the checklist
/// wholesale and the aggregate `status` is always re-derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub subscription_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Entra directory (tenant) id of the customer, distinct from `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<String>,
    pub location: String,
    pub status: HealthStatus,
    pub last_scan: Option<DateTime<Utc>>,
    pub checklist: Vec<ChecklistItem>,
    pub onboarding_status: OnboardingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineer_notes: Option<String>,
}

impl Tenant {
    /// Fresh, never-scanned tenant record.
    pub fn new(
        name: impl Into<String>,
        subscription_id: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Tenant {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            subscription_id: subscription_id.into(),
            client_id: None,
            directory_id: None,
            location: location.into(),
            status: HealthStatus::Unknown,
            last_scan: None,
            checklist: Vec::new(),
            onboarding_status: OnboardingStatus::Pending,
            engineer_notes: None,
        }
    }

    /// Re-derive the aggregate status from the current checklist. The status
    /// is never set independently of checklist contents.
    pub fn recompute_status(&mut self) {
        self.status = derive_status(&self.checklist);
    }
}

/// Worst-of fold over checklist item statuses.
///
/// An empty checklist (tenant never scanned) is Unknown; a checklist made up
/// entirely of non-applicable or policy-disabled items is N/A.
pub fn derive_status(checklist: &[ChecklistItem]) -> HealthStatus {
    if checklist.is_empty() {
        return HealthStatus::Unknown;
    }
    checklist
        .iter()
        .filter_map(|item| item.status.severity_rank().map(|rank| (rank, item.status)))
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, status)| status)
        .unwrap_or(HealthStatus::Na)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::checklist::{Category, ChecklistItem};

    fn item(id: &str, status: HealthStatus) -> ChecklistItem {
        ChecklistItem {
            id: id.to_string(),
            label: id.to_string(),
            category: Category::Compute,
            status,
            last_checked: Utc::now(),
            summary: String::new(),
            checks_performed: vec![],
            affected_resources: vec![],
            error_code: None,
            cause: None,
            recommendation: None,
            resolution: None,
            metric: None,
            is_applicable: true,
        }
    }

    #[test]
    fn empty_checklist_is_unknown() {
        assert_eq!(derive_status(&[]), HealthStatus::Unknown);
    }

    #[test]
    fn worst_item_wins() {
        let checklist = vec![
            item("cpu", HealthStatus::Healthy),
            item("mem", HealthStatus::Warning),
            item("disk", HealthStatus::Critical),
        ];
        assert_eq!(derive_status(&checklist), HealthStatus::Critical);

        let checklist = vec![
            item("cpu", HealthStatus::Healthy),
            item("mem", HealthStatus::Warning),
        ];
        assert_eq!(derive_status(&checklist), HealthStatus::Warning);
    }

    #[test]
    fn non_applicable_items_do_not_participate() {
        let checklist = vec![
            item("cpu", HealthStatus::Healthy),
            item("vpn", HealthStatus::Disabled),
        ];
        assert_eq!(derive_status(&checklist), HealthStatus::Healthy);

        let checklist = vec![item("vpn", HealthStatus::Disabled), item("cost", HealthStatus::Na)];
        assert_eq!(derive_status(&checklist), HealthStatus::Na);
    }

    #[test]
    fn status_serializes_to_display_strings() {
        let json = serde_json::to_string(&HealthStatus::Disabled).unwrap();
        assert_eq!(json, "\"Disabled by Policy\"");
        let json = serde_json::to_string(&HealthStatus::Na).unwrap();
        assert_eq!(json, "\"N/A\"");
    }
}

// src/domain/catalog.rs
//! Fixed SOP catalog and the operational error taxonomy.
//!
//! The eight requirement ids are the stable contract between scans: every
//! generated checklist carries exactly these ids in this order, which is what
//! makes run-over-run comparison by id possible.

use crate::domain::model::checklist::Category;

/// One entry of the fixed health-check SOP.
#[derive(Debug, Clone, Copy)]
pub struct SopRequirement {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
}

pub const SOP_REQUIREMENTS: [SopRequirement; 8] = [
    SopRequirement { id: "cpu", label: "CPU Utilization < 80%", category: Category::Compute },
    SopRequirement { id: "mem", label: "Memory Utilization < 80%", category: Category::Compute },
    SopRequirement { id: "disk", label: "Disk Free Space > 20%", category: Category::Storage },
    SopRequirement { id: "alerts", label: "Alerts (Last 24h)", category: Category::Network },
    SopRequirement { id: "backup", label: "Backup Success", category: Category::Protection },
    SopRequirement { id: "vpn", label: "VPN Availability", category: Category::Network },
    SopRequirement { id: "cost", label: "Daily Cost Trend", category: Category::Governance },
    SopRequirement { id: "reshealth", label: "Azure Resource Health", category: Category::Governance },
];

/// Diagnostic template attached to a failed requirement.
#[derive(Debug, Clone, Copy)]
pub struct ErrorDiagnostic {
    pub code: &'static str,
    pub message: &'static str,
    pub cause: &'static str,
    pub resolution: &'static str,
}

const HIGH_CPU: ErrorDiagnostic = ErrorDiagnostic {
    code: "CMP-101",
    message: "CPU Threshold Breach",
    cause: "Sustained high load on application pool or background processing jobs.",
    resolution: "Vertical scaling (increase SKU) or Horizontal scaling (add instances). Check for memory leaks.",
};

const HIGH_MEM: ErrorDiagnostic = ErrorDiagnostic {
    code: "CMP-102",
    message: "Memory Exhaustion",
    cause: "Application leak or insufficient allocation for workload peak.",
    resolution: "Enable memory paging, restart services, or upgrade to a High-Memory VM SKU.",
};

const LOW_DISK: ErrorDiagnostic = ErrorDiagnostic {
    code: "STG-201",
    message: "Disk Capacity Warning",
    cause: "Log file accumulation or unplanned data growth in /temp directories.",
    resolution: "Cleanup transaction logs, expand managed disk size, or implement auto-grow policies.",
};

const VPN_DOWN: ErrorDiagnostic = ErrorDiagnostic {
    code: "NET-301",
    message: "VPN Gateway Unavailable",
    cause: "IKE Phase 1/2 mismatch or peer gateway is unreachable.",
    resolution: "Verify Local Network Gateway IP and Shared Key. Reset Gateway in Azure Portal if stuck.",
};

const FW_HEALTH: ErrorDiagnostic = ErrorDiagnostic {
    code: "NET-302",
    message: "Firewall Resource Error",
    cause: "Failed health probe on internal backend listener.",
    resolution: "Check Application Gateway health probes and backend pools.",
};

const COST_SPIKE: ErrorDiagnostic = ErrorDiagnostic {
    code: "GOV-401",
    message: "Daily Cost Spike Detected",
    cause: "Unexpected scale-out event or new resource deployment (e.g. Cognitive Services).",
    resolution: "Review Activity Logs for \"Write\" operations by users and set up budget alerts.",
};

const RES_UNHEALTHY: ErrorDiagnostic = ErrorDiagnostic {
    code: "GOV-402",
    message: "Resource Health Event",
    cause: "Azure Platform hardware failure or planned maintenance.",
    resolution: "None (Platform Managed). Monitor for \"Resolved\" status or failover to secondary region.",
};

/// Diagnostic template for a requirement id, where the taxonomy defines one.
pub fn diagnostic_for(requirement_id: &str) -> Option<&'static ErrorDiagnostic> {
    match requirement_id {
        "cpu" => Some(&HIGH_CPU),
        "mem" => Some(&HIGH_MEM),
        "disk" => Some(&LOW_DISK),
        "vpn" => Some(&VPN_DOWN),
        "alerts" => Some(&FW_HEALTH),
        "cost" => Some(&COST_SPIKE),
        "reshealth" => Some(&RES_UNHEALTHY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_stable_ids() {
        let ids: Vec<&str> = SOP_REQUIREMENTS.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["cpu", "mem", "disk", "alerts", "backup", "vpn", "cost", "reshealth"]);
    }

    #[test]
    fn diagnostics_cover_taxonomy_ids() {
        assert_eq!(diagnostic_for("cpu").unwrap().code, "CMP-101");
        assert_eq!(diagnostic_for("reshealth").unwrap().code, "GOV-402");
        assert!(diagnostic_for("backup").is_none());
    }
}

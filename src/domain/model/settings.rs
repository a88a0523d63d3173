// src/domain/model/settings.rs

use serde::{Deserialize, Serialize};

/// Warning/critical breakpoints for one scored metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub warning: f64,
    pub critical: f64,
}

/// Per-metric scoring thresholds, mutated wholesale from the settings page
/// and persisted as one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSettings {
    pub cpu: ThresholdPair,
    pub mem: ThresholdPair,
    pub disk: ThresholdPair,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        ThresholdSettings {
            cpu: ThresholdPair { warning: 75.0, critical: 90.0 },
            mem: ThresholdPair { warning: 80.0, critical: 92.0 },
            disk: ThresholdPair { warning: 15.0, critical: 5.0 },
        }
    }
}

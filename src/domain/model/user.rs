// src/domain/model/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Engineer,
    Reader,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineerPresence {
    Online,
    Offline,
}

/// On-shift operator. Extends the base user record with presence and
/// assignment data shown on the team board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engineer {
    #[serde(flatten)]
    pub user: User,
    pub status: EngineerPresence,
    pub current_task: String,
    pub assigned_tenants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<DateTime<Utc>>,
}

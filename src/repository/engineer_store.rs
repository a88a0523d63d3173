// src/repository/engineer_store.rs
//! Engineer roster persistence, plus the first-boot seed record.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::model::user::{Engineer, EngineerPresence, User, UserRole};
use crate::repository::kv::{self, keys, KeyValueBackend};

#[derive(Clone)]
pub struct EngineerStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl EngineerStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Engineer>> {
        kv::get_json_or(self.backend.as_ref(), keys::ENGINEERS, Vec::new()).await
    }

    pub async fn save_all(&self, engineers: &[Engineer]) -> Result<()> {
        kv::put_json(self.backend.as_ref(), keys::ENGINEERS, &engineers).await
    }

    /// Append one engineer, skipping the write when the email already exists.
    /// Returns whether the roster changed.
    pub async fn add_if_absent(&self, engineer: Engineer) -> Result<bool> {
        let mut roster = self.get_all().await?;
        if roster.iter().any(|e| e.user.email == engineer.user.email) {
            return Ok(false);
        }
        roster.push(engineer);
        self.save_all(&roster).await?;
        Ok(true)
    }

    /// Install the default admin engineer on an empty roster so a fresh
    /// deployment has an assignee for onboarding work. Returns the roster.
    pub async fn ensure_seed(&self) -> Result<Vec<Engineer>> {
        let roster = self.get_all().await?;
        if !roster.is_empty() {
            return Ok(roster);
        }

        let seeded = vec![Engineer {
            user: User {
                id: Uuid::new_v4().to_string(),
                name: "Admin Engineer".to_string(),
                email: "admin-eng@msp.com".to_string(),
                role: UserRole::Admin,
                avatar: None,
                last_login: None,
                ip_address: Some("127.0.0.1".to_string()),
            },
            status: EngineerPresence::Online,
            current_task: "Ready for tenant onboarding & security review".to_string(),
            assigned_tenants: Vec::new(),
            shift_start: Some(Utc::now()),
        }];
        self.save_all(&seeded).await?;
        Ok(seeded)
    }
}

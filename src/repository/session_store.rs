// src/repository/session_store.rs
//! Session record plus the one-shot UI flags (guide seen, per-page
//! walkthroughs seen).

use anyhow::Result;
use std::sync::Arc;

use crate::domain::model::user::User;
use crate::repository::kv::{self, keys, KeyValueBackend};

#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub async fn get_session(&self) -> Result<Option<User>> {
        kv::get_json_or(self.backend.as_ref(), keys::SESSION, None).await
    }

    pub async fn set_session(&self, user: &User) -> Result<()> {
        kv::put_json(self.backend.as_ref(), keys::SESSION, user).await
    }

    pub async fn clear_session(&self) -> Result<()> {
        self.backend.remove(keys::SESSION).await
    }

    pub async fn guide_seen(&self) -> Result<bool> {
        kv::get_json_or(self.backend.as_ref(), keys::GUIDE_SEEN, false).await
    }

    pub async fn set_guide_seen(&self, seen: bool) -> Result<()> {
        kv::put_json(self.backend.as_ref(), keys::GUIDE_SEEN, &seen).await
    }

    pub async fn tutorials_seen(&self) -> Result<Vec<String>> {
        kv::get_json_or(self.backend.as_ref(), keys::TUTORIALS_SEEN, Vec::new()).await
    }

    /// Record that a page walkthrough was dismissed. Idempotent.
    pub async fn mark_tutorial_seen(&self, page: &str) -> Result<()> {
        let mut seen = self.tutorials_seen().await?;
        if !seen.iter().any(|p| p == page) {
            seen.push(page.to_string());
            kv::put_json(self.backend.as_ref(), keys::TUTORIALS_SEEN, &seen).await?;
        }
        Ok(())
    }
}

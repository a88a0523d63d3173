// src/service/portfolio.rs
//! Authoritative owner of the tenant collection.
//!
//! Views and schedulers never hold tenant state of their own: they read
//! snapshots and apply mutations here, so a scan completing after a tenant
//! was edited or deleted resolves against the current record by id instead
//! of a stale capture. All mutations persist through the tenant store before
//! returning.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::model::checklist::ChecklistItem;
use crate::domain::model::tenant::Tenant;
use crate::repository::tenant_store::TenantStore;

pub struct PortfolioService {
    store: TenantStore,
    tenants: RwLock<Vec<Tenant>>,
}

impl PortfolioService {
    /// Load the persisted portfolio and take authority over it.
    pub async fn open(store: TenantStore) -> Result<Arc<Self>> {
        let tenants = store.get_all().await?;
        info!(count = tenants.len(), "tenant portfolio loaded");
        Ok(Arc::new(Self { store, tenants: RwLock::new(tenants) }))
    }

    /// Clone-out read of the whole collection.
    pub async fn snapshot(&self) -> Vec<Tenant> {
        self.tenants.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Tenant> {
        self.tenants.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.tenants.read().await.len()
    }

    /// Register a new tenant record and persist the collection.
    pub async fn add(&self, tenant: Tenant) -> Result<Tenant> {
        let mut tenants = self.tenants.write().await;
        tenants.push(tenant.clone());
        self.store.save_all(&tenants).await?;
        Ok(tenant)
    }

    /// Drop a tenant by id. Returns false when the id is unknown. A scan in
    /// flight for the removed tenant will no-op at completion.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let mut tenants = self.tenants.write().await;
        let before = tenants.len();
        tenants.retain(|t| t.id != id);
        let removed = tenants.len() != before;
        if removed {
            self.store.save_all(&tenants).await?;
        }
        Ok(removed)
    }

    pub async fn update_notes(&self, id: &str, notes: Option<String>) -> Result<bool> {
        let mut tenants = self.tenants.write().await;
        match tenants.iter_mut().find(|t| t.id == id) {
            Some(tenant) => {
                tenant.engineer_notes = notes;
                self.store.save_all(&tenants).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Commit a finished scan against the current record: replace the
    /// checklist wholesale, stamp the scan time and re-derive the aggregate
    /// status. Returns false (without persisting) when the tenant vanished
    /// mid-scan.
    pub async fn commit_scan(
        &self,
        id: &str,
        checklist: Vec<ChecklistItem>,
        scanned_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut tenants = self.tenants.write().await;
        match tenants.iter_mut().find(|t| t.id == id) {
            Some(tenant) => {
                tenant.checklist = checklist;
                tenant.last_scan = Some(scanned_at);
                tenant.recompute_status();
                self.store.save_all(&tenants).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// src/repository/tenant_store.rs
//! Tenant collection persistence.
//!
//! The collection is read and written whole, mirroring the REST shape the
//! backend will eventually expose. In-memory authority over the collection
//! lives in `service::portfolio`; this store is only the durable edge.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::model::tenant::Tenant;
use crate::repository::kv::{self, keys, KeyValueBackend};

#[derive(Clone)]
pub struct TenantStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl TenantStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Full tenant collection; an absent key is an empty portfolio.
    pub async fn get_all(&self) -> Result<Vec<Tenant>> {
        kv::get_json_or(self.backend.as_ref(), keys::TENANTS, Vec::new()).await
    }

    pub async fn save_all(&self, tenants: &[Tenant]) -> Result<()> {
        kv::put_json(self.backend.as_ref(), keys::TENANTS, &tenants).await?;
        metrics::counter!("procheck_tenant_saves").increment(1);
        Ok(())
    }
}

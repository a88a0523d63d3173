// src/usecase/onboard_tenant.rs
//! Tenant registration flow.
//!
//! Validates the submitted form, creates the never-scanned tenant record
//! through the portfolio owner and appends the onboarding audit entry.

use anyhow::Result;
use tracing::info;

use crate::domain::error::ProCheckError;
use crate::domain::model::log::{LogSeverity, LogType, NewLogEntry};
use crate::domain::model::tenant::Tenant;
use crate::repository::log_store::LogStore;
use crate::service::portfolio::PortfolioService;

#[derive(Debug, Clone)]
pub struct TenantRegistration {
    pub name: String,
    pub subscription_id: String,
    pub client_id: Option<String>,
    pub directory_id: Option<String>,
    pub location: String,
}

pub async fn onboard_tenant(
    portfolio: &PortfolioService,
    logs: &LogStore,
    registration: TenantRegistration,
    actor: &str,
) -> Result<Tenant> {
    if registration.name.trim().is_empty() {
        return Err(ProCheckError::InvalidRegistration("tenant name is required".into()).into());
    }
    if registration.subscription_id.trim().is_empty() {
        return Err(
            ProCheckError::InvalidRegistration("subscription id is required".into()).into()
        );
    }

    let mut tenant = Tenant::new(
        registration.name.trim(),
        registration.subscription_id.trim(),
        registration.location,
    );
    tenant.client_id = registration.client_id;
    tenant.directory_id = registration.directory_id;

    let tenant = portfolio.add(tenant).await?;

    logs.append(NewLogEntry::for_tenant(
        LogType::Tenant,
        LogSeverity::Info,
        actor,
        format!("Tenant onboarded: {}", tenant.name),
        tenant.id.clone(),
        tenant.name.clone(),
    ))
    .await?;
    info!(tenant = %tenant.name, "tenant onboarded");

    Ok(tenant)
}

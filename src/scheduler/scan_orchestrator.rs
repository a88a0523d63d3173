// src/scheduler/scan_orchestrator.rs
//! Audit-scan orchestration.
//!
//! Drives the per-tenant `Idle -> Scanning -> Idle` cycle and the staggered
//! batch sync. A scan is fire-and-forget: the trigger marks the tenant as
//! scanning and logs the initiation, a spawned task finishes the cycle after
//! the scan delay. Within one tenant the order is strict: initiated log,
//! then checklist commit, then completed log. Scans for distinct tenants run
//! concurrently; nothing cancels a scan once started.

use anyhow::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::app_config::ScanConfig;
use crate::domain::error::ProCheckError;
use crate::domain::model::log::{LogSeverity, LogType, NewLogEntry};
use crate::repository::log_store::LogStore;
use crate::service::checklist_generator::generate_checklist;
use crate::service::portfolio::PortfolioService;

/// Timer settings for the simulated scans. Injectable so tests can shrink
/// the windows; production values come from `ScanConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ScanTiming {
    pub scan_delay: Duration,
    pub batch_stagger: Duration,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self { scan_delay: Duration::from_millis(1500), batch_stagger: Duration::from_millis(150) }
    }
}

impl From<&ScanConfig> for ScanTiming {
    fn from(cfg: &ScanConfig) -> Self {
        Self {
            scan_delay: Duration::from_millis(cfg.scan_delay_ms),
            batch_stagger: Duration::from_millis(cfg.batch_stagger_ms),
        }
    }
}

#[derive(Clone)]
pub struct ScanOrchestrator {
    portfolio: Arc<PortfolioService>,
    logs: LogStore,
    scanning: Arc<RwLock<HashSet<String>>>,
    batch_running: Arc<AtomicBool>,
    timing: ScanTiming,
}

impl ScanOrchestrator {
    pub fn new(portfolio: Arc<PortfolioService>, logs: LogStore, timing: ScanTiming) -> Self {
        Self {
            portfolio,
            logs,
            scanning: Arc::new(RwLock::new(HashSet::new())),
            batch_running: Arc::new(AtomicBool::new(false)),
            timing,
        }
    }

    /// Trigger one tenant's scan. Marks the tenant as scanning and logs the
    /// initiation before returning; completion happens on a spawned task
    /// after the scan delay.
    pub async fn start_scan(&self, tenant_id: &str, actor: &str) -> Result<()> {
        let tenant = self
            .portfolio
            .get(tenant_id)
            .await
            .ok_or_else(|| ProCheckError::UnknownTenant(tenant_id.to_string()))?;

        self.scanning.write().await.insert(tenant.id.clone());
        self.logs
            .append(NewLogEntry::for_tenant(
                LogType::Audit,
                LogSeverity::Info,
                actor,
                format!("Audit scan initiated for tenant: {}", tenant.name),
                tenant.id.clone(),
                tenant.name.clone(),
            ))
            .await?;
        info!(tenant = %tenant.name, "audit scan initiated");

        let orchestrator = self.clone();
        let tenant_id = tenant.id;
        tokio::spawn(async move {
            tokio::time::sleep(orchestrator.timing.scan_delay).await;
            if let Err(e) = orchestrator.complete_scan(&tenant_id).await {
                error!(tenant_id = %tenant_id, error = ?e, "scan completion failed");
            }
        });

        Ok(())
    }

    /// Finish one tenant's cycle: regenerate the checklist against the
    /// current record, commit, clear the scanning flag and log completion.
    /// A tenant deleted mid-scan just drops out: flag cleared, no commit, no
    /// completion log.
    async fn complete_scan(&self, tenant_id: &str) -> Result<()> {
        let committed = match self.portfolio.get(tenant_id).await {
            Some(tenant) => {
                let checklist = generate_checklist(tenant.status, &tenant.name);
                let ok = self.portfolio.commit_scan(tenant_id, checklist, Utc::now()).await?;
                ok.then_some(tenant)
            }
            None => None,
        };

        self.scanning.write().await.remove(tenant_id);

        match committed {
            Some(tenant) => {
                self.logs
                    .append(NewLogEntry::for_tenant(
                        LogType::Audit,
                        LogSeverity::Info,
                        "System",
                        format!("Audit scan completed successfully for {}", tenant.name),
                        tenant.id,
                        tenant.name.clone(),
                    ))
                    .await?;
                info!(tenant = %tenant.name, "audit scan completed");
            }
            None => {
                info!(tenant_id = %tenant_id, "tenant removed mid-scan, completion dropped");
            }
        }

        Ok(())
    }

    /// Trigger a staggered scan for every tenant in the portfolio. Rejected
    /// while a batch is already running or the portfolio is empty. The batch
    /// flag clears after `count x stagger + scan_delay`, once the last
    /// tenant's scan window has elapsed.
    pub async fn batch_scan(&self, actor: &str) -> Result<usize> {
        let tenants = self.portfolio.snapshot().await;
        if tenants.is_empty() {
            return Err(ProCheckError::EmptyPortfolio.into());
        }
        if self
            .batch_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ProCheckError::BatchInProgress.into());
        }

        self.logs
            .append(NewLogEntry::simple(
                LogType::Audit,
                LogSeverity::Info,
                actor,
                "Global batch audit sync triggered.",
            ))
            .await?;
        info!(count = tenants.len(), "batch audit sync triggered");

        let count = tenants.len();
        for (index, tenant) in tenants.into_iter().enumerate() {
            let orchestrator = self.clone();
            let actor = actor.to_string();
            let offset = self.timing.batch_stagger * index as u32;
            tokio::spawn(async move {
                tokio::time::sleep(offset).await;
                if let Err(e) = orchestrator.start_scan(&tenant.id, &actor).await {
                    error!(tenant = %tenant.name, error = ?e, "batch member scan failed to start");
                }
            });
        }

        let batch_running = Arc::clone(&self.batch_running);
        let window = self.timing.batch_stagger * count as u32 + self.timing.scan_delay;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            batch_running.store(false, Ordering::SeqCst);
            info!("batch audit sync window elapsed");
        });

        Ok(count)
    }

    pub async fn is_scanning(&self, tenant_id: &str) -> bool {
        self.scanning.read().await.contains(tenant_id)
    }

    pub async fn scanning_ids(&self) -> HashSet<String> {
        self.scanning.read().await.clone()
    }

    pub fn is_batch_running(&self) -> bool {
        self.batch_running.load(Ordering::SeqCst)
    }
}

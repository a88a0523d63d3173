// src/service/summarizer.rs
//! Generative health-summary bridge.
//!
//! One operation: tenant in, narrative text out. The bridge never surfaces
//! an error to the caller: a missing credential or a failed call degrades to
//! a fixed fallback string, and each summary is attempted exactly once (no
//! retry policy).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::warn;

use crate::config::app_config::SummaryConfig;
use crate::domain::model::tenant::Tenant;

pub const OFFLINE_FALLBACK: &str = "Operational Intelligence: Summary offline. Please configure the ProCheck API Bridge for AI-driven insights.";
pub const TIMEOUT_FALLBACK: &str =
    "The AI Diagnostic Bridge experienced a timeout. Falling back to rule-based summary.";
pub const EMPTY_RESPONSE_FALLBACK: &str = "Diagnostic engine failed to provide a text response.";

#[async_trait]
pub trait HealthSummarizer: Send + Sync + 'static {
    /// Short natural-language health narrative for a tenant. Infallible by
    /// contract; degraded paths return fallback copy.
    async fn summarize(&self, tenant: &Tenant) -> String;
}

/// Bridge to the hosted text-generation endpoint.
pub struct RemoteSummarizer {
    client: Client,
    cfg: SummaryConfig,
}

impl RemoteSummarizer {
    pub fn new(cfg: SummaryConfig) -> Self {
        Self { client: Client::new(), cfg }
    }

    fn prompt_for(tenant: &Tenant) -> String {
        format!(
            "Context: You are an Azure Managed Services Architect.\n\
             System: ProCheck v4 Multi-Tenant Dashboard.\n\
             Task: Provide a high-density health diagnostic for {name}.\n\
             Current Status: {status}.\n\
             Infrastructure: {location}, Subscription ID {subscription}.\n\
             If the status is not Healthy, give a 1-sentence executive summary of the \
             primary risk and 2-3 specific remediation actions. If it is Healthy, give a \
             1-sentence confirmation of stability and a proactive maintenance tip. \
             Keep the response under 80 words.",
            name = tenant.name,
            status = tenant.status,
            location = tenant.location,
            subscription = tenant.subscription_id,
        )
    }
}

#[async_trait]
impl HealthSummarizer for RemoteSummarizer {
    async fn summarize(&self, tenant: &Tenant) -> String {
        let (endpoint, api_key) = match (&self.cfg.endpoint, &self.cfg.api_key) {
            (Some(endpoint), Some(api_key)) => (endpoint, api_key),
            _ => return OFFLINE_FALLBACK.to_string(),
        };

        let body = json!({ "prompt": Self::prompt_for(tenant) });
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(self.cfg.timeout_secs))
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                warn!(tenant = %tenant.name, status = %r.status(), "summary bridge rejected request");
                return TIMEOUT_FALLBACK.to_string();
            }
            Err(e) => {
                warn!(tenant = %tenant.name, error = %e, "summary bridge unreachable");
                return TIMEOUT_FALLBACK.to_string();
            }
        };

        match response.json::<serde_json::Value>().await {
            Ok(payload) => payload
                .get("text")
                .and_then(|v| v.as_str())
                .filter(|text| !text.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string()),
            Err(e) => {
                warn!(tenant = %tenant.name, error = %e, "summary bridge returned malformed payload");
                TIMEOUT_FALLBACK.to_string()
            }
        }
    }
}

/// Canned summarizer for tests and offline demos.
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl HealthSummarizer for StaticSummarizer {
    async fn summarize(&self, _tenant: &Tenant) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> Tenant {
        Tenant::new("Acme Corp", "sub-001", "westeurope")
    }

    #[tokio::test]
    async fn missing_credential_returns_offline_copy() {
        let summarizer = RemoteSummarizer::new(SummaryConfig::default());
        assert_eq!(summarizer.summarize(&tenant()).await, OFFLINE_FALLBACK);
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_timeout_copy() {
        let cfg = SummaryConfig {
            endpoint: Some("http://127.0.0.1:1/v1/generate".to_string()),
            api_key: Some("test-key".to_string()),
            timeout_secs: 1,
        };
        let summarizer = RemoteSummarizer::new(cfg);
        assert_eq!(summarizer.summarize(&tenant()).await, TIMEOUT_FALLBACK);
    }

    #[tokio::test]
    async fn static_summarizer_echoes_its_copy() {
        let summarizer = StaticSummarizer::new("All quiet.");
        assert_eq!(summarizer.summarize(&tenant()).await, "All quiet.");
    }

    #[test]
    fn prompt_carries_tenant_context() {
        let prompt = RemoteSummarizer::prompt_for(&tenant());
        assert!(prompt.contains("Acme Corp"));
        assert!(prompt.contains("sub-001"));
        assert!(prompt.contains("Unknown"));
    }
}

//! Multi-provider lookup with ordered fallback

use crate::config::ProxyConfig;
use crate::domain::ValidatedDomain;
use crate::error::Result;
use crate::providers::{create_provider, WhoisProvider};
use crate::types::{ProviderResult, RecordSource, Resolution, WhoisRecord};
use crate::whois::fallback;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resolves registration data by asking providers in priority order
#[derive(Clone)]
pub struct WhoisResolver {
    providers: Vec<Arc<dyn WhoisProvider>>,
    timeout: Duration,
}

impl WhoisResolver {
    /// Create a resolver with no providers; every lookup uses the fallback table
    pub fn new(timeout: Duration) -> Self {
        Self {
            providers: Vec::new(),
            timeout,
        }
    }

    /// Append a provider with the lowest priority so far
    pub fn with_provider(mut self, provider: Arc<dyn WhoisProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Build the provider chain described by the configuration.
    ///
    /// Providers that cannot be constructed or are not ready (e.g. missing a
    /// required API key) are skipped rather than tried on every request.
    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("whois-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut resolver = Self::new(config.provider_timeout);

        for provider_config in &config.providers {
            match create_provider(provider_config, client.clone()) {
                Ok(provider) if provider.is_ready() => {
                    tracing::info!(
                        provider = %provider.name(),
                        priority = %resolver.providers.len(),
                        "Provider configured"
                    );
                    resolver.providers.push(Arc::from(provider));
                }
                Ok(provider) => {
                    tracing::warn!(provider = %provider.name(), "Provider not ready, skipping");
                }
                Err(e) => {
                    tracing::warn!(
                        provider = %provider_config.kind,
                        error = %e,
                        "Provider disabled"
                    );
                }
            }
        }

        if resolver.providers.is_empty() {
            tracing::warn!("No WHOIS providers configured; every lookup will use fallback data");
        }

        Ok(resolver)
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Per-provider request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve a domain. Always produces a record.
    pub async fn resolve(&self, domain: &ValidatedDomain) -> WhoisRecord {
        self.resolve_detailed(domain).await.record
    }

    /// Resolve a domain and report which source answered.
    ///
    /// Providers are tried strictly in order and the first success wins;
    /// lower-priority providers are not contacted after that.
    pub async fn resolve_detailed(&self, domain: &ValidatedDomain) -> Resolution {
        let overall_start = Instant::now();

        for (priority, provider) in self.providers.iter().enumerate() {
            let start = Instant::now();
            match provider.lookup(domain, self.timeout).await {
                ProviderResult::Success(record) => {
                    tracing::info!(
                        domain = %domain,
                        provider = %provider.name(),
                        fallback_used = priority > 0,
                        duration_ms = %start.elapsed().as_millis(),
                        "Registration data resolved"
                    );
                    return Resolution {
                        record,
                        source: RecordSource::Provider(provider.name()),
                    };
                }
                ProviderResult::Unavailable => {
                    tracing::debug!(
                        domain = %domain,
                        provider = %provider.name(),
                        duration_ms = %start.elapsed().as_millis(),
                        "Provider unavailable, trying next"
                    );
                }
            }
        }

        tracing::warn!(
            domain = %domain,
            providers_tried = %self.providers.len(),
            duration_ms = %overall_start.elapsed().as_millis(),
            "All providers unavailable, using fallback data"
        );

        Resolution {
            record: fallback::synthesize(domain.as_str()),
            source: RecordSource::Fallback,
        }
    }
}

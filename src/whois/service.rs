//! Lookup pipeline: validate, resolve, normalize

use crate::config::ProxyConfig;
use crate::domain::DomainValidator;
use crate::error::Result;
use crate::types::WhoisResponse;
use crate::whois::{normalize, WhoisResolver};

/// Full lookup pipeline used by the HTTP layer
pub struct WhoisService {
    validator: DomainValidator,
    resolver: WhoisResolver,
}

impl WhoisService {
    pub fn new(resolver: WhoisResolver) -> Result<Self> {
        Ok(Self {
            validator: DomainValidator::new()?,
            resolver,
        })
    }

    /// Create the service with the provider chain from configuration
    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        Self::new(WhoisResolver::from_config(config)?)
    }

    pub fn resolver(&self) -> &WhoisResolver {
        &self.resolver
    }

    /// Look up raw caller input.
    ///
    /// Fails only on malformed input; provider outages are absorbed by the
    /// resolver, which falls back to synthetic data.
    pub async fn lookup(&self, raw: &str) -> Result<WhoisResponse> {
        let domain = self.validator.validate(raw)?;
        let resolution = self.resolver.resolve_detailed(&domain).await;

        tracing::debug!(domain = %domain, source = %resolution.source, "Lookup completed");
        Ok(normalize(resolution.record))
    }
}

//! Upstream WHOIS provider implementations
//!
//! Each provider is implemented in its own module and owns the mapping from
//! its upstream's field names to the canonical `WhoisRecord` keys.

pub mod api_ninjas;
pub mod json_whois;
pub mod whois_xml;

// Re-export providers for easy access
pub use api_ninjas::ApiNinjasProvider;
pub use json_whois::JsonWhoisProvider;
pub use whois_xml::WhoisXmlProvider;

use crate::config::ProviderConfig;
use crate::domain::ValidatedDomain;
use crate::error::{Result, WhoisProxyError};
use crate::types::{ProviderKind, ProviderResult, WhoisRecord};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Core trait for all registration-data providers
#[async_trait]
pub trait WhoisProvider: Send + Sync {
    /// Look up a domain with a single upstream request bounded by `timeout`.
    ///
    /// Never fails: anything other than a usable record is `Unavailable`.
    async fn lookup(&self, domain: &ValidatedDomain, timeout: Duration) -> ProviderResult;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available WHOIS providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["api-ninjas", "whoisxml", "jsonwhois"]
}

/// Create a provider from configuration
pub fn create_provider(config: &ProviderConfig, client: Client) -> Result<Box<dyn WhoisProvider>> {
    match config.kind {
        ProviderKind::ApiNinjas => Ok(Box::new(ApiNinjasProvider::new(config, client)?)),
        ProviderKind::WhoisXml => Ok(Box::new(WhoisXmlProvider::new(config, client))),
        ProviderKind::JsonWhois => Ok(Box::new(JsonWhoisProvider::new(config, client))),
    }
}

/// Collapse a provider query into the outcome the resolver sees
pub(crate) fn into_provider_result(
    provider: &'static str,
    domain: &ValidatedDomain,
    result: Result<WhoisRecord>,
) -> ProviderResult {
    match result {
        Ok(record) => ProviderResult::Success(record),
        Err(e) if e.is_provider_failure() => {
            tracing::debug!(
                provider = %provider,
                domain = %domain,
                error = %e,
                "Provider unavailable"
            );
            ProviderResult::Unavailable
        }
        Err(e) => {
            tracing::warn!(
                provider = %provider,
                domain = %domain,
                error = %e,
                "Provider failed unexpectedly"
            );
            ProviderResult::Unavailable
        }
    }
}

/// Send one GET request and decode its JSON body.
///
/// The whole exchange (connect, status, body) is bounded by `timeout`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
    timeout: Duration,
    provider: &str,
) -> Result<T> {
    let exchange = async {
        let response = request
            .send()
            .await
            .map_err(|e| WhoisProxyError::network(e.to_string(), None, Some(url.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WhoisProxyError::network(
                format!("{} request failed with status {}", provider, status),
                Some(status.as_u16()),
                Some(url.to_string()),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| WhoisProxyError::network(e.to_string(), None, Some(url.to_string())))?;

        let body = serde_json::from_str::<T>(&text).map_err(|e| {
            tracing::debug!(provider = %provider, body = %text, "Undecodable response body");
            WhoisProxyError::from(e)
        })?;
        Ok(body)
    };

    tokio::time::timeout(timeout, exchange)
        .await
        .map_err(|_| WhoisProxyError::timeout(format!("{} request", provider), timeout.as_secs()))?
}

/// Render a loosely typed JSON value as text.
///
/// Arrays contribute their first element; objects and nulls are absent.
pub(crate) fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => json_text(items.first()),
        Value::Null | Value::Object(_) => None,
    }
}

/// Like `json_text`, but unix timestamps become RFC 3339 UTC strings
pub(crate) fn json_date(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .or_else(|| Some(n.to_string())),
        Value::Array(items) => json_date(items.first()),
        other => json_text(Some(other)),
    }
}

/// Join a configured base URL and an endpoint path
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

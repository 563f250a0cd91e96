//! API Ninjas provider implementation
//!
//! Requires an API key. The upstream already uses the canonical field names,
//! but reports dates as unix timestamps and some fields as arrays.

use crate::config::ProviderConfig;
use crate::domain::ValidatedDomain;
use crate::error::{Result, WhoisProxyError};
use crate::providers::WhoisProvider;
use crate::types::{ProviderResult, WhoisRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use super::{endpoint, fetch_json, into_provider_result, json_date, json_text};

const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";

const KNOWN_FIELDS: [&str; 5] = [
    "domain_name",
    "creation_date",
    "expiration_date",
    "registrar",
    "status",
];

/// API Ninjas provider implementation
pub struct ApiNinjasProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ApiNinjasProvider {
    pub fn new(config: &ProviderConfig, client: Client) -> Result<Self> {
        let api_key = config.api_key.clone().unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(WhoisProxyError::config("API Ninjas API key is required".to_string()));
        }

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    async fn query(&self, domain: &ValidatedDomain, timeout: Duration) -> Result<WhoisRecord> {
        let url = endpoint(&self.base_url, "/v1/whois");
        let request = self
            .client
            .get(&url)
            .query(&[("domain", domain.as_str())])
            .header("X-Api-Key", &self.api_key);

        let body: Map<String, Value> = fetch_json(request, &url, timeout, self.name()).await?;
        parse_response(&body, domain)
    }
}

/// Map an API Ninjas body onto a record.
///
/// An empty object is how the upstream reports an unknown domain; a body
/// without any recognized field is treated the same way.
fn parse_response(body: &Map<String, Value>, domain: &ValidatedDomain) -> Result<WhoisRecord> {
    if let Some(message) = json_text(body.get("error")) {
        return Err(WhoisProxyError::network(message, None, None));
    }

    if !KNOWN_FIELDS.iter().any(|field| json_text(body.get(*field)).is_some()) {
        return Err(WhoisProxyError::not_found(domain.as_str(), "api-ninjas"));
    }

    Ok(WhoisRecord {
        domain_name: json_text(body.get("domain_name")),
        creation_date: json_date(body.get("creation_date")),
        expiration_date: json_date(body.get("expiration_date")),
        registrar: json_text(body.get("registrar")),
        status: json_text(body.get("status")),
    })
}

#[async_trait]
impl WhoisProvider for ApiNinjasProvider {
    async fn lookup(&self, domain: &ValidatedDomain, timeout: Duration) -> ProviderResult {
        into_provider_result(self.name(), domain, self.query(domain, timeout).await)
    }

    fn name(&self) -> &'static str {
        "api-ninjas"
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

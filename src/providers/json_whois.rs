//! JsonWhois provider implementation

use crate::config::ProviderConfig;
use crate::domain::ValidatedDomain;
use crate::error::{Result, WhoisProxyError};
use crate::providers::WhoisProvider;
use crate::types::{ProviderResult, WhoisRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use super::{endpoint, fetch_json, into_provider_result, json_text};

const DEFAULT_BASE_URL: &str = "https://jsonwhois.com";

/// Fields this upstream reports, in record order
const KNOWN_FIELDS: [&str; 4] = ["created", "expires", "registrar", "status"];

pub struct JsonWhoisProvider {
    client: Client,
    base_url: String,
}

impl JsonWhoisProvider {
    pub fn new(config: &ProviderConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn query(&self, domain: &ValidatedDomain, timeout: Duration) -> Result<WhoisRecord> {
        let url = endpoint(&self.base_url, "/api/v1/whois");
        let request = self.client.get(&url).query(&[("domain", domain.as_str())]);

        let body: Map<String, Value> = fetch_json(request, &url, timeout, self.name()).await?;
        parse_response(&body, domain)
    }
}

fn parse_response(body: &Map<String, Value>, domain: &ValidatedDomain) -> Result<WhoisRecord> {
    if !KNOWN_FIELDS.iter().any(|field| json_text(body.get(*field)).is_some()) {
        return Err(WhoisProxyError::not_found(domain.as_str(), "jsonwhois"));
    }

    Ok(WhoisRecord {
        domain_name: Some(domain.as_str().to_string()),
        creation_date: json_text(body.get("created")),
        expiration_date: json_text(body.get("expires")),
        registrar: json_text(body.get("registrar")),
        status: json_text(body.get("status")),
    })
}

#[async_trait]
impl WhoisProvider for JsonWhoisProvider {
    async fn lookup(&self, domain: &ValidatedDomain, timeout: Duration) -> ProviderResult {
        into_provider_result(self.name(), domain, self.query(domain, timeout).await)
    }

    fn name(&self) -> &'static str {
        "jsonwhois"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

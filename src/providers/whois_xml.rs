//! WhoisXML API provider implementation

use crate::config::ProviderConfig;
use crate::domain::ValidatedDomain;
use crate::error::{Result, WhoisProxyError};
use crate::providers::WhoisProvider;
use crate::types::{ProviderResult, WhoisRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{endpoint, fetch_json, into_provider_result, json_text};

const DEFAULT_BASE_URL: &str = "https://www.whoisxmlapi.com";

/// WhoisXML API provider implementation
pub struct WhoisXmlProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WhoisXmlProvider {
    pub fn new(config: &ProviderConfig, client: Client) -> Self {
        Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            base_url: config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn query(&self, domain: &ValidatedDomain, timeout: Duration) -> Result<WhoisRecord> {
        let url = endpoint(&self.base_url, "/whoisserver/WhoisService");
        let mut request = self
            .client
            .get(&url)
            .query(&[("domainName", domain.as_str()), ("outputFormat", "JSON")]);
        if let Some(api_key) = &self.api_key {
            request = request.query(&[("apiKey", api_key.as_str())]);
        }

        let response: WhoisXmlResponse = fetch_json(request, &url, timeout, self.name()).await?;
        parse_response(response, domain)
    }
}

/// Map a WhoisXML body onto a record.
///
/// Only a body carrying a `WhoisRecord` without a data error counts.
fn parse_response(response: WhoisXmlResponse, domain: &ValidatedDomain) -> Result<WhoisRecord> {
    let record = response
        .whois_record
        .ok_or_else(|| WhoisProxyError::not_found(domain.as_str(), "whoisxml"))?;

    if record.data_error.is_some() {
        return Err(WhoisProxyError::not_found(domain.as_str(), "whoisxml"));
    }

    Ok(WhoisRecord {
        domain_name: Some(domain.as_str().to_string()),
        creation_date: json_text(record.created_date.as_ref()),
        expiration_date: json_text(record.expires_date.as_ref()),
        registrar: json_text(record.registrar_name.as_ref()),
        status: json_text(record.status.as_ref()),
    })
}

#[async_trait]
impl WhoisProvider for WhoisXmlProvider {
    async fn lookup(&self, domain: &ValidatedDomain, timeout: Duration) -> ProviderResult {
        into_provider_result(self.name(), domain, self.query(domain, timeout).await)
    }

    fn name(&self) -> &'static str {
        "whoisxml"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

// WhoisXML API structures
#[derive(Debug, Deserialize)]
struct WhoisXmlResponse {
    #[serde(rename = "WhoisRecord")]
    whois_record: Option<WhoisXmlRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WhoisXmlRecord {
    created_date: Option<Value>,
    expires_date: Option<Value>,
    registrar_name: Option<Value>,
    status: Option<Value>,
    data_error: Option<Value>,
}

//! Core types and structures for whois-proxy

use crate::error::WhoisProxyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upstream registration-data provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    ApiNinjas,
    WhoisXml,
    JsonWhois,
}

impl ProviderKind {
    /// Prefix used for this provider's environment variables
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::ApiNinjas => "API_NINJAS",
            ProviderKind::WhoisXml => "WHOISXML",
            ProviderKind::JsonWhois => "JSONWHOIS",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::ApiNinjas => write!(f, "api-ninjas"),
            ProviderKind::WhoisXml => write!(f, "whoisxml"),
            ProviderKind::JsonWhois => write!(f, "jsonwhois"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = WhoisProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "api-ninjas" | "apininjas" => Ok(ProviderKind::ApiNinjas),
            "whoisxml" | "whoisxmlapi" => Ok(ProviderKind::WhoisXml),
            "jsonwhois" => Ok(ProviderKind::JsonWhois),
            other => Err(WhoisProxyError::config(format!(
                "Unsupported WHOIS provider: {}. Supported providers: {}",
                other,
                crate::providers::available_providers().join(", ")
            ))),
        }
    }
}

/// Registration data as produced by a provider or the fallback table.
///
/// Every field is optional; missing values become empty strings once the
/// record is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub domain_name: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub registrar: Option<String>,
    pub status: Option<String>,
}

impl WhoisRecord {
    /// Record with every field present
    pub fn complete(
        domain_name: impl Into<String>,
        creation_date: impl Into<String>,
        expiration_date: impl Into<String>,
        registrar: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: Some(domain_name.into()),
            creation_date: Some(creation_date.into()),
            expiration_date: Some(expiration_date.into()),
            registrar: Some(registrar.into()),
            status: Some(status.into()),
        }
    }
}

/// Public response shape returned to callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisResponse {
    pub domain: String,
    pub created: String,
    pub expires: String,
    pub registrar: String,
    pub status: String,
}

/// Outcome of asking a single provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult {
    Success(WhoisRecord),
    Unavailable,
}

/// Where a resolved record came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Provider(&'static str),
    Fallback,
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSource::Provider(name) => write!(f, "{}", name),
            RecordSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A resolved record together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: WhoisRecord,
    pub source: RecordSource,
}

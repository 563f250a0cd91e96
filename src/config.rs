//! Runtime configuration for whois-proxy
//!
//! Provider order and credentials are deployment decisions, so everything
//! here can be set from the environment (or a `.env` file loaded by
//! [`crate::init`]).

use crate::config_error;
use crate::error::Result;
use crate::types::ProviderKind;
use std::net::SocketAddr;
use std::time::Duration;

/// Default address the HTTP server binds to
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default bound on a single upstream request
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Default provider priority order
pub const DEFAULT_PROVIDER_ORDER: [ProviderKind; 3] = [
    ProviderKind::ApiNinjas,
    ProviderKind::WhoisXml,
    ProviderKind::JsonWhois,
];

/// Configuration for one upstream provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            base_url: None,
            api_key: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub provider_timeout: Duration,
    /// Providers in priority order
    pub providers: Vec<ProviderConfig>,
    pub json_logs: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            providers: DEFAULT_PROVIDER_ORDER.iter().copied().map(ProviderConfig::new).collect(),
            json_logs: false,
        }
    }
}

impl ProxyConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Recognized keys: `WHOIS_PROXY_ADDR`, `WHOIS_PROVIDER_TIMEOUT_SECS`,
    /// `WHOIS_PROVIDERS` (comma separated, highest priority first),
    /// `WHOIS_LOG_JSON`, and `<PREFIX>_API_KEY` / `<PREFIX>_BASE_URL` for each
    /// provider.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = var("WHOIS_PROXY_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|e| config_error!("Invalid WHOIS_PROXY_ADDR '{}': {}", addr, e))?;
        }

        if let Some(secs) = var("WHOIS_PROVIDER_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e| {
                config_error!("Invalid WHOIS_PROVIDER_TIMEOUT_SECS '{}': {}", secs, e)
            })?;
            if secs == 0 {
                return Err(config_error!("WHOIS_PROVIDER_TIMEOUT_SECS must be greater than zero"));
            }
            config.provider_timeout = Duration::from_secs(secs);
        }

        let order = match var("WHOIS_PROVIDERS") {
            Some(list) => parse_provider_order(&list)?,
            None => DEFAULT_PROVIDER_ORDER.to_vec(),
        };

        config.providers = order
            .into_iter()
            .map(|kind| {
                let prefix = kind.env_prefix();
                ProviderConfig {
                    kind,
                    base_url: var(format!("{}_BASE_URL", prefix).as_str()),
                    api_key: var(format!("{}_API_KEY", prefix).as_str()),
                }
            })
            .collect();

        if let Some(json) = var("WHOIS_LOG_JSON") {
            config.json_logs = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

/// Parse a comma separated provider list, rejecting unknown and repeated names
fn parse_provider_order(list: &str) -> Result<Vec<ProviderKind>> {
    let mut order = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let kind: ProviderKind = name.parse()?;
        if order.contains(&kind) {
            return Err(config_error!("Provider '{}' listed more than once", kind));
        }
        order.push(kind);
    }
    Ok(order)
}

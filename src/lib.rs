//! whois-proxy - domain registration lookup proxy
//!
//! Looks up registration metadata for a domain across several upstream
//! providers in priority order, normalizes whatever they return into one
//! response shape, and falls back to deterministic synthetic data when every
//! provider is unavailable.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod providers;
pub mod server;
pub mod types;
pub mod whois;

// Re-export commonly used types
pub use config::{ProviderConfig, ProxyConfig};
pub use error::{Result, WhoisProxyError};
pub use types::{
    ProviderKind, ProviderResult, RecordSource, Resolution, WhoisRecord, WhoisResponse,
};

// Re-export main functionality
pub use domain::{DomainValidator, ValidatedDomain};
pub use providers::WhoisProvider;
pub use whois::{WhoisResolver, WhoisService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

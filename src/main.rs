//! whois-proxy - domain registration lookup proxy
//!
//! Serves `GET /whois/{domain}` and `GET /health`.

use std::env;
use whois_proxy::{logging, server, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        println!("whois-proxy {}", whois_proxy::VERSION);
        return Ok(());
    }

    whois_proxy::init()?;

    let config = ProxyConfig::from_env()?;
    logging::init_logging(config.json_logs);

    server::serve(config).await?;

    Ok(())
}

/// Print help information
fn print_help() {
    println!("whois-proxy {}", whois_proxy::VERSION);
    println!();
    println!("USAGE:");
    println!("    whois-proxy");
    println!();
    println!("ENDPOINTS:");
    println!("    GET /whois/{{domain}}   Normalized registration data");
    println!("    GET /health            Liveness probe");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    WHOIS_PROXY_ADDR              Bind address (default: 0.0.0.0:5000)");
    println!("    WHOIS_PROVIDER_TIMEOUT_SECS   Per-provider timeout (default: 10)");
    println!("    WHOIS_PROVIDERS               Provider order (api-ninjas,whoisxml,jsonwhois)");
    println!("    WHOIS_LOG_JSON                Emit JSON logs when set to true");
    println!("    RUST_LOG                      Log filter (default: whois_proxy=info)");
    println!();
    println!("    API_NINJAS_API_KEY            Required to enable api-ninjas");
    println!("    WHOISXML_API_KEY              Optional whoisxml API key");
    println!("    <PROVIDER>_BASE_URL           Override an upstream endpoint");
}

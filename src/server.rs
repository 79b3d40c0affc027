use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// Address to serve the site on, overriding the Leptos site-addr
    #[arg(long, env = "LUSSO_SITE_ADDR")]
    pub site_addr: Option<SocketAddr>,
    /// Path to the Cargo.toml holding the Leptos configuration
    #[arg(long, env = "LUSSO_CONFIG")]
    pub config: Option<String>,
}

pub fn init_logging() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .boxed();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_addr_flag_overrides() {
        let config = ServerConfig::try_parse_from(["lusso", "--site-addr", "127.0.0.1:4000"])
            .expect("parse flags");
        assert_eq!(config.site_addr, Some("127.0.0.1:4000".parse().unwrap()));
        assert!(config.config.is_none());
    }

    #[test]
    fn rejects_malformed_site_addr() {
        assert!(ServerConfig::try_parse_from(["lusso", "--site-addr", "localhost"]).is_err());
    }
}

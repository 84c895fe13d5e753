//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Base URL of the TIX API, e.g. `https://api.tix.id/api/v1`. When set,
    /// `/api/v1/*` on this host is forwarded there.
    pub api_upstream: Option<String>,
    /// Path to a Cargo.toml carrying Leptos site metadata. `None` reads the
    /// `LEPTOS_*` variables set by the build tooling.
    pub leptos_config: Option<String>,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `TIX_API_UPSTREAM`: enables the API forwarder
    /// - `LEPTOS_CONFIG`: Cargo.toml path for Leptos options
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: raw })?,
            None => DEFAULT_BIND_ADDR,
        };
        let api_upstream = non_empty(lookup("TIX_API_UPSTREAM")).map(parse_upstream).transpose()?;
        let leptos_config = non_empty(lookup("LEPTOS_CONFIG"));

        Ok(Self { port, bind_addr, api_upstream, leptos_config })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR, api_upstream: None, leptos_config: None }
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_upstream(raw: String) -> Result<String, ConfigError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw.trim_end_matches('/').to_owned())
    } else {
        Err(ConfigError::Invalid { key: "TIX_API_UPSTREAM", value: raw })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

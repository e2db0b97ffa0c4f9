use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Defaults reproduce the single fixed-address bench setup: a config file
/// only needs the fields it wants to override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    ip: Option<String>,
    port: Option<u16>,
    scheme: Option<String>,
    reset_delay: Option<u64>,
    log_level: Option<String>,
}
impl Config {
    pub fn ip(&self) -> &str {
        match &self.ip {
            Some(s) => s,
            None => "192.168.0.100",
        }
    }
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(80)
    }
    pub fn scheme(&self) -> &str {
        match &self.scheme {
            Some(s) => s,
            None => "http",
        }
    }
    /// Seconds to wait after hitting the reset endpoint before the device
    /// is considered reachable again.
    pub fn reset_delay(&self) -> u64 {
        self.reset_delay.unwrap_or(10)
    }
    pub fn log_level(&self) -> &str {
        match &self.log_level {
            Some(s) => s,
            None => "info",
        }
    }

    pub fn base_url(&self) -> Result<Url> {
        let raw = format!("{}://{}:{}", self.scheme(), self.ip(), self.port());
        Url::parse(&raw).with_context(|| format!("invalid device address '{raw}'"))
    }
}

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Upstream resolver the warm-up queries are sent to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// "ip:port" or a bare IP (port 53 is assumed)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Additional attempts after a failed query
    #[serde(default)]
    pub retry_times: u32,
}

impl ResolverConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        if let Ok(addr) = self.endpoint.parse::<SocketAddr>() {
            return Some(addr);
        }
        self.endpoint
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, 53))
    }
}

fn default_endpoint() -> String {
    "127.0.0.1:53".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            retry_times: 0,
        }
    }
}

//! Shared HTTP client for relay requests
//!
//! Lazily initialised with `OnceLock` and reused so the relay calls share
//! one connection pool. Relay calls carry no overall timeout; only the
//! connection phase is bounded.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

static RELAY_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configuration for the relay client
pub struct RelayClientConfig {
    /// Connection timeout (default: 15 seconds)
    pub connect_timeout: Duration,
    /// Pool idle timeout (default: 60 seconds)
    pub pool_idle_timeout: Duration,
    /// Max idle connections per host (default: 2)
    pub pool_max_idle_per_host: usize,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            pool_idle_timeout: Duration::from_secs(60),
            pool_max_idle_per_host: 2,
        }
    }
}

/// Get the shared relay client, building it on first use.
pub fn get_relay_client() -> &'static Client {
    RELAY_CLIENT.get_or_init(|| {
        create_relay_client(RelayClientConfig::default())
            .expect("Failed to create relay HTTP client")
    })
}

pub fn create_relay_client(config: RelayClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .user_agent(format!("devshowcase/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_client_config_default() {
        let config = RelayClientConfig::default();
        assert_eq!(config.connect_timeout.as_secs(), 15);
        assert_eq!(config.pool_max_idle_per_host, 2);
    }

    #[test]
    fn test_get_relay_client_is_shared() {
        let client = get_relay_client();
        let client2 = get_relay_client();
        assert!(std::ptr::eq(client, client2));
    }
}

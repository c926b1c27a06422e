//! Configuration for reaching the board simulator.
//!
//! This module replaces process-wide address and port globals with an explicit
//! value handed to whatever constructs proxies. It provides:
//! 1. **Defaults:** The loopback endpoint and datagram size the simulator uses out of the box.
//! 2. **Structures:** Endpoint and transport settings, each deserializable from JSON.
//! 3. **Resolution:** Turning the configured host and port into socket addresses.
//!
//! Every field is optional in JSON; omitted fields take their default.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use serde::Deserialize;

use crate::common::error::{ProxyError, Result};

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// Host the simulator listens on.
    pub fn host() -> String {
        constants::SIMULATOR_HOST.to_owned()
    }

    /// Port the simulator listens on.
    pub const fn port() -> u16 {
        constants::SIMULATOR_PORT
    }

    /// Host proxies bind their ephemeral endpoints on.
    pub fn bind_host() -> String {
        constants::BIND_HOST.to_owned()
    }

    /// Reply buffer size in bytes.
    pub const fn recv_buffer() -> usize {
        constants::DATAGRAM_BUFFER_SIZE
    }
}

/// Root configuration handed to a [`Board`](crate::Board).
///
/// # Examples
///
/// ```
/// use boardsim_core::config::SimulatorConfig;
///
/// let json = r#"{ "endpoint": { "port": 10001 }, "transport": { "read_timeout_ms": 250 } }"#;
/// let config = SimulatorConfig::from_json(json).unwrap();
/// assert_eq!(config.endpoint.host, "127.0.0.1");
/// assert_eq!(config.endpoint.port, 10001);
/// assert_eq!(config.transport.read_timeout_ms, Some(250));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulatorConfig {
    /// Where the simulator lives and where proxies bind.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Datagram sizing and receive behavior.
    #[serde(default)]
    pub transport: TransportConfig,
}

impl SimulatorConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProxyError::InvalidConfig)
    }

    /// Resolves the simulator endpoint to a socket address.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the host cannot be resolved.
    pub fn simulator_addr(&self) -> Result<SocketAddr> {
        resolve(&self.endpoint.host, self.endpoint.port, "resolve simulator address")
    }

    /// Resolves the local bind address; port 0 asks the OS for an ephemeral port.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the bind host cannot be resolved.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        resolve(&self.endpoint.bind_host, 0, "resolve bind address")
    }
}

/// Simulator endpoint and local bind host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Simulator host name or IP.
    #[serde(default = "defaults::host")]
    pub host: String,
    /// Simulator UDP port.
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// Host each proxy binds its own endpoint on.
    #[serde(default = "defaults::bind_host")]
    pub bind_host: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            bind_host: defaults::bind_host(),
        }
    }
}

/// Receive-side transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransportConfig {
    /// Largest reply accepted, in bytes. Longer datagrams are truncated by the OS.
    #[serde(default = "defaults::recv_buffer")]
    pub recv_buffer: usize,
    /// Receive timeout. `None` blocks until the simulator answers.
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
}

impl TransportConfig {
    /// Returns the receive timeout as a `Duration`, if one is configured.
    ///
    /// A zero timeout is treated as "none", since sockets reject it.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            recv_buffer: defaults::recv_buffer(),
            read_timeout_ms: None,
        }
    }
}

fn resolve(host: &str, port: u16, action: &'static str) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .map_err(|source| ProxyError::TransportUnavailable { action, source })?
        .next()
        .ok_or_else(|| ProxyError::TransportUnavailable {
            action,
            source: std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("{host}:{port} resolved to no addresses"),
            ),
        })
}

//! UDP datagram channel.
//!
//! Each channel binds its own ephemeral local port and exchanges datagrams with
//! the fixed simulator endpoint. There is no connection, no ordering guarantee
//! across requests, and no fragmentation: one request is one datagram, one reply
//! is one datagram.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use tracing::trace;

use super::traits::{Channel, ChannelFactory};
use crate::common::error::{ProxyError, Result};
use crate::config::{SimulatorConfig, TransportConfig};

/// UDP channel bound to an ephemeral local endpoint.
#[derive(Debug)]
pub struct UdpChannel {
    /// Local socket, owned for the proxy's lifetime.
    socket: UdpSocket,
    /// Simulator endpoint every request goes to.
    destination: SocketAddr,
    /// Reply buffer, sized once from the transport config.
    buffer: Vec<u8>,
    /// Receive timeout, kept for error reporting.
    read_timeout_ms: Option<u64>,
}

impl UdpChannel {
    /// Binds a channel on `local` that talks to `destination`.
    ///
    /// Use port 0 in `local` to get an ephemeral port.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the socket cannot be bound or configured.
    pub fn bind(
        local: SocketAddr,
        destination: SocketAddr,
        transport: &TransportConfig,
    ) -> Result<Self> {
        let socket = UdpSocket::bind(local).map_err(|source| ProxyError::TransportUnavailable {
            action: "bind",
            source,
        })?;
        let timeout = transport.read_timeout();
        socket
            .set_read_timeout(timeout)
            .map_err(|source| ProxyError::TransportUnavailable {
                action: "configure read timeout",
                source,
            })?;

        trace!(
            local = ?socket.local_addr().ok(),
            %destination,
            "bound simulator channel"
        );

        Ok(Self {
            socket,
            destination,
            buffer: vec![0; transport.recv_buffer.max(1)],
            read_timeout_ms: timeout.map(|t| t.as_millis() as u64),
        })
    }

    /// Binds a channel using the endpoint settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when an address cannot be resolved or bound.
    pub fn open(config: &SimulatorConfig) -> Result<Self> {
        Self::bind(config.bind_addr()?, config.simulator_addr()?, &config.transport)
    }

    /// Local endpoint this channel is bound to.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` if the OS cannot report the address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|source| ProxyError::TransportUnavailable {
                action: "query local address",
                source,
            })
    }

    /// Simulator endpoint this channel sends to.
    pub const fn destination(&self) -> SocketAddr {
        self.destination
    }
}

impl Channel for UdpChannel {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let sent = self
            .socket
            .send_to(bytes, self.destination)
            .map_err(|source| ProxyError::TransportUnavailable {
                action: "send",
                source,
            })?;
        trace!(bytes = sent, destination = %self.destination, "sent request");
        Ok(())
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        let (len, peer) = self.socket.recv_from(&mut self.buffer).map_err(|source| {
            match (source.kind(), self.read_timeout_ms) {
                (io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut, Some(timeout_ms)) => {
                    ProxyError::Timeout { timeout_ms }
                }
                _ => ProxyError::TransportUnavailable {
                    action: "receive",
                    source,
                },
            }
        })?;
        trace!(bytes = len, %peer, "received reply");
        Ok(self.buffer[..len].to_vec())
    }
}

/// Factory that binds one UDP channel per proxy.
///
/// Addresses are resolved once, when the factory is built.
#[derive(Debug, Clone)]
pub struct UdpChannelFactory {
    local: SocketAddr,
    destination: SocketAddr,
    transport: TransportConfig,
}

impl UdpChannelFactory {
    /// Resolves the endpoints in `config`.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the simulator or bind host cannot be resolved.
    pub fn new(config: &SimulatorConfig) -> Result<Self> {
        Ok(Self {
            local: config.bind_addr()?,
            destination: config.simulator_addr()?,
            transport: config.transport.clone(),
        })
    }

    /// Simulator endpoint every channel sends to.
    pub const fn destination(&self) -> SocketAddr {
        self.destination
    }
}

impl ChannelFactory for UdpChannelFactory {
    type Channel = UdpChannel;

    fn open(&self) -> Result<UdpChannel> {
        UdpChannel::bind(self.local, self.destination, &self.transport)
    }
}

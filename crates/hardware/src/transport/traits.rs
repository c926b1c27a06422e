//! Channel trait for request/response transports.
//!
//! This module defines the `Channel` trait every device proxy talks through. It provides:
//! 1. **Send:** Fire-and-forget delivery of one encoded request to the simulator.
//! 2. **Receive:** Blocking wait for exactly one reply datagram.
//! 3. **Request:** The composition proxies actually call: encode, send, receive, decode.
//!
//! A reply is correlated with its request only by arrival order, so every method
//! takes `&mut self`: one channel never carries overlapping requests.

use crate::common::error::Result;
use crate::protocol::{Request, Response, codec};

/// Connectionless, addressed transport to the one simulator endpoint.
pub trait Channel: Send {
    /// Sends one encoded request to the simulator.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the datagram cannot be sent.
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Blocks until exactly one datagram arrives and returns its bytes.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` on socket failure, or `Timeout` when a receive
    /// timeout is configured and expires.
    fn receive(&mut self) -> Result<Vec<u8>>;

    /// Sends `request` and decodes whatever reply arrives next.
    ///
    /// # Errors
    ///
    /// Propagates send/receive failures and returns `MalformedResponse` when the
    /// reply does not decode.
    fn request(&mut self, request: &Request) -> Result<Response> {
        self.send(&codec::encode(request))?;
        let reply = self.receive()?;
        codec::decode(&reply)
    }
}

/// Allocates one private channel per device proxy.
///
/// Every proxy obtains its endpoint through this single path, so endpoint policy
/// (bind host, destination, timeouts) lives in one place.
pub trait ChannelFactory {
    /// Channel type handed to proxies.
    type Channel: Channel;

    /// Opens a fresh channel.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the endpoint cannot be bound.
    fn open(&self) -> Result<Self::Channel>;
}

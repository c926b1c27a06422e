//! Shared device proxy behavior.
//!
//! Every proxy follows the same call pattern: build a request with the proxy's
//! fixed target and address, perform exactly one request/reply exchange, and
//! turn `success == false` into `DeviceCommandFailed`. Coercing the payload is
//! left to the specific operation.

use tracing::{debug, warn};

use crate::common::addr::DeviceAddress;
use crate::common::error::{ProxyError, Result};
use crate::protocol::{Payload, Request, Response, Target};
use crate::transport::Channel;

/// Handle on one emulated device: its identity plus its private channel.
#[derive(Debug)]
pub struct DeviceProxy<C> {
    target: Target,
    address: DeviceAddress,
    channel: C,
}

impl<C: Channel> DeviceProxy<C> {
    /// Creates a proxy that owns `channel` for its whole lifetime.
    pub const fn new(target: Target, address: DeviceAddress, channel: C) -> Self {
        Self {
            target,
            address,
            channel,
        }
    }

    /// Device kind requests are routed to.
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Address of the emulated device.
    pub const fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Borrow the underlying channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Starts a request for `operation`, pre-filled with target and wire address.
    pub fn request(&self, operation: &str) -> Request {
        let request = Request::new(self.target, operation);
        match self.address.wire_field() {
            Some((key, value)) => request.with(key, value),
            None => request,
        }
    }

    /// Performs a parameterless operation.
    ///
    /// # Errors
    ///
    /// See [`DeviceProxy::send`].
    pub fn call(&mut self, operation: &str) -> Result<Payload> {
        let request = self.request(operation);
        self.send(&request)
    }

    /// Performs one request/reply exchange and validates the reply.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` with the simulator's diagnostic when the reply
    /// reports failure, or any transport/decoding error from the channel.
    pub fn send(&mut self, request: &Request) -> Result<Payload> {
        debug!(
            target_kind = %self.target,
            address = %self.address,
            operation = request.operation(),
            "device call"
        );
        match self.channel.request(request)? {
            Response::Success(payload) => Ok(payload),
            Response::Failure(cause) => {
                warn!(
                    target_kind = %self.target,
                    address = %self.address,
                    operation = request.operation(),
                    %cause,
                    "device command failed"
                );
                Err(ProxyError::DeviceCommandFailed {
                    target: self.target,
                    address: self.address,
                    operation: request.operation().to_owned(),
                    cause,
                })
            }
        }
    }
}

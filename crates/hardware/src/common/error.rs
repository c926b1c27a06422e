//! Proxy error definitions.
//!
//! Every proxy operation either returns a validated payload or fails with one of the
//! variants below. The taxonomy mirrors how a real driver reports bus trouble:
//! 1. **Transport:** the local endpoint could not be bound, or a datagram could not be sent or received.
//! 2. **Decoding:** the simulator's reply did not decode into the expected envelope or payload type.
//! 3. **Device:** the simulator decoded the request but reported that the operation failed.
//! 4. **Timeout:** a receive timeout was configured and the simulator stayed silent.
//! 5. **Configuration:** the simulator configuration text could not be parsed, or a
//!    device was configured with values its registers cannot hold.

use std::io;

use thiserror::Error;

use super::addr::DeviceAddress;
use crate::protocol::Target;

/// Errors surfaced by device proxies and the transport beneath them.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The transport endpoint could not be bound, or a send/receive failed.
    ///
    /// Fatal for the call; the proxy does not retry.
    #[error("transport unavailable while trying to {action}: {source}")]
    TransportUnavailable {
        /// What the transport was doing (`"bind"`, `"send"`, `"receive"`, ...).
        action: &'static str,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// The reply bytes did not decode into the expected envelope, or the payload
    /// could not be coerced to the type the operation returns.
    #[error("malformed response: {detail}")]
    MalformedResponse {
        /// Human-readable description of what was wrong.
        detail: String,
        /// JSON error, when the failure came from the parser.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The simulator answered with `success == false`.
    #[error("command '{operation}' failed for {target} {address}: {cause}")]
    DeviceCommandFailed {
        /// Device kind the request was addressed to.
        target: Target,
        /// Address of the emulated device (pin number or I2C address).
        address: DeviceAddress,
        /// Operation name carried in the request.
        operation: String,
        /// Diagnostic supplied by the simulator.
        cause: String,
    },

    /// No reply arrived within the configured receive timeout.
    #[error("no reply from simulator within {timeout_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The simulator configuration could not be parsed.
    #[error("invalid simulator config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// A display was configured with a panel size its controller cannot address.
    #[error("unsupported panel geometry {width}x{height}")]
    InvalidGeometry {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl ProxyError {
    /// Builds a `MalformedResponse` that has no parser error behind it.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
            source: None,
        }
    }

    /// Returns the simulator's diagnostic if this is a `DeviceCommandFailed`.
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::DeviceCommandFailed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Result alias used by every proxy operation.
pub type Result<T> = std::result::Result<T, ProxyError>;

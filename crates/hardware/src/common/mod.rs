//! Common types and constants shared by the protocol, transport, and device proxies.
//!
//! This module provides:
//! 1. **Addresses:** How a proxy identifies the emulated device it stands in for.
//! 2. **Constants:** Default simulator endpoint, datagram size, and display page height.
//! 3. **Error Handling:** The `ProxyError` taxonomy and the crate-wide `Result` alias.

/// Device address types (pin numbers and I2C addresses).
pub mod addr;

/// Protocol-wide constants.
pub mod constants;

/// Error types for proxy operations.
pub mod error;

pub use addr::DeviceAddress;
pub use constants::{DATAGRAM_BUFFER_SIZE, PAGE_HEIGHT};
pub use error::{ProxyError, Result};

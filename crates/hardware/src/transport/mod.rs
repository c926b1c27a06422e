//! Transport channels between device proxies and the simulator.
//!
//! The `Channel` trait is the seam every proxy depends on; `UdpChannel` is the
//! production implementation and `UdpChannelFactory` the one place endpoints are
//! allocated.

/// Channel and factory traits.
pub mod traits;

/// UDP datagram channel and its factory.
pub mod udp;

pub use traits::{Channel, ChannelFactory};
pub use udp::{UdpChannel, UdpChannelFactory};

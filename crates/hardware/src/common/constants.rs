//! Protocol-wide constants.

/// Receive buffer size for one simulator reply, in bytes.
///
/// A single datagram carries a whole reply; nothing is fragmented or reassembled.
pub const DATAGRAM_BUFFER_SIZE: usize = 1024;

/// Host the board simulator listens on.
pub const SIMULATOR_HOST: &str = "127.0.0.1";

/// UDP port the board simulator listens on.
pub const SIMULATOR_PORT: u16 = 9999;

/// Host each proxy binds its ephemeral endpoint on.
pub const BIND_HOST: &str = "127.0.0.1";

/// Rows of pixels covered by one display page.
pub const PAGE_HEIGHT: u32 = 8;

//! Simulator command protocol.
//!
//! The envelope shared by every device proxy, the JSON codec that puts it on the
//! wire, and the payload coercions operations apply to successful replies.

/// Stateless JSON encode/decode.
pub mod codec;

/// Request and response envelopes.
pub mod envelope;

/// Reply payload coercions.
pub mod payload;

pub use codec::{decode, encode};
pub use envelope::{Request, Response, Target};
pub use payload::Payload;

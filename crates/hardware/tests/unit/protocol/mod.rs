/// Encode/decode behavior.
pub mod codec;


/// Payload coercions.
pub mod payload;

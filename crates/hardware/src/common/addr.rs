//! Device address types.
//!
//! A proxy is identified by its device kind plus a stable address. Pins are
//! addressed by number, and the simulator expects that number in every request.
//! Bus-attached peripherals are addressed by their 7-bit I2C address, which
//! stays local and only appears in diagnostics.

use std::fmt;

use serde_json::Value;

/// Stable address of one emulated device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceAddress {
    /// GPIO pin number, sent as `num`.
    Pin(u32),
    /// 7-bit I2C peripheral address, never sent.
    I2c(u8),
}

impl DeviceAddress {
    /// Returns the request field that carries this address, if the protocol has one.
    pub fn wire_field(self) -> Option<(&'static str, Value)> {
        match self {
            Self::Pin(num) => Some(("num", Value::from(num))),
            Self::I2c(_) => None,
        }
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(num) => write!(f, "{num}"),
            Self::I2c(addr) => write!(f, "{addr:#04x}"),
        }
    }
}

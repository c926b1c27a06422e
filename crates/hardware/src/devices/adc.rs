//! Analog input proxy.
//!
//! The simulator models analog inputs as operations on the pin they sit on, so
//! requests go to the `pin` target with the pin's number.

use super::pin::Pin;
use super::proxy::DeviceProxy;
use crate::common::addr::DeviceAddress;
use crate::common::error::{ProxyError, Result};
use crate::protocol::Target;
use crate::transport::Channel;

/// Proxy for an ADC channel attached to a pin.
#[derive(Debug)]
pub struct Adc<C> {
    proxy: DeviceProxy<C>,
    pin: u32,
}

impl<C: Channel> Adc<C> {
    /// Creates an ADC proxy on `pin`, owning `channel`.
    pub fn new<P: Channel>(pin: &Pin<P>, channel: C) -> Self {
        let num = pin.num();
        Self {
            proxy: DeviceProxy::new(Target::Pin, DeviceAddress::Pin(num), channel),
            pin: num,
        }
    }

    /// Number of the pin this ADC samples.
    pub const fn pin(&self) -> u32 {
        self.pin
    }

    /// Reads the raw sample, scaled to 0..=65535 across the 0-3300 mV range.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` on a failed reply, or `MalformedResponse` when
    /// the payload is not an integer in range.
    pub fn read_u16(&mut self) -> Result<u16> {
        let raw = self.proxy.call("read_u16")?.as_int()?;
        u16::try_from(raw)
            .map_err(|_| ProxyError::malformed(format!("read_u16 sample {raw} out of range")))
    }

    /// Reads the input voltage in microvolts.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` on a failed reply, or `MalformedResponse` when
    /// the payload is not numeric.
    pub fn read_uv(&mut self) -> Result<f64> {
        self.proxy.call("read_uv")?.as_float()
    }
}

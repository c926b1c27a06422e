//! Digital pin proxy.
//!
//! Mirrors the pin surface embedded drivers expect. Mode, pull, drive and alt
//! are recorded locally; only `on`, `off` and `value` reach the simulator.

use super::proxy::DeviceProxy;
use crate::common::addr::DeviceAddress;
use crate::common::error::Result;
use crate::protocol::Target;
use crate::transport::Channel;

/// Pin direction and function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PinMode {
    /// Digital input.
    In = 0,
    /// Digital output.
    #[default]
    Out = 1,
    /// Alternate function.
    Alt = 2,
    /// Analog input.
    Analog = 3,
    /// Open-drain output.
    OpenDrain = 5,
    /// Alternate function, open-drain.
    AltOpenDrain = 6,
}

/// Internal resistor selection. `None` in [`PinConfig::pull`] means no resistor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Pull {
    /// Pull-up resistor.
    Up = 1,
    /// Pull-down resistor.
    Down = 2,
    /// Hold the current level.
    Hold = 3,
}

/// Construction-time pin settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Direction and function.
    pub mode: PinMode,
    /// Resistor, if any.
    pub pull: Option<Pull>,
    /// Initial output level, if requested.
    pub value: Option<bool>,
    /// Drive strength.
    pub drive: u8,
    /// Alternate function index; `-1` for none.
    pub alt: i32,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            mode: PinMode::Out,
            pull: None,
            value: None,
            drive: 0,
            alt: -1,
        }
    }
}

impl PinConfig {
    /// Settings for a plain input pin.
    pub fn input() -> Self {
        Self {
            mode: PinMode::In,
            ..Self::default()
        }
    }

    /// Settings for a plain output pin.
    pub fn output() -> Self {
        Self::default()
    }

    /// Replaces the pull setting.
    #[must_use]
    pub const fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = Some(pull);
        self
    }
}

/// Proxy for one GPIO pin.
#[derive(Debug)]
pub struct Pin<C> {
    proxy: DeviceProxy<C>,
    num: u32,
    config: PinConfig,
}

impl<C: Channel> Pin<C> {
    /// Creates a pin proxy that owns `channel`.
    pub const fn new(num: u32, config: PinConfig, channel: C) -> Self {
        Self {
            proxy: DeviceProxy::new(Target::Pin, DeviceAddress::Pin(num), channel),
            num,
            config,
        }
    }

    /// Pin number.
    pub const fn num(&self) -> u32 {
        self.num
    }

    /// Configured mode.
    pub const fn mode(&self) -> PinMode {
        self.config.mode
    }

    /// Configured pull.
    pub const fn pull(&self) -> Option<Pull> {
        self.config.pull
    }

    /// Full construction-time settings.
    pub const fn config(&self) -> &PinConfig {
        &self.config
    }

    /// Drives the pin high.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the command.
    pub fn on(&mut self) -> Result<()> {
        self.proxy.call("on").map(drop)
    }

    /// Drives the pin low.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the command.
    pub fn off(&mut self) -> Result<()> {
        self.proxy.call("off").map(drop)
    }

    /// Reads the pin level.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` on a failed reply, or `MalformedResponse` when
    /// the payload is not an integer.
    pub fn value(&mut self) -> Result<i64> {
        self.proxy.call("value")?.as_int()
    }
}

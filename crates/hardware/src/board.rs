//! Board: the entry point that hands out device proxies.
//!
//! A board owns the channel factory built from an explicit [`SimulatorConfig`].
//! Every proxy it creates gets a fresh channel from that factory, so no two
//! proxies ever share an endpoint and no proxy opens a socket on its own.

use crate::common::error::Result;
use crate::config::SimulatorConfig;
use crate::devices::{
    Adc, I2c, Lsm6dsox, Lsm6dsoxConfig, Pin, PinConfig, Pwm, Ssd1306, Ssd1306Config,
};
use crate::transport::{Channel, ChannelFactory, UdpChannelFactory};

/// Source of device proxies bound to one simulator.
#[derive(Debug, Clone)]
pub struct Board<F = UdpChannelFactory> {
    factory: F,
}

impl Board<UdpChannelFactory> {
    /// Creates a board that reaches the simulator over UDP.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the configured hosts cannot be resolved.
    pub fn connect(config: &SimulatorConfig) -> Result<Self> {
        Ok(Self::with_factory(UdpChannelFactory::new(config)?))
    }
}

impl<F: ChannelFactory> Board<F> {
    /// Creates a board around any channel factory.
    pub const fn with_factory(factory: F) -> Self {
        Self { factory }
    }

    /// Borrow the channel factory.
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Creates a GPIO pin proxy.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the pin's endpoint cannot be bound.
    pub fn pin(&self, num: u32, config: PinConfig) -> Result<Pin<F::Channel>> {
        Ok(Pin::new(num, config, self.factory.open()?))
    }

    /// Creates an ADC proxy on `pin`.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the ADC's endpoint cannot be bound.
    pub fn adc<P: Channel>(&self, pin: &Pin<P>) -> Result<Adc<F::Channel>> {
        Ok(Adc::new(pin, self.factory.open()?))
    }

    /// Creates a PWM on `pin`. No endpoint is allocated.
    #[allow(clippy::unused_self)]
    pub fn pwm<P: Channel>(&self, pin: &Pin<P>) -> Pwm {
        Pwm::new(pin)
    }

    /// Creates an SSD1306 display proxy on `bus`.
    ///
    /// The geometry is checked before an endpoint is allocated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` for a panel size the controller cannot address, or
    /// `TransportUnavailable` when the display's endpoint cannot be bound.
    pub fn ssd1306_i2c(&self, bus: I2c, config: Ssd1306Config) -> Result<Ssd1306<F::Channel>> {
        config.validate()?;
        Ssd1306::new(bus, config, self.factory.open()?)
    }

    /// Creates an LSM6DSOX proxy on `bus`.
    ///
    /// # Errors
    ///
    /// Returns `TransportUnavailable` when the IMU's endpoint cannot be bound.
    pub fn lsm6dsox(&self, bus: I2c, config: Lsm6dsoxConfig) -> Result<Lsm6dsox<F::Channel>> {
        Ok(Lsm6dsox::new(bus, config, self.factory.open()?))
    }
}

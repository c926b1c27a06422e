//! Device proxies.
//!
//! One proxy per emulated peripheral. Each owns a private channel to the
//! simulator and follows the shared call pattern in [`proxy`]; PWM and the I2C
//! bus descriptor are purely local.

/// Analog input on a pin.
pub mod adc;

/// I2C bus descriptor.
pub mod i2c;

/// LSM6DSOX inertial measurement unit.
pub mod lsm6dsox;

/// Digital GPIO pin.
pub mod pin;

/// Shared call/validate/return behavior.
pub mod proxy;

/// PWM output (local state only).
pub mod pwm;

/// SSD1306 OLED display.
pub mod ssd1306;

pub use adc::Adc;
pub use i2c::I2c;
pub use lsm6dsox::{Lsm6dsox, Lsm6dsoxConfig};
pub use pin::{Pin, PinConfig, PinMode, Pull};
pub use proxy::DeviceProxy;
pub use pwm::Pwm;
pub use ssd1306::{DisplayLifecycle, Ssd1306, Ssd1306Config};

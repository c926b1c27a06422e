//! Board simulator device proxies.
//!
//! This crate lets embedded driver code run against a software board simulator
//! instead of real hardware. It implements the following:
//! 1. **Protocol:** A JSON request/response envelope shared by every device.
//! 2. **Transport:** UDP channels to the one simulator endpoint, one per proxy.
//! 3. **Devices:** Proxies for GPIO pins, ADC inputs, PWM outputs, an SSD1306 display, and an LSM6DSOX IMU.
//! 4. **Board:** The entry point that builds proxies from an explicit configuration.
//!
//! ```no_run
//! use boardsim_core::config::SimulatorConfig;
//! use boardsim_core::devices::{I2c, PinConfig, Ssd1306Config};
//! use boardsim_core::Board;
//!
//! # fn main() -> boardsim_core::Result<()> {
//! let board = Board::connect(&SimulatorConfig::default())?;
//! let mut led = board.pin(25, PinConfig::output())?;
//! led.on()?;
//!
//! let mut oled = board.ssd1306_i2c(I2c::new(0), Ssd1306Config::new(128, 32))?;
//! oled.init_display()?;
//! oled.text("hello", 0, 0)?;
//! oled.show()?;
//! # Ok(())
//! # }
//! ```

/// Board entry point that hands out device proxies.
pub mod board;
/// Common types and constants (addresses, errors, defaults).
pub mod common;
/// Simulator endpoint and transport configuration.
pub mod config;
/// Device proxies (pin, ADC, PWM, I2C, SSD1306, LSM6DSOX).
pub mod devices;
/// Request/response envelope and JSON codec.
pub mod protocol;
/// Transport channels and the channel factory.
pub mod transport;

/// Board type; construct with `Board::connect` or `Board::with_factory`.
pub use crate::board::Board;
/// Error taxonomy and result alias shared by every operation.
pub use crate::common::error::{ProxyError, Result};
/// Root configuration type; use `SimulatorConfig::default()` or deserialize from JSON.
pub use crate::config::SimulatorConfig;

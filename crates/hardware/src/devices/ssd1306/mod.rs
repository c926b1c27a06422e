//! SSD1306 OLED display proxy over I2C.
//!
//! The only stateful proxy. It keeps the panel geometry and power configuration,
//! derives the controller's initialization sequence from them, and forwards
//! drawing calls to the simulator. Pixel data is never held locally: the
//! simulator owns the frame buffer.
//!
//! Two request paths exist:
//! 1. **Command path:** `write_cmd` sends one raw controller byte. Initialization,
//!    `contrast`, `invert` and `poweroff` go through it.
//! 2. **Drawing path:** `fill`, `pixel`, `line`, `hline`, `vline`, `rect`,
//!    `fill_rect`, `text`, `show` and `scroll` each map to exactly one request.
//!
//! Neither path retries or rolls back a partial sequence.

/// Register opcodes and typed commands.
pub mod command;

use tracing::{debug, warn};

use self::command::{AddressingMode, Command, InitStep};
use super::i2c::I2c;
use super::proxy::DeviceProxy;
use crate::common::addr::DeviceAddress;
use crate::common::constants::PAGE_HEIGHT;
use crate::common::error::{ProxyError, Result};
use crate::protocol::Target;
use crate::transport::Channel;

/// Default 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Panel height that selects the sequential COM pin configuration.
const SEQUENTIAL_COM_HEIGHT: u32 = 32;

/// Largest width or height whose last row/column index fits a one-byte register.
pub const MAX_DIMENSION: u32 = 256;

/// Construction-time display settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ssd1306Config {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels; expected to be a multiple of 8.
    pub height: u32,
    /// 7-bit I2C address.
    pub address: u8,
    /// Panel is powered from an external VCC rather than the internal charge pump.
    pub external_vcc: bool,
}

impl Ssd1306Config {
    /// Settings for a `width` x `height` panel at the default address, internally powered.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            address: DEFAULT_ADDRESS,
            external_vcc: false,
        }
    }

    /// Changes the I2C address.
    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Selects external or internal panel power.
    #[must_use]
    pub const fn with_external_vcc(mut self, external_vcc: bool) -> Self {
        self.external_vcc = external_vcc;
        self
    }

    /// Checks that the geometry can be expressed in the controller's registers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` when either dimension is zero or exceeds
    /// [`MAX_DIMENSION`].
    pub const fn validate(&self) -> Result<()> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(ProxyError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Controller lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayLifecycle {
    /// Constructed, no initialization sequence sent yet.
    Uninitialized,
    /// `init_display` has completed at least once.
    Initialized,
}

/// Proxy for an SSD1306 on an I2C bus.
#[derive(Debug)]
pub struct Ssd1306<C> {
    proxy: DeviceProxy<C>,
    bus: I2c,
    width: u32,
    height: u32,
    external_vcc: bool,
    pages: u32,
    last_column: u8,
    last_row: u8,
    lifecycle: DisplayLifecycle,
}

impl<C: Channel> Ssd1306<C> {
    /// Creates a display proxy that owns `channel`.
    ///
    /// Nothing is sent until [`Ssd1306::init_display`] is called.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` when the panel size does not fit the controller's
    /// one-byte row and column registers.
    pub fn new(bus: I2c, config: Ssd1306Config, channel: C) -> Result<Self> {
        config.validate()?;
        let invalid = || ProxyError::InvalidGeometry {
            width: config.width,
            height: config.height,
        };
        let last_column = u8::try_from(config.width - 1).map_err(|_| invalid())?;
        let last_row = u8::try_from(config.height - 1).map_err(|_| invalid())?;
        if config.height % PAGE_HEIGHT != 0 {
            warn!(
                height = config.height,
                "panel height is not a multiple of the page height; trailing rows are unaddressable"
            );
        }
        Ok(Self {
            proxy: DeviceProxy::new(Target::Oled, DeviceAddress::I2c(config.address), channel),
            bus,
            width: config.width,
            height: config.height,
            external_vcc: config.external_vcc,
            pages: config.height / PAGE_HEIGHT,
            last_column,
            last_row,
            lifecycle: DisplayLifecycle::Uninitialized,
        })
    }

    /// Panel width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Panel height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages, fixed at construction.
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Whether the panel runs on external VCC.
    pub const fn external_vcc(&self) -> bool {
        self.external_vcc
    }

    /// Bus the display is attached to.
    pub const fn bus(&self) -> &I2c {
        &self.bus
    }

    /// Current lifecycle stage.
    pub const fn lifecycle(&self) -> DisplayLifecycle {
        self.lifecycle
    }

    /// The initialization sequence for this panel, one entry per logical step.
    ///
    /// Order matters: later commands rely on the addressing mode set earlier.
    pub fn init_sequence(&self) -> Vec<InitStep> {
        let com_pins = if self.height == SEQUENTIAL_COM_HEIGHT { 0x02 } else { 0x12 };
        let precharge = if self.external_vcc { 0x22 } else { 0xF1 };
        let charge_pump = if self.external_vcc { 0x10 } else { 0x14 };

        vec![
            InitStep::Commands(vec![Command::Display(false)]),
            InitStep::Commands(vec![Command::MemoryAddressingMode(
                AddressingMode::Horizontal,
            )]),
            InitStep::Commands(vec![Command::StartLine(0), Command::SegmentRemap(true)]),
            InitStep::Commands(vec![Command::MultiplexRatio(self.last_row)]),
            InitStep::Commands(vec![Command::ComScanRemapped(true)]),
            InitStep::Commands(vec![Command::DisplayOffset(0)]),
            InitStep::Commands(vec![Command::ComPinConfig(com_pins)]),
            InitStep::Commands(vec![Command::ClockDivide(0x80)]),
            InitStep::Commands(vec![Command::Precharge(precharge)]),
            InitStep::Commands(vec![Command::VcomDeselect(0x30)]),
            InitStep::Commands(vec![Command::Contrast(0xFF)]),
            InitStep::Commands(vec![Command::EntireDisplayOn(false)]),
            InitStep::Commands(vec![Command::Invert(false)]),
            InitStep::Commands(vec![Command::ChargePump(charge_pump)]),
            InitStep::Commands(vec![Command::Display(true)]),
            InitStep::ClearAndShow,
        ]
    }

    /// Sends the full initialization sequence, then clears and flushes the panel.
    ///
    /// Calling it again reissues the whole sequence.
    ///
    /// # Errors
    ///
    /// Stops at the first failed request and returns its error; commands already
    /// sent are not undone.
    pub fn init_display(&mut self) -> Result<()> {
        let steps = self.init_sequence();
        debug!(
            width = self.width,
            height = self.height,
            external_vcc = self.external_vcc,
            steps = steps.len(),
            "initializing display"
        );
        for step in &steps {
            match step {
                InitStep::Commands(_) => {
                    for byte in step.bytes() {
                        self.write_cmd(byte)?;
                    }
                }
                InitStep::ClearAndShow => {
                    self.fill(0)?;
                    self.show()?;
                }
            }
        }
        self.lifecycle = DisplayLifecycle::Initialized;
        Ok(())
    }

    /// Writes one raw controller byte.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the byte.
    pub fn write_cmd(&mut self, cmd: u8) -> Result<()> {
        let request = self.proxy.request("write_cmd").with("val", cmd);
        self.proxy.send(&request).map(drop)
    }

    /// Writes every byte of `command`, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected byte.
    pub fn write_command(&mut self, command: Command) -> Result<()> {
        for byte in command.to_bytes() {
            self.write_cmd(byte)?;
        }
        Ok(())
    }

    /// Column and page windows covering the whole panel.
    pub const fn full_window(&self) -> [Command; 2] {
        [
            Command::ColumnAddress(0, self.last_column),
            Command::PageAddress(0, self.pages.saturating_sub(1) as u8),
        ]
    }

    /// Points the controller's RAM window at the whole panel.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected byte.
    pub fn select_full_window(&mut self) -> Result<()> {
        for command in self.full_window() {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Turns the panel off.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the command.
    pub fn poweroff(&mut self) -> Result<()> {
        self.write_command(Command::Display(false))
    }

    /// Sets the contrast level.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects either byte.
    pub fn contrast(&mut self, contrast: u8) -> Result<()> {
        self.write_command(Command::Contrast(contrast))
    }

    /// Selects inverse (`true`) or normal video.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the command.
    pub fn invert(&mut self, invert: bool) -> Result<()> {
        self.write_command(Command::Invert(invert))
    }

    /// Fills every pixel with `val` (0 clears).
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn fill(&mut self, val: u8) -> Result<()> {
        let request = self.proxy.request("fill").with("val", val);
        self.proxy.send(&request).map(drop)
    }

    /// Sets one pixel.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn pixel(&mut self, x: i32, y: i32, clr: u8) -> Result<()> {
        let request = self
            .proxy
            .request("pixel")
            .with("x", x)
            .with("y", y)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }

    /// Draws a line from `(x0, y0)` to `(x1, y1)`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, clr: u8) -> Result<()> {
        let request = self
            .proxy
            .request("line")
            .with("x0", x0)
            .with("y0", y0)
            .with("x1", x1)
            .with("y1", y1)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }

    /// Draws a horizontal line `w` pixels wide starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn hline(&mut self, x: i32, y: i32, w: i32, clr: u8) -> Result<()> {
        let request = self
            .proxy
            .request("hline")
            .with("x", x)
            .with("y", y)
            .with("w", w)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }

    /// Draws a vertical line `h` pixels tall starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn vline(&mut self, x: i32, y: i32, h: i32, clr: u8) -> Result<()> {
        let request = self
            .proxy
            .request("vline")
            .with("x", x)
            .with("y", y)
            .with("h", h)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }

    /// Draws a rectangle outline.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, clr: u8) -> Result<()> {
        self.send_rect("rect", x, y, w, h, clr)
    }

    /// Draws a filled rectangle.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, clr: u8) -> Result<()> {
        self.send_rect("fill_rect", x, y, w, h, clr)
    }

    /// Renders `text` at pixel column `col`, row `row`, lit.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn text(&mut self, text: &str, col: i32, row: i32) -> Result<()> {
        self.text_with_color(text, col, row, 1)
    }

    /// Renders `text` at pixel column `col`, row `row` in color `clr`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn text_with_color(&mut self, text: &str, col: i32, row: i32, clr: u8) -> Result<()> {
        let request = self
            .proxy
            .request("text")
            .with("text", text)
            .with("col", col)
            .with("row", row)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }

    /// Flushes the simulator's frame buffer to the panel.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn show(&mut self) -> Result<()> {
        self.proxy.call("show").map(drop)
    }

    /// Shifts the frame buffer by `(dx, dy)` pixels.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` if the simulator rejects the request.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> Result<()> {
        let request = self.proxy.request("scroll").with("dx", dx).with("dy", dy);
        self.proxy.send(&request).map(drop)
    }

    fn send_rect(
        &mut self,
        operation: &str,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        clr: u8,
    ) -> Result<()> {
        let request = self
            .proxy
            .request(operation)
            .with("x", x)
            .with("y", y)
            .with("w", w)
            .with("h", h)
            .with("clr", clr);
        self.proxy.send(&request).map(drop)
    }
}

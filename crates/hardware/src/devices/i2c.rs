//! I2C bus descriptor.
//!
//! The simulator has no notion of a bus; peripherals talk to it directly. The
//! descriptor only records which bus and pins a driver asked for.

/// Default SCL pin.
pub const DEFAULT_SCL: u32 = 13;

/// Default SDA pin.
pub const DEFAULT_SDA: u32 = 12;

/// Default bus frequency in Hz.
pub const DEFAULT_FREQ: u32 = 400_000;

/// One I2C bus as configured by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2c {
    id: u32,
    scl: u32,
    sda: u32,
    freq: u32,
}

impl I2c {
    /// Bus `id` on the default pins and frequency.
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            scl: DEFAULT_SCL,
            sda: DEFAULT_SDA,
            freq: DEFAULT_FREQ,
        }
    }

    /// Moves the bus to other pins.
    #[must_use]
    pub const fn with_pins(mut self, scl: u32, sda: u32) -> Self {
        self.scl = scl;
        self.sda = sda;
        self
    }

    /// Changes the bus frequency.
    #[must_use]
    pub const fn with_freq(mut self, freq: u32) -> Self {
        self.freq = freq;
        self
    }

    /// Bus index.
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// SCL pin number.
    pub const fn scl(&self) -> u32 {
        self.scl
    }

    /// SDA pin number.
    pub const fn sda(&self) -> u32 {
        self.sda
    }

    /// Bus frequency in Hz.
    pub const fn freq(&self) -> u32 {
        self.freq
    }
}

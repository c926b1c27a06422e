//! PWM output.
//!
//! Frequency and duty cycle are plain property cells held in-process; the
//! simulator is never consulted. Getters and setters are separate operations,
//! so "never set" and "set to zero" are not confused.

use super::pin::Pin;
use crate::transport::Channel;

/// Frequency a freshly created PWM reports, in Hz.
pub const DEFAULT_FREQ: u32 = 1000;

/// Duty cycle a freshly created PWM reports (0..=65535 scale).
pub const DEFAULT_DUTY_U16: u16 = 200;

/// PWM channel on a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pwm {
    pin: u32,
    freq: u32,
    duty: u16,
    active: bool,
}

impl Pwm {
    /// Creates a PWM on `pin` with the default frequency and duty.
    pub fn new<C: Channel>(pin: &Pin<C>) -> Self {
        Self::on_pin(pin.num())
    }

    /// Creates a PWM on a pin number.
    pub const fn on_pin(pin: u32) -> Self {
        Self {
            pin,
            freq: DEFAULT_FREQ,
            duty: DEFAULT_DUTY_U16,
            active: true,
        }
    }

    /// Pin this PWM drives.
    pub const fn pin(&self) -> u32 {
        self.pin
    }

    /// Current frequency in Hz.
    pub const fn freq(&self) -> u32 {
        self.freq
    }

    /// Stores a new frequency.
    pub const fn set_freq(&mut self, freq: u32) {
        self.freq = freq;
    }

    /// Current duty cycle.
    pub const fn duty_u16(&self) -> u16 {
        self.duty
    }

    /// Stores a new duty cycle.
    pub const fn set_duty_u16(&mut self, duty: u16) {
        self.duty = duty;
    }

    /// Whether the output is still running.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Turns the output off. Stored frequency and duty are kept.
    pub const fn deinit(&mut self) {
        self.active = false;
    }
}

//! # PWM Tests
//!
//! PWM state is local; none of these operations may touch a channel.

use crate::common::mocks::channel::MockSimChannel;
use boardsim_core::devices::pwm::{DEFAULT_DUTY_U16, DEFAULT_FREQ};
use boardsim_core::devices::{Pin, PinConfig, Pwm};

#[test]
fn test_defaults() {
    // A mock with no expectations panics on any call.
    let pin = Pin::new(15, PinConfig::output(), MockSimChannel::new());
    let pwm = Pwm::new(&pin);

    assert_eq!(pwm.pin(), 15);
    assert_eq!(pwm.freq(), DEFAULT_FREQ);
    assert_eq!(pwm.duty_u16(), DEFAULT_DUTY_U16);
    assert!(pwm.is_active());
}

#[test]
fn test_set_then_get() {
    let mut pwm = Pwm::on_pin(15);
    pwm.set_freq(50);
    pwm.set_duty_u16(0);

    assert_eq!(pwm.freq(), 50);
    assert_eq!(pwm.duty_u16(), 0);
}

#[test]
fn test_deinit_keeps_settings() {
    let mut pwm = Pwm::on_pin(3);
    pwm.set_duty_u16(40_000);
    pwm.deinit();

    assert!(!pwm.is_active());
    assert_eq!(pwm.duty_u16(), 40_000);
    assert_eq!(pwm.freq(), DEFAULT_FREQ);
}

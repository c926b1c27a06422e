//! # Board Tests
//!
//! Every proxy gets its own channel from the factory; PWM gets none.

use crate::common::harness::RecordingFactory;
use boardsim_core::{Board, ProxyError};
use boardsim_core::devices::{I2c, Lsm6dsoxConfig, PinConfig, Ssd1306Config};
use serde_json::json;

#[test]
fn test_each_proxy_opens_one_channel() {
    let board = Board::with_factory(RecordingFactory::new());

    let pin = board.pin(25, PinConfig::output()).unwrap();
    let _adc = board.adc(&pin).unwrap();
    let _oled = board
        .ssd1306_i2c(I2c::new(0), Ssd1306Config::new(128, 32))
        .unwrap();
    let _imu = board.lsm6dsox(I2c::new(0), Lsm6dsoxConfig::default()).unwrap();
    assert_eq!(board.factory().opened(), 4);

    let _pwm = board.pwm(&pin);
    assert_eq!(board.factory().opened(), 4);
}

#[test]
fn test_creating_proxies_sends_nothing() {
    let board = Board::with_factory(RecordingFactory::new());
    let _pin = board.pin(1, PinConfig::input()).unwrap();
    let _oled = board
        .ssd1306_i2c(I2c::new(0), Ssd1306Config::new(128, 64))
        .unwrap();

    assert!(board.factory().channel.sent().is_empty());
}

#[test]
fn test_proxies_route_to_their_targets() {
    let board = Board::with_factory(RecordingFactory::new());
    let mut pin = board.pin(2, PinConfig::output()).unwrap();
    let mut oled = board
        .ssd1306_i2c(I2c::new(0), Ssd1306Config::new(128, 32))
        .unwrap();

    pin.on().unwrap();
    oled.show().unwrap();
    assert_eq!(
        board.factory().channel.sent(),
        vec![
            json!({ "to": "pin", "msg": "on", "num": 2 }),
            json!({ "to": "oled", "msg": "show" }),
        ]
    );
}

#[test]
fn test_invalid_display_geometry_allocates_no_endpoint() {
    let board = Board::with_factory(RecordingFactory::new());
    let err = board
        .ssd1306_i2c(I2c::new(0), Ssd1306Config::new(128, 0))
        .unwrap_err();

    assert!(matches!(err, ProxyError::InvalidGeometry { width: 128, height: 0 }));
    assert_eq!(board.factory().opened(), 0);
}

//! # LSM6DSOX Tests
//!
//! Vector reads and the recorded sensor configuration.

use crate::common::harness::RecordingChannel;
use boardsim_core::ProxyError;
use boardsim_core::devices::lsm6dsox::DEFAULT_ADDRESS;
use boardsim_core::devices::{I2c, Lsm6dsox, Lsm6dsoxConfig};
use pretty_assertions::assert_eq;
use serde_json::json;

fn imu(channel: &RecordingChannel) -> Lsm6dsox<RecordingChannel> {
    Lsm6dsox::new(I2c::new(0), Lsm6dsoxConfig::default(), channel.clone())
}

#[test]
fn test_config_defaults() {
    let config = Lsm6dsoxConfig::default();
    assert_eq!(config.address, DEFAULT_ADDRESS);
    assert_eq!(config.gyro_odr, 104);
    assert_eq!(config.accel_odr, 104);
    assert_eq!(config.gyro_scale, 2000);
    assert_eq!(config.accel_scale, 4);
}

#[test]
fn test_read_gyro_and_accel() {
    let channel = RecordingChannel::succeeding();
    channel.push_reply(json!({ "success": true, "msg": [0.5, -1.25, 90] }));
    channel.push_reply(json!({ "success": true, "msg": [0, 0, 1] }));
    let mut imu = imu(&channel);

    assert_eq!(imu.read_gyro().unwrap(), [0.5, -1.25, 90.0]);
    assert_eq!(imu.read_accel().unwrap(), [0.0, 0.0, 1.0]);
    assert_eq!(
        channel.sent(),
        vec![
            json!({ "to": "lsm6dsox", "msg": "read_gyro" }),
            json!({ "to": "lsm6dsox", "msg": "read_accel" }),
        ]
    );
}

#[test]
fn test_aliases_issue_the_same_operations() {
    let channel = RecordingChannel::succeeding();
    channel.push_reply(json!({ "success": true, "msg": [1, 2, 3] }));
    channel.push_reply(json!({ "success": true, "msg": [4, 5, 6] }));
    let mut imu = imu(&channel);

    assert_eq!(imu.gyro().unwrap(), [1.0, 2.0, 3.0]);
    assert_eq!(imu.accel().unwrap(), [4.0, 5.0, 6.0]);
    assert_eq!(channel.operations(), vec!["read_gyro", "read_accel"]);
}

#[test]
fn test_short_vector_is_malformed() {
    let channel = RecordingChannel::succeeding();
    channel.push_reply(json!({ "success": true, "msg": [1, 2] }));
    let mut imu = imu(&channel);

    assert!(matches!(
        imu.read_accel().unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
}

#[test]
fn test_failed_read() {
    let channel = RecordingChannel::succeeding();
    channel.push_reply(json!({ "success": false, "msg": "sensor asleep" }));
    let mut imu = imu(&channel);

    let err = imu.read_gyro().unwrap_err();
    assert_eq!(err.cause(), Some("sensor asleep"));
    assert_eq!(err.to_string(), "command 'read_gyro' failed for lsm6dsox 0x6a: sensor asleep");
}

#[test]
fn test_bus_and_config_are_recorded() {
    let config = Lsm6dsoxConfig {
        address: 0x6B,
        gyro_scale: 250,
        ..Lsm6dsoxConfig::default()
    };
    let imu = Lsm6dsox::new(I2c::new(1).with_pins(7, 6), config, RecordingChannel::succeeding());
    assert_eq!(imu.bus().id(), 1);
    assert_eq!(imu.bus().scl(), 7);
    assert_eq!(imu.config().address, 0x6B);
    assert_eq!(imu.config().gyro_scale, 250);
}

//! LSM6DSOX inertial measurement unit proxy.
//!
//! Gyroscope and accelerometer reads are forwarded to the simulator, which
//! answers with an `(x, y, z)` vector. Output data rate and full-scale settings
//! are recorded so drivers can read back what they configured.

use super::i2c::I2c;
use super::proxy::DeviceProxy;
use crate::common::addr::DeviceAddress;
use crate::common::error::Result;
use crate::protocol::Target;
use crate::transport::Channel;

/// Default 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x6A;

/// Construction-time IMU settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lsm6dsoxConfig {
    /// 7-bit I2C address.
    pub address: u8,
    /// Gyroscope output data rate in Hz.
    pub gyro_odr: u32,
    /// Accelerometer output data rate in Hz.
    pub accel_odr: u32,
    /// Gyroscope full scale in degrees/second.
    pub gyro_scale: u32,
    /// Accelerometer full scale in g.
    pub accel_scale: u32,
}

impl Default for Lsm6dsoxConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            gyro_odr: 104,
            accel_odr: 104,
            gyro_scale: 2000,
            accel_scale: 4,
        }
    }
}

/// Proxy for an LSM6DSOX on an I2C bus.
#[derive(Debug)]
pub struct Lsm6dsox<C> {
    proxy: DeviceProxy<C>,
    bus: I2c,
    config: Lsm6dsoxConfig,
}

impl<C: Channel> Lsm6dsox<C> {
    /// Creates an IMU proxy that owns `channel`.
    pub const fn new(bus: I2c, config: Lsm6dsoxConfig, channel: C) -> Self {
        Self {
            proxy: DeviceProxy::new(Target::Lsm6dsox, DeviceAddress::I2c(config.address), channel),
            bus,
            config,
        }
    }

    /// Bus the IMU is attached to.
    pub const fn bus(&self) -> &I2c {
        &self.bus
    }

    /// Construction-time settings.
    pub const fn config(&self) -> &Lsm6dsoxConfig {
        &self.config
    }

    /// Angular rate in degrees/second.
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` on a failed reply, or `MalformedResponse` when
    /// the payload is not a 3-vector.
    pub fn read_gyro(&mut self) -> Result<[f64; 3]> {
        self.proxy.call("read_gyro")?.as_vector()
    }

    /// Alias for [`Lsm6dsox::read_gyro`].
    ///
    /// # Errors
    ///
    /// Same as [`Lsm6dsox::read_gyro`].
    pub fn gyro(&mut self) -> Result<[f64; 3]> {
        self.read_gyro()
    }

    /// Acceleration in gravity units (1 g = 9.81 m/s²).
    ///
    /// # Errors
    ///
    /// Returns `DeviceCommandFailed` on a failed reply, or `MalformedResponse` when
    /// the payload is not a 3-vector.
    pub fn read_accel(&mut self) -> Result<[f64; 3]> {
        self.proxy.call("read_accel")?.as_vector()
    }

    /// Alias for [`Lsm6dsox::read_accel`].
    ///
    /// # Errors
    ///
    /// Same as [`Lsm6dsox::read_accel`].
    pub fn accel(&mut self) -> Result<[f64; 3]> {
        self.read_accel()
    }
}

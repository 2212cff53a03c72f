//! Driver for the Microchip MCP9800/02 I2C temperature sensor.
//!
//! ```
//! # use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! use mcp9800::{Mcp9800, Resolution};
//!
//! # let i2c = I2cMock::new(&[
//! #     I2cTransaction::write(0x48, vec![0x01]),
//! #     I2cTransaction::read(0x48, vec![0x00]),
//! #     I2cTransaction::write(0x48, vec![0x01, 0x60]),
//! #     I2cTransaction::write(0x48, vec![0x00]),
//! #     I2cTransaction::read(0x48, vec![0x19, 0x80]),
//! # ]);
//! let mut sensor = Mcp9800::with_default_address(i2c);
//! sensor.set_resolution(Resolution::Bits12)?;
//! assert_eq!(sensor.read_temp_c()?, 25.5);
//! # sensor.release().done();
//! # Ok::<(), mcp9800::Error<embedded_hal_mock::MockError>>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

#[macro_use]
mod fmt;

mod address;
mod error;
pub mod mcp9800;
pub mod register;
pub mod thermometer;

pub use self::{
    address::Address,
    error::{Error, Result},
    mcp9800::Mcp9800,
    register::{AlertMode, AlertPolarity, Config, FaultQueue, PowerMode, Register, Resolution},
    thermometer::{to_float, to_temperature, Temperature, Thermometer},
};

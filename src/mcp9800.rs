//! Implementation for the MCP9800/02 temperature sensor.

use embedded_hal::blocking::i2c::{Read, Write};

use crate::{
    address::Address,
    error::Result,
    register::{AlertMode, AlertPolarity, Config, FaultQueue, PowerMode, Register, Resolution},
    thermometer::{self, Temperature, Thermometer},
};

/// Driver for a single MCP9800/02 on an I2C bus.
///
/// Nothing but the address is kept between calls. Every configuration change re-reads the live
/// register before writing it back.
#[derive(Debug)]
pub struct Mcp9800<I2C> {
    i2c: I2C,
    address: Address,
}

impl<I2C> Mcp9800<I2C> {
    #[inline]
    pub const fn new(i2c: I2C, address: Address) -> Self {
        Self { i2c, address }
    }

    /// Creates a driver for the A0 part at `0x48`
    #[inline]
    pub const fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, Address::DEFAULT)
    }

    /// Returns the address the driver talks to. This is not auto detection.
    pub fn address(&self) -> Address {
        self.address
    }
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Destroys the driver and returns the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Mcp9800<I2C>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    /// Points the device at `reg`, then reads `buf.len()` bytes from it.
    fn read_register(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write(self.address.get(), &[reg.ptr()])?;
        self.i2c.read(self.address.get(), buf)?;
        trace!("read {}: {=[u8]:x}", reg, &*buf);
        Ok(())
    }

    fn write_register(&mut self, reg: Register, data: &[u8]) -> Result<(), E> {
        let mut buf = [0u8; 3];
        let len = data.len() + 1;
        buf[0] = reg.ptr();
        buf[1..len].copy_from_slice(data);

        trace!("write {}: {=[u8]:x}", reg, data);
        self.i2c.write(self.address.get(), &buf[..len])?;
        Ok(())
    }

    fn read_u16(&mut self, reg: Register) -> Result<u16, E> {
        let mut buf = [0u8; 2];
        self.read_register(reg, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Reads the configuration register
    pub fn read_config(&mut self) -> Result<Config, E> {
        let mut buf = [0u8; 1];
        self.read_register(Register::Config, &mut buf)?;
        Ok(Config(buf[0]))
    }

    /// Writes a new value to the configuration register. The value is not read back.
    pub fn write_config(&mut self, conf: Config) -> Result<(), E> {
        self.write_register(Register::Config, &[conf.bits()])
    }

    /// Read-modify-write of the configuration register
    fn modify_config(&mut self, f: impl FnOnce(Config) -> Config) -> Result<(), E> {
        let old = self.read_config()?;
        let new = f(old);
        debug!("config {} -> {}", old, new);
        self.write_config(new)
    }

    /// Sets the conversion resolution
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), E> {
        self.modify_config(|conf| conf.with_resolution(resolution))
    }

    /// Enables or disables shutdown mode
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), E> {
        self.modify_config(|conf| conf.with_power_mode(mode))
    }

    /// Switches the alert output between comparator and interrupt mode
    pub fn set_comparator_mode(&mut self, mode: AlertMode) -> Result<(), E> {
        self.modify_config(|conf| conf.with_alert_mode(mode))
    }

    pub fn set_alert_polarity(&mut self, polarity: AlertPolarity) -> Result<(), E> {
        self.modify_config(|conf| conf.with_alert_polarity(polarity))
    }

    pub fn set_fault_queue(&mut self, queue: FaultQueue) -> Result<(), E> {
        self.modify_config(|conf| conf.with_fault_queue(queue))
    }

    /// Starts a single conversion
    ///
    /// The device must already be in [`PowerMode::Shutdown`], otherwise it ignores the request.
    /// The result is available after [`Resolution::conversion_time`].
    pub fn one_shot(&mut self) -> Result<(), E> {
        self.modify_config(Config::with_one_shot)
    }

    /// Reads the raw temperature register
    pub fn read_temp(&mut self) -> Result<u16, E> {
        self.read_u16(Register::Temperature)
    }

    /// Reads the temperature in degrees Celsius
    pub fn read_temp_c(&mut self) -> Result<f32, E> {
        self.read_temp().map(thermometer::to_float)
    }

    /// Reads the temperature without going through floating point
    pub fn read_temperature(&mut self) -> Result<Temperature, E> {
        self.read_temp().map(thermometer::to_temperature)
    }

    /// Reads the hysteresis (T_HYST) register
    pub fn read_hysteresis(&mut self) -> Result<Temperature, E> {
        self.read_u16(Register::Hysteresis)
            .map(thermometer::from_limit_register)
    }

    /// Writes the hysteresis (T_HYST) register
    ///
    /// The register holds 0.5°C steps, finer values are floored.
    pub fn write_hysteresis(&mut self, temp: Temperature) -> Result<(), E> {
        let raw = thermometer::to_limit_register(temp);
        self.write_register(Register::Hysteresis, &raw.to_be_bytes())
    }

    /// Reads the limit-set (T_SET) register
    pub fn read_limit(&mut self) -> Result<Temperature, E> {
        self.read_u16(Register::Limit)
            .map(thermometer::from_limit_register)
    }

    /// Writes the limit-set (T_SET) register
    ///
    /// The register holds 0.5°C steps, finer values are floored.
    pub fn write_limit(&mut self, temp: Temperature) -> Result<(), E> {
        let raw = thermometer::to_limit_register(temp);
        self.write_register(Register::Limit, &raw.to_be_bytes())
    }
}

impl<I2C, E> Thermometer for Mcp9800<I2C>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    type Error = crate::Error<E>;

    async fn read(&mut self) -> core::result::Result<Temperature, Self::Error> {
        self.read_temperature()
    }
}

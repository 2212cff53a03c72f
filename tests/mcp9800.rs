use std::io::ErrorKind;

use embedded_hal_mock::{
    i2c::{Mock as I2cMock, Transaction as I2cTransaction},
    MockError,
};
use mcp9800::{
    Address, AlertMode, AlertPolarity, Config, Error, FaultQueue, Mcp9800, PowerMode,
    Resolution, Temperature, Thermometer,
};

const ADDR: u8 = 0x48;

/// Expectations for reading the configuration register
fn config_read(value: u8) -> [I2cTransaction; 2] {
    [
        I2cTransaction::write(ADDR, vec![0x01]),
        I2cTransaction::read(ADDR, vec![value]),
    ]
}

fn config_write(value: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![0x01, value])
}

fn read_modify_write(old: u8, new: u8) -> Vec<I2cTransaction> {
    let mut v = Vec::from(config_read(old));
    v.push(config_write(new));
    v
}

#[test]
fn address_round_trip_without_bus() {
    let i2c = I2cMock::new(&[]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    assert_eq!(sensor.address(), Address::DEFAULT);

    sensor.set_address(Address(0x4D));
    assert_eq!(sensor.address().get(), 0x4D);

    // Not validated
    sensor.set_address(Address(0xFF));
    assert_eq!(sensor.address(), Address(0xFF));

    sensor.release().done();
}

#[test]
fn transactions_use_configured_address() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(0x4D, vec![0x01]),
        I2cTransaction::read(0x4D, vec![0x42]),
    ]);
    let mut sensor = Mcp9800::new(i2c, Address::ALTERNATE);
    assert_eq!(sensor.read_config().unwrap(), Config(0x42));
    sensor.release().done();
}

#[test]
fn write_config_is_single_transaction() {
    let i2c = I2cMock::new(&[config_write(0b0110_0001)]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.write_config(Config(0b0110_0001)).unwrap();
    sensor.release().done();
}

#[test]
fn set_resolution_preserves_other_bits() {
    let i2c = I2cMock::new(&read_modify_write(0b1000_0110, 0b1100_0110));
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.set_resolution(Resolution::Bits11).unwrap();
    sensor.release().done();
}

#[test]
fn set_resolution_clears_old_value() {
    let i2c = I2cMock::new(&read_modify_write(0b0110_0000, 0b0000_0000));
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.set_resolution(Resolution::Bits9).unwrap();
    sensor.release().done();
}

#[test]
fn one_shot_ors_bit_7() {
    let i2c = I2cMock::new(&read_modify_write(0b0110_0001, 0b1110_0001));
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.one_shot().unwrap();
    sensor.release().done();
}

#[test]
fn power_down_then_up_restores_bit_0() {
    let original = 0b0101_0110;
    let mut expectations = read_modify_write(original, 0b0101_0111);
    expectations.extend(read_modify_write(0b0101_0111, original));

    let i2c = I2cMock::new(&expectations);
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.set_power_mode(PowerMode::Shutdown).unwrap();
    sensor.set_power_mode(PowerMode::PowerUp).unwrap();
    sensor.release().done();
}

#[test]
fn alert_configuration() {
    let mut expectations = read_modify_write(0b0000_0000, 0b0000_0010);
    expectations.extend(read_modify_write(0b0000_0010, 0b0000_0110));
    expectations.extend(read_modify_write(0b0000_0110, 0b0001_1110));

    let i2c = I2cMock::new(&expectations);
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.set_comparator_mode(AlertMode::Interrupt).unwrap();
    sensor.set_alert_polarity(AlertPolarity::ActiveHigh).unwrap();
    sensor.set_fault_queue(FaultQueue::Six).unwrap();
    sensor.release().done();
}

#[test]
fn failed_read_skips_write() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x01]),
        I2cTransaction::read(ADDR, vec![0x00]).with_error(MockError::Io(ErrorKind::Other)),
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    let err = sensor.set_power_mode(PowerMode::Shutdown).unwrap_err();
    assert!(matches!(err, Error::Bus(MockError::Io(ErrorKind::Other))));
    sensor.release().done();
}

#[test]
fn nack_on_pointer_write() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x00]).with_error(MockError::Io(ErrorKind::Other))
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    assert!(sensor.read_temp_c().is_err());
    sensor.release().done();
}

#[test]
fn read_temp_is_big_endian() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x00]),
        I2cTransaction::read(ADDR, vec![0x19, 0x80]),
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    assert_eq!(sensor.read_temp().unwrap(), 0x1980);
    sensor.release().done();
}

#[test]
fn read_temp_c_negative() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x00]),
        I2cTransaction::read(ADDR, vec![0xE0, 0x00]),
        I2cTransaction::write(ADDR, vec![0x00]),
        I2cTransaction::read(ADDR, vec![0xFF, 0x80]),
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    assert_eq!(sensor.read_temp_c().unwrap(), -32.0);
    assert_eq!(sensor.read_temperature().unwrap(), Temperature::from_num(-0.5));
    sensor.release().done();
}

#[test]
fn limit_and_hysteresis() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x03, 0x50, 0x00]),
        I2cTransaction::write(ADDR, vec![0x02, 0x4B, 0x00]),
        I2cTransaction::write(ADDR, vec![0x03]),
        I2cTransaction::read(ADDR, vec![0x50, 0x00]),
        I2cTransaction::write(ADDR, vec![0x02]),
        I2cTransaction::read(ADDR, vec![0xF5, 0x80]),
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    sensor.write_limit(Temperature::from_num(80)).unwrap();
    sensor.write_hysteresis(Temperature::from_num(75.25)).unwrap();
    assert_eq!(sensor.read_limit().unwrap(), Temperature::from_num(80));
    assert_eq!(sensor.read_hysteresis().unwrap(), Temperature::from_num(-10.5));
    sensor.release().done();
}

#[test]
fn thermometer_trait() {
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x00]),
        I2cTransaction::read(ADDR, vec![0x19, 0x80]),
    ]);
    let mut sensor = Mcp9800::with_default_address(i2c);
    let temp = futures::executor::block_on(sensor.read()).unwrap();
    assert_eq!(temp, Temperature::from_num(25.5));
    sensor.release().done();
}

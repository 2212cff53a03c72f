//! Temperature sensor interface

use fixed::types::I28F4;

/// I28F4 is a fixed point number with 4 fractional bits and 28 integer bits.
/// This gives us a precision of 0.0625 degrees Celsius, the finest step the sensor reports.
pub type Temperature = I28F4;

#[allow(async_fn_in_trait)]
pub trait Thermometer {
    type Error;

    /// Read the temperature in degrees Celsius
    async fn read(&mut self) -> Result<Temperature, Self::Error>;
}

/// Converts a raw temperature register value to a [`Temperature`].
///
/// The high byte is the signed integer part, the top nibble of the low byte the fraction. The low
/// nibble is zero at every resolution and is dropped.
#[inline]
pub fn to_temperature(raw: u16) -> Temperature {
    let value = i16::from_be_bytes(raw.to_be_bytes());
    Temperature::from_bits(i32::from(value >> 4))
}

/// Converts a raw temperature register value to degrees Celsius.
///
/// `0x1980` is 25.5°C, `0xE000` is -32°C.
#[inline]
pub fn to_float(raw: u16) -> f32 {
    to_temperature(raw).to_num()
}

/// Decodes a 9-bit limit register (T_HYST or T_SET). Only the 0.5°C bit of the low byte is used.
#[inline]
pub(crate) fn from_limit_register(raw: u16) -> Temperature {
    to_temperature(raw & 0xFF80)
}

/// Encodes a temperature into the 9-bit limit register format.
///
/// The value is floored to the 0.5°C grid and saturated to the register range of
/// -128°C..=127.5°C.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_limit_register(temp: Temperature) -> u16 {
    // Arithmetic shift floors towards negative infinity
    let halves = (temp.to_bits() >> 3).clamp(-256, 255) as i16;
    u16::from_be_bytes((halves << 7).to_be_bytes())
}

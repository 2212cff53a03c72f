/// The I2C bus address of a sensor.
///
/// Only the low 7 bits go on the bus. No validation is done, any byte can be stored.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address(pub u8);

impl Address {
    /// MCP9800/02A0
    pub const DEFAULT: Self = Self(0x48);
    /// MCP9800/02A5
    pub const ALTERNATE: Self = Self(0x4D);

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Address {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{:#04X}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=u8:#04X}", self.0);
    }
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C transfer failed. This is what an absent or unresponsive sensor looks like: the HAL
    /// reports a NACK, an arbitration loss or its own timeout.
    Bus(E),
}

impl<E> Error<E> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::Bus(_) => "I2C bus error",
        }
    }

    /// Returns the underlying bus error
    pub fn into_bus(self) -> E {
        match self {
            Error::Bus(e) => e,
        }
    }
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}

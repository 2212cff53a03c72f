//! Register map and configuration register layout of the MCP9800/02.

/// Register pointer values
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Ambient temperature, read only
    Temperature = 0x00,
    Config = 0x01,
    /// Temperature hysteresis (T_HYST)
    Hysteresis = 0x02,
    /// Temperature limit-set (T_SET)
    Limit = 0x03,
}

impl Register {
    #[inline]
    pub const fn ptr(self) -> u8 {
        self as u8
    }
}

// Config register bit offsets
pub const ONE_SHOT: u8 = 7;
pub const ADC_RES: u8 = 5;
pub const FAULT_QUEUE: u8 = 3;
pub const ALERT_POL: u8 = 2;
pub const INT_MODE: u8 = 1;
pub const SHUTDOWN: u8 = 0;

/// Value of the configuration register
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct Config(pub u8);

static_assertions::assert_eq_size!(Config, u8);

impl Config {
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Replaces the `mask`-wide field at `offset`, leaving every other bit alone.
    #[inline]
    const fn with_field(self, offset: u8, mask: u8, value: u8) -> Self {
        Self((self.0 & !(mask << offset)) | ((value & mask) << offset))
    }

    #[inline]
    const fn field(self, offset: u8, mask: u8) -> u8 {
        (self.0 >> offset) & mask
    }

    pub const fn resolution(self) -> Resolution {
        Resolution::from_bits(self.field(ADC_RES, 0b11))
    }
    #[must_use]
    pub const fn with_resolution(self, resolution: Resolution) -> Self {
        self.with_field(ADC_RES, 0b11, resolution.to_bits())
    }

    pub const fn fault_queue(self) -> FaultQueue {
        FaultQueue::from_bits(self.field(FAULT_QUEUE, 0b11))
    }
    #[must_use]
    pub const fn with_fault_queue(self, queue: FaultQueue) -> Self {
        self.with_field(FAULT_QUEUE, 0b11, queue as u8)
    }

    pub const fn alert_polarity(self) -> AlertPolarity {
        if self.field(ALERT_POL, 1) == 1 {
            AlertPolarity::ActiveHigh
        } else {
            AlertPolarity::ActiveLow
        }
    }
    #[must_use]
    pub const fn with_alert_polarity(self, polarity: AlertPolarity) -> Self {
        self.with_field(ALERT_POL, 1, polarity as u8)
    }

    pub const fn alert_mode(self) -> AlertMode {
        if self.field(INT_MODE, 1) == 1 {
            AlertMode::Interrupt
        } else {
            AlertMode::Comparator
        }
    }
    #[must_use]
    pub const fn with_alert_mode(self, mode: AlertMode) -> Self {
        self.with_field(INT_MODE, 1, mode as u8)
    }

    pub const fn power_mode(self) -> PowerMode {
        if self.field(SHUTDOWN, 1) == 1 {
            PowerMode::Shutdown
        } else {
            PowerMode::PowerUp
        }
    }
    #[must_use]
    pub const fn with_power_mode(self, mode: PowerMode) -> Self {
        self.with_field(SHUTDOWN, 1, mode as u8)
    }

    /// Sets the one-shot bit. It self-clears on the device once the conversion is done, so it is
    /// only ever set here, never cleared.
    #[must_use]
    pub const fn with_one_shot(self) -> Self {
        Self(self.0 | (1 << ONE_SHOT))
    }
    pub const fn is_one_shot(self) -> bool {
        self.field(ONE_SHOT, 1) == 1
    }
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "Config({:#010b})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Config {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Config({=u8:#010b})", self.0);
    }
}

/// ADC conversion resolution
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 0.5°C
    Bits9,
    /// 0.25°C
    Bits10,
    /// 0.125°C
    Bits11,
    /// 0.0625°C
    Bits12,
}

impl Resolution {
    const fn from_bits(bits: u8) -> Resolution {
        match bits & 0b11 {
            0b00 => Resolution::Bits9,
            0b01 => Resolution::Bits10,
            0b10 => Resolution::Bits11,
            _ => Resolution::Bits12,
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            Resolution::Bits9 => 0b00,
            Resolution::Bits10 => 0b01,
            Resolution::Bits11 => 0b10,
            Resolution::Bits12 => 0b11,
        }
    }

    /// Returns the maximum conversion time in milliseconds
    pub const fn conversion_time(self) -> u16 {
        match self {
            Resolution::Bits9 => 30,
            Resolution::Bits10 => 60,
            Resolution::Bits11 => 120,
            Resolution::Bits12 => 240,
        }
    }
}

/// Number of consecutive faults before the alert output asserts
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    One = 0b00,
    Two = 0b01,
    Four = 0b10,
    Six = 0b11,
}

impl FaultQueue {
    const fn from_bits(bits: u8) -> FaultQueue {
        match bits & 0b11 {
            0b00 => FaultQueue::One,
            0b01 => FaultQueue::Two,
            0b10 => FaultQueue::Four,
            _ => FaultQueue::Six,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPolarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    Comparator = 0,
    Interrupt = 1,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Continuous conversion
    PowerUp = 0,
    Shutdown = 1,
}

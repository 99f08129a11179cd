//! This module defines the value types carried by registers and status bytes.
//! These types are meant to be agnostic of the transaction layer.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

use crate::radio::{
    register::{RfSetup, SetupAw},
    Pipe, RangeError,
};

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
///
/// Stored in bits 1-2 of the `RF_SETUP` register. Bit 0 of that register is
/// never touched when the level is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -18 dBm | -6 dBm | -12 dBm |
    Min,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -12 dBm | 0 dBm | -4 dBm |
    Low,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -6 dBm | 3 dBm | 1 dBm |
    Medium,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | 0 dBm | 7 dBm | 4 dBm |
    Max,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::Medium => defmt::write!(fmt, "Medium"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// The level's ordinal (0 for [`PaLevel::Min`] through 3 for [`PaLevel::Max`]).
    pub const fn ordinal(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 1,
            PaLevel::Medium => 2,
            PaLevel::Max => 3,
        }
    }

    const fn from_ordinal(value: u8) -> Self {
        match value {
            0 => PaLevel::Min,
            1 => PaLevel::Low,
            2 => PaLevel::Medium,
            _ => PaLevel::Max,
        }
    }

    /// Extract the level from a raw `RF_SETUP` byte.
    pub const fn decode(raw: u8) -> Self {
        Self::from_ordinal(RfSetup::RF_PWR.decode(raw))
    }

    /// Compose a new `RF_SETUP` byte from the `current` one and a level ordinal.
    ///
    /// Fails with [`RangeError`] if `ordinal` is greater than 3.
    pub const fn encode(current: u8, ordinal: u8) -> core::result::Result<u8, RangeError> {
        RfSetup::RF_PWR.encode(current, ordinal)
    }
}

impl TryFrom<u8> for PaLevel {
    type Error = RangeError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        RfSetup::RF_PWR.check(value)?;
        Ok(Self::from_ordinal(value))
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::Medium => write!(f, "Medium"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// `RF_DR_LOW` and `RF_DR_HIGH` in the `RF_SETUP` register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// `EN_CRC` and `CRCO` in the `CONFIG` register.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            8 => CrcLength::Bit8,
            12 => CrcLength::Bit16,
            // CRCO is meaningless while EN_CRC is clear
            _ => CrcLength::Disabled,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The number of bytes in every RX and TX address.
///
/// Configured chip-wide by the `SETUP_AW` register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressWidth {
    /// 3 byte addresses
    Bytes3,
    /// 4 byte addresses
    Bytes4,
    /// 5 byte addresses (the chip's reset value)
    #[default]
    Bytes5,
}

impl AddressWidth {
    /// The number of address bytes.
    pub const fn len(self) -> usize {
        match self {
            AddressWidth::Bytes3 => 3,
            AddressWidth::Bytes4 => 4,
            AddressWidth::Bytes5 => 5,
        }
    }

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressWidth::Bytes3 => 1,
            AddressWidth::Bytes4 => 2,
            AddressWidth::Bytes5 => 3,
        }
    }

    /// Interpret a raw `AW` field value. `0b00` is illegal on the chip and is
    /// treated like the reset value.
    pub(crate) const fn from_bits(value: u8) -> Self {
        match SetupAw::AW.decode(value) {
            1 => AddressWidth::Bytes3,
            2 => AddressWidth::Bytes4,
            _ => AddressWidth::Bytes5,
        }
    }
}

impl TryFrom<usize> for AddressWidth {
    type Error = RangeError;

    fn try_from(value: usize) -> core::result::Result<Self, Self::Error> {
        match value {
            3 => Ok(AddressWidth::Bytes3),
            4 => Ok(AddressWidth::Bytes4),
            5 => Ok(AddressWidth::Bytes5),
            _ => Err(RangeError {
                value: value.min(u8::MAX as usize) as u8,
                max: 5,
            }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AddressWidth {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} bytes", self.len())
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} bytes", self.len())
    }
}

/// A snapshot of the chip's STATUS register.
///
/// The chip shifts this byte out while it receives the opcode of every SPI
/// command, so a fresh snapshot is the result of every transaction.
///
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (the `MAX_RT` event).
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The raw `RX_P_NO` field: the pipe number of the payload at the top of
    /// the RX FIFO, `7` if the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_p_no: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_p_no: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_p_no(),
            self.tx_full()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub const IRQ_MASK: u8 = 0x70;

    /// The pipe that received the payload at the top of the RX FIFO.
    ///
    /// Returns [`None`] if the RX FIFO is empty.
    pub fn rx_pipe(&self) -> Option<Pipe> {
        Pipe::try_from(self.rx_p_no()).ok()
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_p_no: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_p_no(),
            self.tx_full()
        )
    }
}

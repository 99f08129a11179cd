use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};

use super::{
    bit_field::RangeError,
    register::{registers, Register, RxAddr, RxAddrLow, MAX_REGISTER_WIDTH},
};
use crate::AddressWidth;

/// One of the chip's six receive pipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pipe {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl Pipe {
    pub const ALL: [Pipe; 6] = [Pipe::P0, Pipe::P1, Pipe::P2, Pipe::P3, Pipe::P4, Pipe::P5];

    pub const fn number(self) -> u8 {
        match self {
            Pipe::P0 => 0,
            Pipe::P1 => 1,
            Pipe::P2 => 2,
            Pipe::P3 => 3,
            Pipe::P4 => 4,
            Pipe::P5 => 5,
        }
    }

    /// Pipes 0 and 1 own a full address. Pipes 2-5 only own the low byte.
    pub const fn is_full(self) -> bool {
        matches!(self, Pipe::P0 | Pipe::P1)
    }

    /// The `RX_ADDR_Px` register of this pipe.
    pub const fn rx_addr_register(self) -> u8 {
        registers::RX_ADDR_P0 + self.number()
    }

    /// The `RX_PW_Px` register of this pipe.
    pub const fn rx_pw_register(self) -> u8 {
        registers::RX_PW_P0 + self.number()
    }
}

impl TryFrom<u8> for Pipe {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Pipe::P0),
            1 => Ok(Pipe::P1),
            2 => Ok(Pipe::P2),
            3 => Ok(Pipe::P3),
            4 => Ok(Pipe::P4),
            5 => Ok(Pipe::P5),
            _ => Err(RangeError { value, max: 5 }),
        }
    }
}

impl Display for Pipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "pipe {}", self.number())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pipe {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "pipe {=u8}", self.number())
    }
}

/// An error to describe a rejected pipe address update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The given address does not have the configured address width.
    WidthMismatch { expected: usize, actual: usize },
    /// A full address was given for a pipe that only owns its low byte.
    NotFullPipe(Pipe),
    /// A single low byte was given for a pipe that owns a full address.
    NotPartialPipe(Pipe),
}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AddressError::WidthMismatch { expected, actual } => {
                write!(f, "address has {actual} bytes, expected {expected}")
            }
            AddressError::NotFullPipe(pipe) => write!(f, "{pipe} only owns a low byte"),
            AddressError::NotPartialPipe(pipe) => write!(f, "{pipe} owns a full address"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

#[cfg(feature = "defmt")]
impl defmt::Format for AddressError {
    fn format(&self, fmt: defmt::Formatter) {
        match *self {
            AddressError::WidthMismatch { expected, actual } => {
                defmt::write!(fmt, "address has {=usize} bytes, expected {=usize}", actual, expected)
            }
            AddressError::NotFullPipe(pipe) => defmt::write!(fmt, "{} only owns a low byte", pipe),
            AddressError::NotPartialPipe(pipe) => {
                defmt::write!(fmt, "{} owns a full address", pipe)
            }
        }
    }
}

/// The effective address of a pipe, most significant byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address {
    bytes: [u8; MAX_REGISTER_WIDTH],
    len: usize,
}

impl Address {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_REGISTER_WIDTH);
        let mut out = [0; MAX_REGISTER_WIDTH];
        out[..len].copy_from_slice(&bytes[..len]);
        Self { bytes: out, len }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Deref for Address {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:#x}", self.as_slice())
    }
}

/// A borrowed view of one pipe's address slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeAddress<'a> {
    /// The pipe owns all of its address bytes.
    Full(&'a Register<RxAddr>),
    /// The pipe owns only its low byte; the rest is read from `base`.
    Partial {
        base: Pipe,
        low: &'a Register<RxAddrLow>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PartialSlot {
    /// index into `PipeAddresses::full`
    base: usize,
    low: Register<RxAddrLow>,
}

/// The receive addresses of all six pipes.
///
/// Pipes 2-5 never store a copy of their base's bytes. Their effective
/// address is composed from pipe 1 on every read, so changing pipe 1 changes
/// pipes 2-5 immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeAddresses {
    width: AddressWidth,
    full: [Register<RxAddr>; 2],
    partial: [PartialSlot; 4],
}

impl PipeAddresses {
    /// Every address starts zeroed.
    pub fn new(width: AddressWidth) -> Self {
        let full = [
            Register::new(Pipe::P0.rx_addr_register()),
            Register::new(Pipe::P1.rx_addr_register()),
        ];
        let base = Pipe::P1.number() as usize;
        let partial = [Pipe::P2, Pipe::P3, Pipe::P4, Pipe::P5].map(|pipe| PartialSlot {
            base,
            low: Register::new(pipe.rx_addr_register()),
        });
        Self {
            width,
            full,
            partial,
        }
    }

    pub fn width(&self) -> AddressWidth {
        self.width
    }

    /// Change the number of address bytes in use.
    ///
    /// Narrowing keeps the least significant bytes of each full address.
    pub fn set_width(&mut self, width: AddressWidth) {
        self.width = width;
    }

    pub fn slot(&self, pipe: Pipe) -> PipeAddress<'_> {
        match pipe {
            Pipe::P0 | Pipe::P1 => PipeAddress::Full(&self.full[pipe.number() as usize]),
            _ => {
                let slot = &self.partial[pipe.number() as usize - 2];
                PipeAddress::Partial {
                    base: Pipe::ALL[slot.base],
                    low: &slot.low,
                }
            }
        }
    }

    /// The pipe whose high-order bytes `pipe` borrows, if any.
    pub fn base_of(&self, pipe: Pipe) -> Option<Pipe> {
        match self.slot(pipe) {
            PipeAddress::Full(_) => None,
            PipeAddress::Partial { base, .. } => Some(base),
        }
    }

    /// The effective address of `pipe`, computed from the current state.
    pub fn get(&self, pipe: Pipe) -> Address {
        match self.slot(pipe) {
            PipeAddress::Full(reg) => Address::from_bytes(reg.address_bytes(self.width)),
            PipeAddress::Partial { base, low } => {
                let mut out = Address::from_bytes(
                    self.full[base.number() as usize].address_bytes(self.width),
                );
                if let Some(last) = out.bytes[..out.len].last_mut() {
                    *last = low.value();
                }
                out
            }
        }
    }

    /// Replace the full address of pipe 0 or pipe 1.
    ///
    /// `bytes` is most significant byte first and must match the configured width.
    pub fn set_full(&mut self, pipe: Pipe, bytes: &[u8]) -> Result<(), AddressError> {
        if !pipe.is_full() {
            return Err(AddressError::NotFullPipe(pipe));
        }
        self.full[pipe.number() as usize].set_address(self.width, bytes)
    }

    /// Replace the low byte of one of pipes 2-5.
    pub fn set_low_byte(&mut self, pipe: Pipe, byte: u8) -> Result<(), AddressError> {
        if pipe.is_full() {
            return Err(AddressError::NotPartialPipe(pipe));
        }
        self.partial[pipe.number() as usize - 2].low.set_value(byte);
        Ok(())
    }

    /// The bytes held in the chip's `RX_ADDR_Px` register for `pipe`.
    ///
    /// This is the whole address for pipes 0-1 and only the low byte for pipes 2-5.
    pub(crate) fn register_bytes(&self, pipe: Pipe) -> &[u8] {
        match pipe {
            Pipe::P0 | Pipe::P1 => self.full[pipe.number() as usize].address_bytes(self.width),
            _ => self.partial[pipe.number() as usize - 2].low.bytes(),
        }
    }

    pub(crate) fn register_bytes_mut(&mut self, pipe: Pipe) -> &mut [u8] {
        match pipe {
            Pipe::P0 | Pipe::P1 => {
                self.full[pipe.number() as usize].address_bytes_mut(self.width)
            }
            _ => self.partial[pipe.number() as usize - 2].low.bytes_mut(),
        }
    }
}

impl Default for PipeAddresses {
    fn default() -> Self {
        Self::new(AddressWidth::default())
    }
}

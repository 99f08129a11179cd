//! A module to encapsulate all things related to the chip's SPI interface.
mod bit_field;
pub use bit_field::{BitField, Field, RangeError};

mod command;
pub use command::{commands, Command};

pub mod register;
pub use register::{AddressRegister, ByteRegister, Register, RegisterKind, RegisterMap};

mod pipe;
pub use pipe::{Address, AddressError, Pipe, PipeAddress, PipeAddresses};

mod pump;
pub use pump::SpiPump;

mod rf24;
pub use rf24::{Nrf24Error, MAX_PAYLOAD_SIZE, RF24};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
mod details;
mod payload;
mod registers;

use super::{
    bit_field::RangeError, commands, pipe::AddressError, register::RegisterMap, Command, SpiPump,
};
use crate::StatusFlags;

/// The largest payload the chip's FIFOs accept (in bytes).
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// How long the chip needs after power is applied before it accepts commands.
const POWER_ON_SETTLE_NS: u32 = 5_000_000;

/// An collection of error types to describe hardware malfunctions
/// and rejected parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    ///
    /// When returned by [`RF24::new()`], the radio could not be initialized.
    Gpo(DO),
    /// A value did not fit in its register field. Nothing was written.
    OutOfRange(RangeError),
    /// A pipe address could not be updated. Nothing was written.
    Address(AddressError),
    /// A payload longer than [`MAX_PAYLOAD_SIZE`] was given. Nothing was sent.
    PayloadTooLong(usize),
}

impl<SPI, DO> From<RangeError> for Nrf24Error<SPI, DO> {
    fn from(value: RangeError) -> Self {
        Nrf24Error::OutOfRange(value)
    }
}

impl<SPI, DO> From<AddressError> for Nrf24Error<SPI, DO> {
    fn from(value: AddressError) -> Self {
        Nrf24Error::Address(value)
    }
}

/// A handle to one nRF24L01 transceiver.
///
/// It owns the SPI bus, the CE and CSN pins, the in-memory [`RegisterMap`]
/// and the STATUS byte returned by the latest opcode exchange.
///
/// The chip only accepts some commands in some modes (for example,
/// `W_REGISTER` only in power down or standby). These preconditions are
/// documented per method and are not checked here.
pub struct RF24<SPI, DO> {
    pump: SpiPump<SPI, DO>,
    ce_pin: DO,
    regs: RegisterMap,
}

impl<SPI, DO> RF24<SPI, DO>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
{
    /// Take ownership of the `spi` bus and the `ce_pin` and `csn_pin` lines.
    ///
    /// CE is driven low (standby), CSN is driven high (idle), then `delay` is
    /// used to wait 5 milliseconds for the chip to settle after power on.
    /// A pin failure is returned as [`Nrf24Error::Gpo`] and no handle is made.
    ///
    /// The register map starts zeroed; use [`RF24::fetch()`] to load values
    /// from the chip.
    pub fn new(
        spi: SPI,
        mut ce_pin: DO,
        mut csn_pin: DO,
        delay: &mut impl DelayNs,
    ) -> Result<Self, Nrf24Error<SPI::Error, DO::Error>> {
        ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        delay.delay_ns(POWER_ON_SETTLE_NS);
        #[cfg(feature = "defmt")]
        defmt::trace!("radio settled");
        Ok(Self {
            pump: SpiPump::new(spi, csn_pin),
            ce_pin,
            regs: RegisterMap::new(),
        })
    }

    /// Give back the SPI bus, the CE pin and the CSN pin (in that order).
    pub fn free(self) -> (SPI, DO, DO) {
        let (spi, csn_pin) = self.pump.release();
        (spi, self.ce_pin, csn_pin)
    }

    /// Drive the CE pin high (enter RX or TX mode from standby).
    pub fn ce_high(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    /// Drive the CE pin low (return to standby).
    pub fn ce_low(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    /// The STATUS byte returned by the latest opcode exchange.
    ///
    /// A transaction that fails after its opcode was exchanged still updates it.
    pub fn status(&self) -> StatusFlags {
        self.pump.status()
    }

    pub fn registers(&self) -> &RegisterMap {
        &self.regs
    }

    /// Edit the in-memory registers. Nothing is sent to the chip until
    /// [`RF24::store()`] or one of the address writers is called.
    pub fn registers_mut(&mut self) -> &mut RegisterMap {
        &mut self.regs
    }

    /// Run one command. The pump keeps its STATUS byte as the latest snapshot.
    fn dispatch(
        &mut self,
        command: Command,
        payload: Option<&mut [u8]>,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.pump.pump(command, payload)
    }

    /// Read the register at `address` (`R_REGISTER`).
    ///
    /// `buf` is exchanged in place and holds the register's value (most
    /// significant byte first) on return. Only the low 5 bits of `address`
    /// are used. Executable in any mode.
    pub fn read_register(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::ReadRegister(address), Some(buf))
    }

    /// Write `buf` (most significant byte first) to the register at `address`
    /// (`W_REGISTER`).
    ///
    /// `buf` is exchanged in place, so it holds whatever the chip shifted out
    /// on return. Only the low 5 bits of `address` are used.
    /// Executable in power down or standby modes only.
    pub fn write_register(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::WriteRegister(address), Some(buf))
    }

    /// Flush the TX FIFO (`FLUSH_TX`). Used in TX mode.
    pub fn flush_tx(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::FlushTx, None)
    }

    /// Flush the RX FIFO (`FLUSH_RX`). Used in RX mode.
    ///
    /// Should not be executed while an acknowledgement is being transmitted.
    pub fn flush_rx(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::FlushRx, None)
    }

    /// Fetch the STATUS register with a `NOP` command.
    pub fn refresh_status(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::Nop, None)
    }

    /// Send `ACTIVATE` followed by `0x73`.
    ///
    /// On nRF24L01 (non-plus) chips this toggles the `R_RX_PL_WID`,
    /// `W_ACK_PAYLOAD` and `W_TX_PAYLOAD_NOACK` commands on or off.
    /// The chip keeps that state; every call sends the same two bytes.
    /// Executable in power down or standby modes only.
    pub fn toggle_activate(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let mut key = [commands::ACTIVATE_KEY];
        self.dispatch(Command::Activate, Some(&mut key))
    }
}

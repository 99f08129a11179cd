use embedded_hal::{digital::OutputPin, spi::SpiBus};

use super::{Command, Nrf24Error};
use crate::StatusFlags;

/// Drives one SPI transaction per command.
///
/// Owns the SPI bus and the chip's CSN line. The chip expects multi-byte
/// values least significant byte first, while every buffer handed to
/// [`SpiPump::pump()`] is held most significant byte first, so payload bytes
/// are clocked out from the last index down to the first.
///
/// The STATUS byte clocked in with each opcode is kept as [`SpiPump::status()`].
pub struct SpiPump<SPI, DO> {
    spi: SPI,
    csn: DO,
    status: StatusFlags,
}

impl<SPI, DO> SpiPump<SPI, DO>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
{
    pub fn new(spi: SPI, csn: DO) -> Self {
        Self {
            spi,
            csn,
            status: StatusFlags::default(),
        }
    }

    /// Give back the SPI bus and the CSN pin.
    pub fn release(self) -> (SPI, DO) {
        (self.spi, self.csn)
    }

    /// The STATUS byte returned by the latest opcode exchange.
    ///
    /// Updated as soon as the opcode is exchanged, even if the rest of that
    /// transaction fails.
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    /// Execute `command` as one transaction.
    ///
    /// The byte received while the opcode is sent is the chip's STATUS register
    /// and is returned as the transaction's result. If `payload` is given,
    /// each byte is exchanged in place (index `len - 1` first, index `0` last).
    ///
    /// CSN is released on every exit path, including pin and bus errors.
    /// The first failing exchange stops the transaction.
    pub fn pump(
        &mut self,
        command: Command,
        payload: Option<&mut [u8]>,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        if let Err(e) = self.csn.set_low() {
            // the line state is unknown; try to leave the bus idle
            let _ = self.csn.set_high();
            return Err(Nrf24Error::Gpo(e));
        }
        let exchanged = self.exchange(command.opcode(), payload);
        let flushed = self.spi.flush();
        let released = self.csn.set_high();

        exchanged.map_err(Nrf24Error::Spi)?;
        flushed.map_err(Nrf24Error::Spi)?;
        released.map_err(Nrf24Error::Gpo)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("{} -> {}", command, self.status);
        Ok(self.status)
    }

    fn exchange(&mut self, opcode: u8, payload: Option<&mut [u8]>) -> Result<(), SPI::Error> {
        self.status = StatusFlags::from_bits(self.transfer(opcode)?);
        if let Some(buf) = payload {
            for byte in buf.iter_mut().rev() {
                *byte = self.transfer(*byte)?;
            }
        }
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, SPI::Error> {
        let mut word = [byte];
        self.spi.transfer_in_place(&mut word)?;
        Ok(word[0])
    }
}

use embedded_hal::{digital::OutputPin, spi::SpiBus};

use super::{Nrf24Error, MAX_PAYLOAD_SIZE, RF24};
use crate::{
    radio::{Command, Pipe},
    StatusFlags,
};

impl<SPI, DO> RF24<SPI, DO>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
{
    fn check_payload_len(len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if len > MAX_PAYLOAD_SIZE {
            return Err(Nrf24Error::PayloadTooLong(len));
        }
        Ok(())
    }

    /// Send `buf` with `command` without letting the exchange clobber the caller's data.
    fn send_payload(
        &mut self,
        command: Command,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        Self::check_payload_len(buf.len())?;
        let mut out = [0u8; MAX_PAYLOAD_SIZE];
        let out = &mut out[..buf.len()];
        out.copy_from_slice(buf);
        self.dispatch(command, Some(out))
    }

    /// Read the payload at the top of the RX FIFO (`R_RX_PAYLOAD`) into `buf`.
    ///
    /// The payload is removed from the RX FIFO. Used in RX mode.
    /// Fails with [`Nrf24Error::PayloadTooLong`] if `buf` is longer than
    /// [`MAX_PAYLOAD_SIZE`].
    pub fn read_payload(
        &mut self,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        Self::check_payload_len(buf.len())?;
        self.dispatch(Command::ReadRxPayload, Some(buf))
    }

    /// Put `buf` in the TX FIFO (`W_TX_PAYLOAD`). Used in TX mode.
    ///
    /// Fails with [`Nrf24Error::PayloadTooLong`] if `buf` is longer than
    /// [`MAX_PAYLOAD_SIZE`].
    pub fn write_payload(
        &mut self,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.send_payload(Command::WriteTxPayload, buf)
    }

    /// Put `buf` in the TX FIFO and disable auto-ack for that packet
    /// (`W_TX_PAYLOAD_NOACK`).
    ///
    /// Requires `EN_DYN_ACK` in the `FEATURE` register (and
    /// [`RF24::toggle_activate()`] on non-plus chips). Used in TX mode.
    pub fn write_payload_no_ack(
        &mut self,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.send_payload(Command::WriteTxPayloadNoAck, buf)
    }

    /// Queue `buf` to be sent with the next ACK packet on `pipe`
    /// (`W_ACK_PAYLOAD`).
    ///
    /// Requires `EN_ACK_PAY` in the `FEATURE` register (and
    /// [`RF24::toggle_activate()`] on non-plus chips). Used in RX mode.
    pub fn write_ack_payload(
        &mut self,
        pipe: Pipe,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.send_payload(Command::WriteAckPayload(pipe.number()), buf)
    }

    /// The width of the payload at the top of the RX FIFO (`R_RX_PL_WID`).
    ///
    /// Only meaningful with dynamic payloads enabled. The chip may report a
    /// value greater than [`MAX_PAYLOAD_SIZE`] for a corrupt packet;
    /// the value is returned as is.
    pub fn read_payload_width(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        let mut buf = [0u8];
        self.dispatch(Command::ReadRxPayloadWidth, Some(&mut buf))?;
        Ok(buf[0])
    }

    /// Send the last transmitted payload again while CE is high
    /// (`REUSE_TX_PL`). Used in TX mode.
    pub fn reuse_tx_payload(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.dispatch(Command::ReuseTxPayload, None)
    }
}

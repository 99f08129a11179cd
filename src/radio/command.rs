/// SPI command opcodes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    /// The register address occupies the low 5 bits of `R_REGISTER` and `W_REGISTER`.
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const ACTIVATE: u8 = 0x50;
    /// The data byte that must follow [`ACTIVATE`].
    pub const ACTIVATE_KEY: u8 = 0x73;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// The SPI commands understood by the chip.
///
/// Each command is the first byte clocked out in a transaction.
/// Any data for the command follows it in the same transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read a register. Only the low 5 bits of the address are used.
    ReadRegister(u8),
    /// Write a register. Only the low 5 bits of the address are used.
    ///
    /// Executable in power down or standby modes only.
    WriteRegister(u8),
    /// Read 1-32 bytes of RX payload. The payload is deleted from the RX FIFO.
    ReadRxPayload,
    /// Write 1-32 bytes of TX payload.
    WriteTxPayload,
    /// Flush the TX FIFO.
    FlushTx,
    /// Flush the RX FIFO.
    FlushRx,
    /// Reuse the last transmitted payload.
    ReuseTxPayload,
    /// Toggle the features listed under [`Command::ReadRxPayloadWidth`],
    /// [`Command::WriteAckPayload`] and [`Command::WriteTxPayloadNoAck`].
    /// Must be followed by [`commands::ACTIVATE_KEY`].
    Activate,
    /// Read the width of the payload at the top of the RX FIFO.
    ReadRxPayloadWidth,
    /// Write a payload to be sent with the next ACK packet on the given pipe (0-5).
    WriteAckPayload(u8),
    /// Write a TX payload and disable auto-ack for that packet.
    WriteTxPayloadNoAck,
    /// No operation. Returns the STATUS register.
    Nop,
}

impl Command {
    /// The opcode byte clocked out for this command.
    pub const fn opcode(&self) -> u8 {
        match *self {
            Command::ReadRegister(address) => {
                commands::R_REGISTER | (address & commands::REGISTER_MASK)
            }
            Command::WriteRegister(address) => {
                commands::W_REGISTER | (address & commands::REGISTER_MASK)
            }
            Command::ReadRxPayload => commands::R_RX_PAYLOAD,
            Command::WriteTxPayload => commands::W_TX_PAYLOAD,
            Command::FlushTx => commands::FLUSH_TX,
            Command::FlushRx => commands::FLUSH_RX,
            Command::ReuseTxPayload => commands::REUSE_TX_PL,
            Command::Activate => commands::ACTIVATE,
            Command::ReadRxPayloadWidth => commands::R_RX_PL_WID,
            Command::WriteAckPayload(pipe) => commands::W_ACK_PAYLOAD | (pipe & 7),
            Command::WriteTxPayloadNoAck => commands::W_TX_PAYLOAD_NO_ACK,
            Command::Nop => commands::NOP,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match *self {
            Command::ReadRegister(address) => {
                defmt::write!(fmt, "R_REGISTER({=u8:#x})", address)
            }
            Command::WriteRegister(address) => {
                defmt::write!(fmt, "W_REGISTER({=u8:#x})", address)
            }
            Command::ReadRxPayload => defmt::write!(fmt, "R_RX_PAYLOAD"),
            Command::WriteTxPayload => defmt::write!(fmt, "W_TX_PAYLOAD"),
            Command::FlushTx => defmt::write!(fmt, "FLUSH_TX"),
            Command::FlushRx => defmt::write!(fmt, "FLUSH_RX"),
            Command::ReuseTxPayload => defmt::write!(fmt, "REUSE_TX_PL"),
            Command::Activate => defmt::write!(fmt, "ACTIVATE"),
            Command::ReadRxPayloadWidth => defmt::write!(fmt, "R_RX_PL_WID"),
            Command::WriteAckPayload(pipe) => defmt::write!(fmt, "W_ACK_PAYLOAD({=u8})", pipe),
            Command::WriteTxPayloadNoAck => defmt::write!(fmt, "W_TX_PAYLOAD_NOACK"),
            Command::Nop => defmt::write!(fmt, "NOP"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{commands, Command};

    #[test]
    fn register_opcodes() {
        assert_eq!(Command::ReadRegister(0x06).opcode(), 0x06);
        assert_eq!(Command::WriteRegister(0x06).opcode(), 0x26);
        assert_eq!(Command::WriteRegister(0x1D).opcode(), 0x3D);
        // only 5 address bits fit in the opcode
        assert_eq!(Command::ReadRegister(0xFF).opcode(), 0x1F);
        assert_eq!(Command::WriteRegister(0x20).opcode(), commands::W_REGISTER);
    }

    #[test]
    fn fixed_opcodes() {
        assert_eq!(Command::ReadRxPayload.opcode(), 0x61);
        assert_eq!(Command::WriteTxPayload.opcode(), 0xA0);
        assert_eq!(Command::FlushTx.opcode(), 0xE1);
        assert_eq!(Command::FlushRx.opcode(), 0xE2);
        assert_eq!(Command::ReuseTxPayload.opcode(), 0xE3);
        assert_eq!(Command::Activate.opcode(), 0x50);
        assert_eq!(Command::ReadRxPayloadWidth.opcode(), 0x60);
        assert_eq!(Command::WriteTxPayloadNoAck.opcode(), 0xB0);
        assert_eq!(Command::Nop.opcode(), 0xFF);
    }

    #[test]
    fn ack_payload_opcode() {
        assert_eq!(Command::WriteAckPayload(0).opcode(), 0xA8);
        assert_eq!(Command::WriteAckPayload(5).opcode(), 0xAD);
    }
}

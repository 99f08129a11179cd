use embedded_hal::{digital::OutputPin, spi::SpiBus};

use super::{Nrf24Error, RF24};
use crate::{
    radio::{
        bit_field::RangeError,
        pipe::{Address, Pipe},
        register::{ByteRegister, Register, RegisterMap, MAX_REGISTER_WIDTH},
        Command,
    },
    AddressWidth, PaLevel, StatusFlags,
};

impl<SPI, DO> RF24<SPI, DO>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
{
    /// Load one register from the chip into the register map.
    ///
    /// `select` picks the register, for example `|regs| &mut regs.config`.
    /// The map is only updated if the transaction succeeds.
    pub fn fetch<K, F>(
        &mut self,
        select: F,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>>
    where
        K: ByteRegister,
        F: Fn(&mut RegisterMap) -> &mut Register<K>,
    {
        let mut reg = *select(&mut self.regs);
        let command = Command::ReadRegister(reg.address());
        let status = self.dispatch(command, Some(reg.bytes_mut()))?;
        *select(&mut self.regs) = reg;
        Ok(status)
    }

    /// Write one register of the register map to the chip.
    ///
    /// Executable in power down or standby modes only.
    pub fn store<K, F>(
        &mut self,
        select: F,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>>
    where
        K: ByteRegister,
        F: Fn(&mut RegisterMap) -> &mut Register<K>,
    {
        // the exchange overwrites the buffer with what the chip shifts out
        let mut out = *select(&mut self.regs);
        self.dispatch(Command::WriteRegister(out.address()), Some(out.bytes_mut()))
    }

    /// Read a register from the chip, apply `edit` and write the result back.
    ///
    /// The register map is left unchanged if `edit` fails or if either
    /// transaction fails. Executable in power down or standby modes only.
    ///
    /// ```ignore
    /// radio.modify(|regs| &mut regs.setup_retr, |reg| reg.set_auto_retries(5, 15))?;
    /// ```
    pub fn modify<K, F, E>(
        &mut self,
        select: F,
        edit: E,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>>
    where
        K: ByteRegister,
        F: Fn(&mut RegisterMap) -> &mut Register<K>,
        E: FnOnce(&mut Register<K>) -> Result<(), RangeError>,
    {
        let mut reg = *select(&mut self.regs);
        self.dispatch(Command::ReadRegister(reg.address()), Some(reg.bytes_mut()))?;
        edit(&mut reg)?;
        let mut out = reg;
        let command = Command::WriteRegister(reg.address());
        let status = self.dispatch(command, Some(out.bytes_mut()))?;
        *select(&mut self.regs) = reg;
        Ok(status)
    }

    /// Load every single-byte register and every address from the chip.
    pub fn fetch_all(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.fetch(|r| &mut r.config)?;
        self.fetch(|r| &mut r.en_aa)?;
        self.fetch(|r| &mut r.en_rxaddr)?;
        self.fetch(|r| &mut r.setup_aw)?;
        let width = self.regs.setup_aw.address_width();
        self.regs.rx_addresses.set_width(width);
        self.fetch(|r| &mut r.setup_retr)?;
        self.fetch(|r| &mut r.rf_ch)?;
        self.fetch(|r| &mut r.rf_setup)?;
        self.fetch(|r| &mut r.status)?;
        self.fetch(|r| &mut r.observe_tx)?;
        self.fetch(|r| &mut r.rpd)?;
        for pipe in Pipe::ALL {
            self.read_rx_address(pipe)?;
        }
        self.read_tx_address()?;
        for n in 0..Pipe::ALL.len() {
            self.fetch(|r| &mut r.rx_pw[n])?;
        }
        self.fetch(|r| &mut r.fifo_status)?;
        self.fetch(|r| &mut r.dynpd)?;
        self.fetch(|r| &mut r.feature)
    }

    /// Read the power amplifier level from the chip's `RF_SETUP` register.
    pub fn pa_level(&mut self) -> Result<PaLevel, Nrf24Error<SPI::Error, DO::Error>> {
        self.fetch(|r| &mut r.rf_setup)?;
        Ok(self.regs.rf_setup.pa_level())
    }

    /// Set the power amplifier level. The LNA bit and all other `RF_SETUP`
    /// bits keep their current value on the chip.
    pub fn set_pa_level(
        &mut self,
        level: PaLevel,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.modify(
            |r| &mut r.rf_setup,
            |reg| {
                reg.set_pa_level(level);
                Ok(())
            },
        )
    }

    /// Set the width of every RX and TX address on the chip and in the
    /// pipe address table.
    pub fn set_address_width(
        &mut self,
        width: AddressWidth,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let status = self.modify(
            |r| &mut r.setup_aw,
            |reg| {
                reg.set_address_width(width);
                Ok(())
            },
        )?;
        self.regs.rx_addresses.set_width(width);
        Ok(status)
    }

    /// Write the address of `pipe` from the register map to the chip.
    ///
    /// Pipes 0-1 send the whole address; pipes 2-5 send only their low byte.
    pub fn write_rx_address(
        &mut self,
        pipe: Pipe,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let mut buf = [0u8; MAX_REGISTER_WIDTH];
        let bytes = self.regs.rx_addresses.register_bytes(pipe);
        let len = bytes.len();
        buf[..len].copy_from_slice(bytes);
        self.dispatch(
            Command::WriteRegister(pipe.rx_addr_register()),
            Some(&mut buf[..len]),
        )
    }

    /// Read the address of `pipe` from the chip into the register map and
    /// return its effective address.
    ///
    /// For pipes 2-5 only the low byte is read; the high-order bytes come
    /// from pipe 1 in the register map.
    pub fn read_rx_address(
        &mut self,
        pipe: Pipe,
    ) -> Result<Address, Nrf24Error<SPI::Error, DO::Error>> {
        let mut buf = [0u8; MAX_REGISTER_WIDTH];
        let len = self.regs.rx_addresses.register_bytes(pipe).len();
        self.dispatch(
            Command::ReadRegister(pipe.rx_addr_register()),
            Some(&mut buf[..len]),
        )?;
        self.regs
            .rx_addresses
            .register_bytes_mut(pipe)
            .copy_from_slice(&buf[..len]);
        Ok(self.regs.rx_addresses.get(pipe))
    }

    /// Write the TX address from the register map to the chip.
    pub fn write_tx_address(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let width = self.regs.rx_addresses.width();
        let mut buf = [0u8; MAX_REGISTER_WIDTH];
        let bytes = self.regs.tx_address.address_bytes(width);
        let len = bytes.len();
        buf[..len].copy_from_slice(bytes);
        self.dispatch(
            Command::WriteRegister(self.regs.tx_address.address()),
            Some(&mut buf[..len]),
        )
    }

    /// Read the TX address from the chip into the register map.
    pub fn read_tx_address(&mut self) -> Result<Address, Nrf24Error<SPI::Error, DO::Error>> {
        let width = self.regs.rx_addresses.width();
        let mut buf = [0u8; MAX_REGISTER_WIDTH];
        let len = width.len();
        self.dispatch(
            Command::ReadRegister(self.regs.tx_address.address()),
            Some(&mut buf[..len]),
        )?;
        self.regs.tx_address.set_address(width, &buf[..len])?;
        Ok(self.regs.tx_address_value())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::{
        radio::{
            commands,
            register::{registers, SetupRetr},
            Nrf24Error, Pipe, RangeError,
        },
        spi_test_expects,
        test::{csn_expects, mk_radio, pump_expects, MockRadio},
        AddressWidth, CrcLength, FifoState, PaLevel,
    };
    use std::{vec, vec::Vec};

    #[test]
    fn fetch_and_store() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0x0Eu8, 0x0Cu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0x0Eu8, 0u8],
            ),
            (vec![registers::RX_PW_P0 + 3, 0u8], vec![0x0Eu8, 0x20u8]),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(3), &spi_expectations);
        radio.fetch(|r| &mut r.config).unwrap();
        assert_eq!(radio.registers().config.crc_length(), CrcLength::Bit16);
        radio.registers_mut().config.set_power(true);
        radio.store(|r| &mut r.config).unwrap();
        // storing keeps the map's value
        assert_eq!(radio.registers().config.value(), 0x0E);
        radio.fetch(|r| &mut r.rx_pw[3]).unwrap();
        assert_eq!(radio.registers().rx_pw[3].payload_width(), 32);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn modify_out_of_range() {
        let spi_expectations = spi_test_expects![(
            vec![registers::SETUP_RETR, 0u8],
            vec![0x0Eu8, 0x03u8]
        ),];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(1), &spi_expectations);
        let result = radio.modify(|r| &mut r.setup_retr, |reg| reg.set(SetupRetr::ARD, 16));
        assert!(matches!(
            result,
            Err(Nrf24Error::OutOfRange(RangeError { value: 16, max: 15 }))
        ));
        // nothing was written and the map is unchanged
        assert_eq!(radio.registers().setup_retr.value(), 0);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn modify_auto_retries() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_RETR, 0u8], vec![0x0Eu8, 0x03u8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0x0Eu8, 0u8],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(2), &spi_expectations);
        radio
            .modify(|r| &mut r.setup_retr, |reg| reg.set_auto_retries(5, 15))
            .unwrap();
        assert_eq!(radio.registers().setup_retr.value(), 0x5F);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn pa_level() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0u8], vec![0x0Eu8, 0x07u8]),
            (vec![registers::RF_SETUP, 0x07u8], vec![0x0Eu8, 0x07u8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x03u8],
                vec![0x0Eu8, 0u8],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(3), &spi_expectations);
        assert_eq!(radio.pa_level().unwrap(), PaLevel::Max);
        radio.set_pa_level(PaLevel::Low).unwrap();
        // the LNA bit is untouched
        assert_eq!(radio.registers().rf_setup.value(), 0x03);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn address_width() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_AW, 0u8], vec![0x0Eu8, 0x03u8]),
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 0x01u8],
                vec![0x0Eu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P0 + 1 | commands::W_REGISTER, 0xC3u8, 0xB2, 0xA1],
                vec![0x0Eu8, 0, 0, 0],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(3), &spi_expectations);
        radio.set_address_width(AddressWidth::Bytes3).unwrap();
        assert_eq!(
            radio.registers().rx_addresses.width(),
            AddressWidth::Bytes3
        );
        radio
            .registers_mut()
            .rx_addresses
            .set_full(Pipe::P1, &[0xA1, 0xB2, 0xC3])
            .unwrap();
        radio.write_rx_address(Pipe::P1).unwrap();
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn rx_addresses() {
        let spi_expectations = spi_test_expects![
            // pipe 1 goes out least significant byte first
            (
                vec![0x2Bu8, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA],
                vec![0x0Eu8, 0, 0, 0, 0, 0],
            ),
            // pipe 2 only sends its own low byte
            (vec![0x2Cu8, 0x42], vec![0x0Eu8, 0]),
            (vec![0x0Fu8, 0], vec![0x0Eu8, 0x99]),
            (
                vec![0x0Au8, 0, 0, 0, 0, 0],
                vec![0x0Eu8, 0x11, 0x22, 0x33, 0x44, 0x55],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(4), &spi_expectations);
        let addresses = &mut radio.registers_mut().rx_addresses;
        addresses.set_low_byte(Pipe::P2, 0x42).unwrap();
        addresses
            .set_full(Pipe::P1, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE])
            .unwrap();
        radio.write_rx_address(Pipe::P1).unwrap();
        radio.write_rx_address(Pipe::P2).unwrap();

        let address = radio.read_rx_address(Pipe::P5).unwrap();
        assert_eq!(address.as_slice(), &[0xAAu8, 0xBB, 0xCC, 0xDD, 0x99]);
        let address = radio.read_rx_address(Pipe::P0).unwrap();
        assert_eq!(address.as_slice(), &[0x55u8, 0x44, 0x33, 0x22, 0x11]);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn tx_address() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::TX_ADDR | commands::W_REGISTER, 5u8, 4, 3, 2, 1],
                vec![0x0Eu8, 0, 0, 0, 0, 0],
            ),
            (
                vec![registers::TX_ADDR, 0u8, 0, 0, 0, 0],
                vec![0x0Eu8, 0xE5, 0xE4, 0xE3, 0xE2, 0xE1],
            ),
        ];
        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(2), &spi_expectations);
        radio
            .registers_mut()
            .tx_address
            .set_address(AddressWidth::Bytes5, &[1, 2, 3, 4, 5])
            .unwrap();
        radio.write_tx_address().unwrap();
        let address = radio.read_tx_address().unwrap();
        assert_eq!(&*address, &[0xE1u8, 0xE2, 0xE3, 0xE4, 0xE5]);
        assert_eq!(radio.registers().tx_address_value(), address);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn fetch_all_registers() {
        let mut spi_expectations = Vec::new();
        let responses = [0x0Cu8, 0x3F, 0x03, 0x01, 0x5F, 0x4C, 0x07, 0x0E, 0x00, 0x00];
        for (address, response) in (registers::CONFIG..=registers::RPD).zip(responses) {
            spi_expectations.extend(pump_expects(&[address, 0], &[0x0E, response]));
        }
        // 3 byte addresses from here on
        spi_expectations.extend(pump_expects(&[0x0A, 0, 0, 0], &[0x0E, 1, 2, 3]));
        spi_expectations.extend(pump_expects(&[0x0B, 0, 0, 0], &[0x0E, 0xC3, 0xB2, 0xA1]));
        for n in 2..6u8 {
            spi_expectations.extend(pump_expects(&[0x0A + n, 0], &[0x0E, 0x10 + n]));
        }
        spi_expectations.extend(pump_expects(&[registers::TX_ADDR, 0, 0, 0], &[0x0E, 3, 2, 1]));
        for n in 0..6u8 {
            spi_expectations.extend(pump_expects(&[registers::RX_PW_P0 + n, 0], &[0x0E, 0x20]));
        }
        spi_expectations.extend(pump_expects(&[registers::FIFO_STATUS, 0], &[0x0E, 0x11]));
        spi_expectations.extend(pump_expects(&[registers::DYNPD, 0], &[0x0E, 0]));
        spi_expectations.extend(pump_expects(&[registers::FEATURE, 0], &[0x0E, 0]));

        let MockRadio(mut radio, mut spi, mut ce_pin, mut csn_pin) =
            mk_radio(&[], &csn_expects(26), &spi_expectations);
        radio.fetch_all().unwrap();
        let regs = radio.registers();
        assert_eq!(regs.config.crc_length(), CrcLength::Bit16);
        assert_eq!(regs.setup_aw.address_width(), AddressWidth::Bytes3);
        assert_eq!(regs.rf_ch.channel(), 76);
        assert_eq!(regs.rf_setup.pa_level(), PaLevel::Max);
        assert_eq!(&*regs.rx_addresses.get(Pipe::P0), &[3u8, 2, 1]);
        assert_eq!(&*regs.rx_addresses.get(Pipe::P1), &[0xA1u8, 0xB2, 0xC3]);
        assert_eq!(&*regs.rx_addresses.get(Pipe::P4), &[0xA1u8, 0xB2, 0x14]);
        assert_eq!(&*regs.tx_address_value(), &[1u8, 2, 3]);
        assert!(regs.rx_pw.iter().all(|reg| reg.payload_width() == 32));
        assert_eq!(regs.fifo_status.fifo_state(true), FifoState::Empty);
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }
}

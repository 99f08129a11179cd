use embedded_hal::{digital::OutputPin, spi::SpiBus};

use super::RF24;
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::{
    register::{EnAa, EnRxAddr, Feature, FifoStatus, SetupRetr},
    Pipe,
};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO> RF24<SPI, DO>
where
    SPI: SpiBus<u8>,
    DO: OutputPin,
{
    /// Print the register map as last fetched (see [`RF24::fetch_all()`]).
    ///
    /// Uses `defmt` with the `defmt` feature, `std` with the `std` feature,
    /// and does nothing otherwise. No SPI transaction is made.
    #[cfg(feature = "defmt")]
    pub fn print_details(&self) {
        let regs = &self.regs;
        let channel = regs.rf_ch.channel();
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", regs.rf_setup.data_rate());
        defmt::println!("RF Power Amplifier________{}", regs.rf_setup.pa_level());
        defmt::println!("RF LNA enabled____________{=bool}", regs.rf_setup.lna_enabled());
        defmt::println!("CRC Length________________{}", regs.config.crc_length());
        defmt::println!("Address length____________{}", regs.rx_addresses.width());
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            regs.setup_retr.get(SetupRetr::ARD) as u16 * 250 + 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            regs.setup_retr.get(SetupRetr::ARC)
        );
        defmt::println!(
            "Re-use TX FIFO____________{=bool}",
            regs.fifo_status.is_set(FifoStatus::TX_REUSE)
        );
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            regs.observe_tx.lost_packets()
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            regs.observe_tx.retries()
        );
        let irq = regs.config.irq_enabled();
        defmt::println!("IRQ on Data Ready_________{=bool}", irq.rx_dr());
        defmt::println!("    Data Ready triggered__{=bool}", self.status().rx_dr());
        defmt::println!("IRQ on Data Sent__________{=bool}", irq.tx_ds());
        defmt::println!("    Data Sent triggered___{=bool}", self.status().tx_ds());
        defmt::println!("IRQ on Data Fail__________{=bool}", irq.tx_df());
        defmt::println!("    Data Fail triggered___{=bool}", self.status().tx_df());
        defmt::println!("TX FIFO___________________{}", regs.fifo_status.fifo_state(true));
        defmt::println!("RX FIFO___________________{}", regs.fifo_status.fifo_state(false));
        defmt::println!(
            "Ask no ACK allowed________{=bool}",
            regs.feature.is_set(Feature::EN_DYN_ACK)
        );
        defmt::println!(
            "ACK Payload enabled_______{=bool}",
            regs.feature.is_set(Feature::EN_ACK_PAY)
        );
        defmt::println!("Dynamic Payloads__________0b{=0..8}", regs.dynpd.value());
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", regs.en_aa.value());
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if regs.config.is_rx() { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", regs.config.is_powered());
        defmt::println!("TX address________________{}", regs.tx_address_value());
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in Pipe::ALL {
            let is_open = regs.en_rxaddr.is_set(EnRxAddr::pipe(pipe));
            defmt::println!(
                "{} ({=istr}, auto-ack {=bool}) bound to {}",
                pipe,
                if is_open { opened } else { closed },
                regs.en_aa.is_set(EnAa::pipe(pipe)),
                regs.rx_addresses.get(pipe),
            );
        }
    }

    /// Print the register map as last fetched (see [`RF24::fetch_all()`]).
    ///
    /// Uses `defmt` with the `defmt` feature, `std` with the `std` feature,
    /// and does nothing otherwise. No SPI transaction is made.
    #[cfg(all(feature = "std", not(feature = "defmt")))]
    pub fn print_details(&self) {
        let regs = &self.regs;
        let channel = regs.rf_ch.channel();
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", regs.rf_setup.data_rate());
        std::println!("RF Power Amplifier________{}", regs.rf_setup.pa_level());
        std::println!("RF LNA enabled____________{}", regs.rf_setup.lna_enabled());
        std::println!("CRC Length________________{}", regs.config.crc_length());
        std::println!("Address length____________{}", regs.rx_addresses.width());
        std::println!(
            "Auto retry delay__________{} microseconds",
            regs.setup_retr.get(SetupRetr::ARD) as u16 * 250 + 250
        );
        std::println!(
            "Auto retry attempts_______{} maximum",
            regs.setup_retr.get(SetupRetr::ARC)
        );
        std::println!(
            "Re-use TX FIFO____________{}",
            regs.fifo_status.is_set(FifoStatus::TX_REUSE)
        );
        std::println!(
            "Packets lost\n    on current channel____{}",
            regs.observe_tx.lost_packets()
        );
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            regs.observe_tx.retries()
        );
        let irq = regs.config.irq_enabled();
        std::println!("IRQ on Data Ready_________{}", irq.rx_dr());
        std::println!("    Data Ready triggered__{}", self.status().rx_dr());
        std::println!("IRQ on Data Sent__________{}", irq.tx_ds());
        std::println!("    Data Sent triggered___{}", self.status().tx_ds());
        std::println!("IRQ on Data Fail__________{}", irq.tx_df());
        std::println!("    Data Fail triggered___{}", self.status().tx_df());
        std::println!("TX FIFO___________________{}", regs.fifo_status.fifo_state(true));
        std::println!("RX FIFO___________________{}", regs.fifo_status.fifo_state(false));
        std::println!(
            "Ask no ACK allowed________{}",
            regs.feature.is_set(Feature::EN_DYN_ACK)
        );
        std::println!(
            "ACK Payload enabled_______{}",
            regs.feature.is_set(Feature::EN_ACK_PAY)
        );
        std::println!("Dynamic Payloads__________{:#010b}", regs.dynpd.value());
        std::println!("Auto Acknowledgment_______{:#010b}", regs.en_aa.value());
        std::println!(
            "Primary Mode______________{}X",
            if regs.config.is_rx() { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", regs.config.is_powered());
        std::println!(
            "TX address________________{:02X?}",
            regs.tx_address_value().as_slice()
        );
        for pipe in Pipe::ALL {
            std::println!(
                "{pipe} ({}, auto-ack {}) bound to {:02X?}",
                if regs.en_rxaddr.is_set(EnRxAddr::pipe(pipe)) {
                    " open "
                } else {
                    "closed"
                },
                regs.en_aa.is_set(EnAa::pipe(pipe)),
                regs.rx_addresses.get(pipe).as_slice(),
            );
        }
    }

    /// Print the register map as last fetched (see [`RF24::fetch_all()`]).
    ///
    /// Uses `defmt` with the `defmt` feature, `std` with the `std` feature,
    /// and does nothing otherwise. No SPI transaction is made.
    #[cfg(not(any(feature = "defmt", feature = "std")))]
    pub fn print_details(&self) {}
}

#[cfg(test)]
mod test {
    use crate::test::{mk_radio, MockRadio};

    #[test]
    fn print_without_transactions() {
        let MockRadio(radio, mut spi, mut ce_pin, mut csn_pin) = mk_radio(&[], &[], &[]);
        radio.print_details();
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }
}

//! The chip's register map as typed descriptors.
//!
//! Every register is a [`Register<K>`]: a fixed 5-bit address plus the raw
//! bytes last read from or written to the chip. The zero-sized kind `K`
//! carries the register's width and scopes its bit fields, so a
//! [`Field<K>`] can only be applied to the register it describes.

use core::marker::PhantomData;

use super::{
    bit_field::{Field, RangeError},
    commands,
    pipe::{Address, AddressError, Pipe, PipeAddresses},
};
use crate::{AddressWidth, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};

/// Register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// The widest register (the 5 byte address registers).
pub const MAX_REGISTER_WIDTH: usize = 5;

/// A marker type naming one kind of register.
pub trait RegisterKind: Copy + Eq + core::fmt::Debug {
    /// The number of raw bytes the register holds.
    const WIDTH: usize;
}

/// A single-byte register made of bit fields.
pub trait ByteRegister: RegisterKind {}

/// A multi-byte address register (`RX_ADDR_P0`, `RX_ADDR_P1`, `TX_ADDR`).
pub trait AddressRegister: RegisterKind {}

macro_rules! byte_registers {
    ($( $(#[$meta:meta])* $kind:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq)]
            pub struct $kind;

            impl RegisterKind for $kind {
                const WIDTH: usize = 1;
            }

            impl ByteRegister for $kind {}
        )+
    };
}

macro_rules! address_registers {
    ($( $(#[$meta:meta])* $kind:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq)]
            pub struct $kind;

            impl RegisterKind for $kind {
                const WIDTH: usize = MAX_REGISTER_WIDTH;
            }

            impl AddressRegister for $kind {}
        )+
    };
}

byte_registers! {
    /// `CONFIG`: IRQ masks, CRC scheme, power and RX/TX control.
    Config,
    /// `EN_AA`: auto-acknowledgement per pipe.
    EnAa,
    /// `EN_RXADDR`: enabled RX pipes.
    EnRxAddr,
    /// `SETUP_AW`: address width.
    SetupAw,
    /// `SETUP_RETR`: automatic retransmission delay and count.
    SetupRetr,
    /// `RF_CH`: RF channel.
    RfCh,
    /// `RF_SETUP`: data rate, output power and test modes.
    RfSetup,
    /// `STATUS`: IRQ flags, RX pipe number and TX FIFO full flag.
    Status,
    /// `OBSERVE_TX`: lost packet and retransmission counters.
    ObserveTx,
    /// `RPD`: received power detector.
    Rpd,
    /// `RX_ADDR_P2` - `RX_ADDR_P5`: the low byte of a pipe address.
    RxAddrLow,
    /// `RX_PW_P0` - `RX_PW_P5`: static payload width per pipe.
    RxPw,
    /// `FIFO_STATUS`: TX and RX FIFO flags.
    FifoStatus,
    /// `DYNPD`: dynamic payload length per pipe.
    Dynpd,
    /// `FEATURE`: dynamic payloads, ACK payloads and no-ACK payloads.
    Feature,
}

address_registers! {
    /// `RX_ADDR_P0`, `RX_ADDR_P1`: a full pipe address.
    RxAddr,
    /// `TX_ADDR`: the address used for transmitting.
    TxAddr,
}

impl Config {
    pub const MASK_RX_DR: Field<Self> = Field::flag(6);
    pub const MASK_TX_DS: Field<Self> = Field::flag(5);
    pub const MASK_MAX_RT: Field<Self> = Field::flag(4);
    pub const EN_CRC: Field<Self> = Field::flag(3);
    pub const CRCO: Field<Self> = Field::flag(2);
    pub const PWR_UP: Field<Self> = Field::flag(1);
    pub const PRIM_RX: Field<Self> = Field::flag(0);
}

/// Generates the per-pipe flag accessor shared by `EN_AA`, `EN_RXADDR` and `DYNPD`.
macro_rules! pipe_flags {
    ($($kind:ident),+) => {
        $(
            impl $kind {
                /// The flag for the given `pipe`.
                pub const fn pipe(pipe: Pipe) -> Field<Self> {
                    Field::flag(pipe.number())
                }

                /// All six pipe flags.
                pub const ALL: Field<Self> = Field::new(0, 6);
            }
        )+
    };
}

pipe_flags!(EnAa, EnRxAddr, Dynpd);

impl SetupAw {
    pub const AW: Field<Self> = Field::new(0, 2);
}

impl SetupRetr {
    /// Auto retransmit delay, in steps of 250 µs.
    pub const ARD: Field<Self> = Field::new(4, 4);
    /// Auto retransmit count.
    pub const ARC: Field<Self> = Field::new(0, 4);
}

impl RfCh {
    pub const RF_CH: Field<Self> = Field::new(0, 7);
}

impl RfSetup {
    pub const CONT_WAVE: Field<Self> = Field::flag(7);
    pub const RF_DR_LOW: Field<Self> = Field::flag(5);
    pub const PLL_LOCK: Field<Self> = Field::flag(4);
    pub const RF_DR_HIGH: Field<Self> = Field::flag(3);
    pub const RF_PWR: Field<Self> = Field::new(1, 2);
    /// Obsolete on nRF24L01+; LNA gain on nRF24L01 and Si24R1.
    pub const LNA_HCURR: Field<Self> = Field::flag(0);
}

impl Status {
    pub const RX_DR: Field<Self> = Field::flag(6);
    pub const TX_DS: Field<Self> = Field::flag(5);
    pub const MAX_RT: Field<Self> = Field::flag(4);
    pub const RX_P_NO: Field<Self> = Field::new(1, 3);
    pub const TX_FULL: Field<Self> = Field::flag(0);
}

impl ObserveTx {
    pub const PLOS_CNT: Field<Self> = Field::new(4, 4);
    pub const ARC_CNT: Field<Self> = Field::new(0, 4);
}

impl Rpd {
    pub const RPD: Field<Self> = Field::flag(0);
}

impl RxPw {
    pub const RX_PW: Field<Self> = Field::new(0, 6);
}

impl FifoStatus {
    pub const TX_REUSE: Field<Self> = Field::flag(6);
    pub const TX_FULL: Field<Self> = Field::flag(5);
    pub const TX_EMPTY: Field<Self> = Field::flag(4);
    pub const RX_FULL: Field<Self> = Field::flag(1);
    pub const RX_EMPTY: Field<Self> = Field::flag(0);
}

impl Feature {
    pub const EN_DPL: Field<Self> = Field::flag(2);
    pub const EN_ACK_PAY: Field<Self> = Field::flag(1);
    pub const EN_DYN_ACK: Field<Self> = Field::flag(0);
}

/// A register descriptor: the register's address and its raw contents.
///
/// The address never changes after construction. Multi-byte values are held
/// most significant byte first; the command pump reverses them on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Register<K> {
    address: u8,
    raw: [u8; MAX_REGISTER_WIDTH],
    _kind: PhantomData<K>,
}

impl<K: RegisterKind> Register<K> {
    /// A descriptor for the register at `address` with all bits cleared.
    ///
    /// Only the low 5 bits of `address` are kept.
    pub const fn new(address: u8) -> Self {
        Self {
            address: address & commands::REGISTER_MASK,
            raw: [0; MAX_REGISTER_WIDTH],
            _kind: PhantomData,
        }
    }

    pub const fn address(&self) -> u8 {
        self.address
    }

    /// The number of raw bytes (fixed by the register kind).
    pub const fn width(&self) -> usize {
        K::WIDTH
    }

    pub fn bytes(&self) -> &[u8] {
        &self.raw[..K::WIDTH]
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.raw[..K::WIDTH]
    }
}

impl<K: ByteRegister> Register<K> {
    /// A descriptor for the register at `address` holding `value`.
    pub const fn with_value(address: u8, value: u8) -> Self {
        let mut raw = [0; MAX_REGISTER_WIDTH];
        raw[0] = value;
        Self {
            address: address & commands::REGISTER_MASK,
            raw,
            _kind: PhantomData,
        }
    }

    pub const fn value(&self) -> u8 {
        self.raw[0]
    }

    pub fn set_value(&mut self, value: u8) {
        self.raw[0] = value;
    }

    pub const fn get(&self, field: Field<K>) -> u8 {
        field.decode(self.raw[0])
    }

    /// Write `value` into `field`.
    ///
    /// On [`RangeError`] the register is left unmodified.
    pub fn set(&mut self, field: Field<K>, value: u8) -> Result<(), RangeError> {
        self.raw[0] = field.encode(self.raw[0], value)?;
        Ok(())
    }

    /// Is any bit of `flag` set?
    pub const fn is_set(&self, flag: Field<K>) -> bool {
        self.raw[0] & flag.mask() != 0
    }

    /// Set or clear every bit of `flag`.
    pub fn set_flag(&mut self, flag: Field<K>, enable: bool) {
        self.raw[0] = self.raw[0] & !flag.mask() | (enable as u8 * flag.mask());
    }
}

impl<K: AddressRegister> Register<K> {
    /// The address bytes in use for the given `width`.
    ///
    /// Narrower widths use the least significant bytes.
    pub fn address_bytes(&self, width: AddressWidth) -> &[u8] {
        &self.raw[MAX_REGISTER_WIDTH - width.len()..]
    }

    pub(crate) fn address_bytes_mut(&mut self, width: AddressWidth) -> &mut [u8] {
        &mut self.raw[MAX_REGISTER_WIDTH - width.len()..]
    }

    /// Replace the whole address. `bytes` must hold exactly `width` bytes,
    /// most significant byte first.
    pub fn set_address(&mut self, width: AddressWidth, bytes: &[u8]) -> Result<(), AddressError> {
        if bytes.len() != width.len() {
            return Err(AddressError::WidthMismatch {
                expected: width.len(),
                actual: bytes.len(),
            });
        }
        self.raw = [0; MAX_REGISTER_WIDTH];
        self.address_bytes_mut(width).copy_from_slice(bytes);
        Ok(())
    }
}

impl Register<Config> {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.value())
    }

    pub fn set_crc_length(&mut self, length: CrcLength) {
        self.raw[0] = self.raw[0] & !CrcLength::MASK | length.into_bits();
    }

    pub const fn is_powered(&self) -> bool {
        self.is_set(Config::PWR_UP)
    }

    pub fn set_power(&mut self, enable: bool) {
        self.set_flag(Config::PWR_UP, enable);
    }

    pub const fn is_rx(&self) -> bool {
        self.is_set(Config::PRIM_RX)
    }

    pub fn set_rx(&mut self, enable: bool) {
        self.set_flag(Config::PRIM_RX, enable);
    }

    /// The IRQ events that are reflected on the IRQ pin.
    ///
    /// A flag set in the returned value means the event is *not* masked.
    pub const fn irq_enabled(&self) -> StatusFlags {
        StatusFlags::from_bits(!self.value() & StatusFlags::IRQ_MASK)
    }

    /// Reflect (or mask) IRQ events on the IRQ pin.
    ///
    /// Events set in `events` are enabled, all others are masked.
    pub fn set_irq_enabled(&mut self, events: StatusFlags) {
        self.raw[0] =
            self.raw[0] & !StatusFlags::IRQ_MASK | (!events.into_bits() & StatusFlags::IRQ_MASK);
    }
}

impl Register<SetupAw> {
    pub const fn address_width(&self) -> AddressWidth {
        AddressWidth::from_bits(self.value())
    }

    pub fn set_address_width(&mut self, width: AddressWidth) {
        self.raw[0] = self.raw[0] & !SetupAw::AW.mask() | width.into_bits();
    }
}

impl Register<SetupRetr> {
    /// Set the auto-retry `delay` (0-15, in 250 µs steps above 250 µs)
    /// and `count` (0-15).
    ///
    /// Nothing is changed if either value is out of range.
    pub fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), RangeError> {
        let value = SetupRetr::ARD.encode(self.raw[0], delay)?;
        self.raw[0] = SetupRetr::ARC.encode(value, count)?;
        Ok(())
    }
}

impl Register<RfCh> {
    pub const fn channel(&self) -> u8 {
        self.get(RfCh::RF_CH)
    }

    /// Fails with [`RangeError`] if `channel` is greater than 125.
    pub fn set_channel(&mut self, channel: u8) -> Result<(), RangeError> {
        if channel > 125 {
            return Err(RangeError {
                value: channel,
                max: 125,
            });
        }
        self.set(RfCh::RF_CH, channel)
    }
}

impl Register<RfSetup> {
    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::decode(self.value())
    }

    pub fn set_pa_level(&mut self, level: PaLevel) {
        // every level's ordinal fits the 2-bit field
        if let Ok(raw) = PaLevel::encode(self.raw[0], level.ordinal()) {
            self.raw[0] = raw;
        }
    }

    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.value())
    }

    pub fn set_data_rate(&mut self, data_rate: DataRate) {
        self.raw[0] = self.raw[0] & !DataRate::MASK | data_rate.into_bits();
    }

    pub const fn lna_enabled(&self) -> bool {
        self.is_set(RfSetup::LNA_HCURR)
    }

    pub fn set_lna(&mut self, enable: bool) {
        self.set_flag(RfSetup::LNA_HCURR, enable);
    }
}

impl Register<Status> {
    pub const fn flags(&self) -> StatusFlags {
        StatusFlags::from_bits(self.value())
    }
}

impl Register<ObserveTx> {
    /// Count of lost packets. Reset by writing `RF_CH`.
    pub const fn lost_packets(&self) -> u8 {
        self.get(ObserveTx::PLOS_CNT)
    }

    /// Count of retransmitted packets. Reset when a new payload is sent.
    pub const fn retries(&self) -> u8 {
        self.get(ObserveTx::ARC_CNT)
    }
}

impl Register<Rpd> {
    pub const fn carrier_detected(&self) -> bool {
        self.is_set(Rpd::RPD)
    }
}

impl Register<RxPw> {
    pub const fn payload_width(&self) -> u8 {
        self.get(RxPw::RX_PW)
    }

    /// Fails with [`RangeError`] if `width` is greater than 32.
    pub fn set_payload_width(&mut self, width: u8) -> Result<(), RangeError> {
        if width > 32 {
            return Err(RangeError {
                value: width,
                max: 32,
            });
        }
        self.set(RxPw::RX_PW, width)
    }
}

impl Register<FifoStatus> {
    pub const fn fifo_state(&self, about_tx: bool) -> FifoState {
        let (full, empty) = if about_tx {
            (FifoStatus::TX_FULL, FifoStatus::TX_EMPTY)
        } else {
            (FifoStatus::RX_FULL, FifoStatus::RX_EMPTY)
        };
        if self.is_set(full) {
            FifoState::Full
        } else if self.is_set(empty) {
            FifoState::Empty
        } else {
            FifoState::Occupied
        }
    }
}

/// The chip's registers as held in memory by the driver.
///
/// Every value starts at zero and changes only through explicit configuration
/// or through register transactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterMap {
    pub config: Register<Config>,
    pub en_aa: Register<EnAa>,
    pub en_rxaddr: Register<EnRxAddr>,
    pub setup_aw: Register<SetupAw>,
    pub setup_retr: Register<SetupRetr>,
    pub rf_ch: Register<RfCh>,
    pub rf_setup: Register<RfSetup>,
    pub status: Register<Status>,
    pub observe_tx: Register<ObserveTx>,
    pub rpd: Register<Rpd>,
    pub rx_addresses: PipeAddresses,
    pub tx_address: Register<TxAddr>,
    pub rx_pw: [Register<RxPw>; 6],
    pub fifo_status: Register<FifoStatus>,
    pub dynpd: Register<Dynpd>,
    pub feature: Register<Feature>,
}

impl RegisterMap {
    pub fn new() -> Self {
        Self {
            config: Register::new(registers::CONFIG),
            en_aa: Register::new(registers::EN_AA),
            en_rxaddr: Register::new(registers::EN_RXADDR),
            setup_aw: Register::new(registers::SETUP_AW),
            setup_retr: Register::new(registers::SETUP_RETR),
            rf_ch: Register::new(registers::RF_CH),
            rf_setup: Register::new(registers::RF_SETUP),
            status: Register::new(registers::STATUS),
            observe_tx: Register::new(registers::OBSERVE_TX),
            rpd: Register::new(registers::RPD),
            rx_addresses: PipeAddresses::new(AddressWidth::default()),
            tx_address: Register::new(registers::TX_ADDR),
            rx_pw: Pipe::ALL.map(|pipe| Register::new(pipe.rx_pw_register())),
            fifo_status: Register::new(registers::FIFO_STATUS),
            dynpd: Register::new(registers::DYNPD),
            feature: Register::new(registers::FEATURE),
        }
    }
}

impl RegisterMap {
    /// The TX address as configured in this map.
    pub fn tx_address_value(&self) -> Address {
        Address::from_bytes(self.tx_address.address_bytes(self.rx_addresses.width()))
    }
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::new()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::{
        registers, Config, Dynpd, EnRxAddr, FifoStatus, Register, RegisterMap, RfSetup, RxPw,
        SetupAw, SetupRetr, TxAddr,
    };
    use crate::radio::{AddressError, Pipe, RangeError};
    use crate::{AddressWidth, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};

    #[test]
    fn descriptor_address_is_fixed() {
        let mut reg = Register::<RfSetup>::new(registers::RF_SETUP);
        reg.set_value(0xFF);
        reg.set(RfSetup::RF_PWR, 1).unwrap();
        assert_eq!(reg.address(), registers::RF_SETUP);
        assert_eq!(reg.width(), 1);
        assert_eq!(reg.bytes(), &[0xFBu8]);
    }

    #[test]
    fn descriptor_address_is_five_bits() {
        let reg = Register::<RfSetup>::new(0xE0 | registers::RF_SETUP);
        assert_eq!(reg.address(), registers::RF_SETUP);
        let reg = Register::<Config>::with_value(0x20, 0x08);
        assert_eq!(reg.address(), registers::CONFIG);
        assert_eq!(reg.value(), 0x08);
    }

    #[test]
    fn set_pa_level_keeps_other_bits() {
        let mut reg = Register::<RfSetup>::with_value(registers::RF_SETUP, 0xFF);
        for (level, raw) in [
            (PaLevel::Min, 0xF9u8),
            (PaLevel::Low, 0xFB),
            (PaLevel::Medium, 0xFD),
            (PaLevel::Max, 0xFF),
        ] {
            reg.set_pa_level(level);
            assert_eq!(reg.value(), raw);
            assert_eq!(reg.value(), PaLevel::encode(0xFF, level.ordinal()).unwrap());
        }
    }

    #[test]
    fn set_field_out_of_range_leaves_value() {
        let mut reg = Register::<RfSetup>::with_value(registers::RF_SETUP, 0x0F);
        assert_eq!(
            reg.set(RfSetup::RF_PWR, 4),
            Err(RangeError { value: 4, max: 3 })
        );
        assert_eq!(reg.value(), 0x0F);
    }

    #[test]
    fn pa_level_accessors() {
        let mut reg = Register::<RfSetup>::with_value(registers::RF_SETUP, 0b1010_0001);
        assert_eq!(reg.pa_level(), PaLevel::Min);
        reg.set_pa_level(PaLevel::Medium);
        assert_eq!(reg.value(), 0b1010_0101);
        assert_eq!(reg.pa_level(), PaLevel::Medium);
        assert!(reg.lna_enabled());
        assert_eq!(reg.data_rate(), DataRate::Kbps250);
        reg.set_data_rate(DataRate::Mbps2);
        assert_eq!(reg.value(), 0b1000_1101);
    }

    #[test]
    fn config_accessors() {
        let mut reg = Register::<Config>::new(registers::CONFIG);
        reg.set_crc_length(CrcLength::Bit16);
        reg.set_power(true);
        reg.set_rx(true);
        assert_eq!(reg.value(), 0x0F);
        assert_eq!(reg.crc_length(), CrcLength::Bit16);
        assert!(reg.is_powered());
        assert!(reg.is_rx());
        // all IRQ events enabled while no mask bit is set
        assert_eq!(reg.irq_enabled().into_bits(), StatusFlags::IRQ_MASK);
        reg.set_irq_enabled(StatusFlags::from_bits(0x40));
        assert_eq!(reg.value(), 0x3F);
        assert!(reg.is_set(Config::MASK_MAX_RT));
        assert!(!reg.is_set(Config::MASK_RX_DR));
    }

    #[test]
    fn pipe_flags() {
        let mut reg = Register::<EnRxAddr>::new(registers::EN_RXADDR);
        reg.set_flag(EnRxAddr::pipe(Pipe::P5), true);
        reg.set_flag(EnRxAddr::pipe(Pipe::P0), true);
        assert_eq!(reg.value(), 0x21);
        let mut dynpd = Register::<Dynpd>::new(registers::DYNPD);
        dynpd.set(Dynpd::ALL, 0x3F).unwrap();
        assert_eq!(dynpd.value(), 0x3F);
    }

    #[test]
    fn auto_retries() {
        let mut reg = Register::<SetupRetr>::with_value(registers::SETUP_RETR, 0x03);
        reg.set_auto_retries(5, 15).unwrap();
        assert_eq!(reg.value(), 0x5F);
        assert!(reg.set_auto_retries(16, 0).is_err());
        assert!(reg.set_auto_retries(0, 16).is_err());
        assert_eq!(reg.value(), 0x5F);
    }

    #[test]
    fn address_width_field() {
        let mut reg = Register::<SetupAw>::with_value(registers::SETUP_AW, 0xFC);
        reg.set_address_width(AddressWidth::Bytes4);
        assert_eq!(reg.value(), 0xFE);
        assert_eq!(reg.address_width(), AddressWidth::Bytes4);
    }

    #[test]
    fn payload_width() {
        let mut reg = Register::<RxPw>::new(registers::RX_PW_P0);
        reg.set_payload_width(32).unwrap();
        assert_eq!(reg.payload_width(), 32);
        assert!(reg.set_payload_width(33).is_err());
        assert_eq!(reg.payload_width(), 32);
    }

    #[test]
    fn fifo_state() {
        let reg = Register::<FifoStatus>::with_value(registers::FIFO_STATUS, 0x11);
        assert_eq!(reg.fifo_state(true), FifoState::Empty);
        assert_eq!(reg.fifo_state(false), FifoState::Empty);
        let reg = Register::<FifoStatus>::with_value(registers::FIFO_STATUS, 0x22);
        assert_eq!(reg.fifo_state(true), FifoState::Full);
        assert_eq!(reg.fifo_state(false), FifoState::Full);
        let reg = Register::<FifoStatus>::with_value(registers::FIFO_STATUS, 0);
        assert_eq!(reg.fifo_state(true), FifoState::Occupied);
    }

    #[test]
    fn tx_address_width() {
        let mut reg = Register::<TxAddr>::new(registers::TX_ADDR);
        assert_eq!(reg.width(), 5);
        reg.set_address(AddressWidth::Bytes3, &[1, 2, 3]).unwrap();
        assert_eq!(reg.bytes(), &[0u8, 0, 1, 2, 3]);
        assert_eq!(reg.address_bytes(AddressWidth::Bytes3), &[1u8, 2, 3]);
        assert_eq!(
            reg.set_address(AddressWidth::Bytes5, &[1, 2, 3]),
            Err(AddressError::WidthMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn map_addresses() {
        let map = RegisterMap::new();
        assert_eq!(map.config.address(), registers::CONFIG);
        assert_eq!(map.feature.address(), registers::FEATURE);
        for (n, reg) in map.rx_pw.iter().enumerate() {
            assert_eq!(reg.address(), registers::RX_PW_P0 + n as u8);
            assert_eq!(reg.value(), 0);
        }
        assert_eq!(map.rx_addresses.width(), AddressWidth::Bytes5);
    }
}

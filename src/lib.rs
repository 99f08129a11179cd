#![doc = include_str!("../README.md")]
//!
//! ## Command API
//!
//! - [`RF24::new()`](fn@crate::radio::RF24::new)
//! - [`RF24::read_register()`](fn@crate::radio::RF24::read_register)
//! - [`RF24::write_register()`](fn@crate::radio::RF24::write_register)
//! - [`RF24::read_payload()`](fn@crate::radio::RF24::read_payload)
//! - [`RF24::write_payload()`](fn@crate::radio::RF24::write_payload)
//! - [`RF24::flush_tx()`](fn@crate::radio::RF24::flush_tx)
//! - [`RF24::flush_rx()`](fn@crate::radio::RF24::flush_rx)
//! - [`RF24::refresh_status()`](fn@crate::radio::RF24::refresh_status)
//! - [`RF24::toggle_activate()`](fn@crate::radio::RF24::toggle_activate)
//!
//! ## Register API
//!
//! - [`RF24::fetch()`](fn@crate::radio::RF24::fetch)
//! - [`RF24::store()`](fn@crate::radio::RF24::store)
//! - [`RF24::modify()`](fn@crate::radio::RF24::modify)
//! - [`RF24::fetch_all()`](fn@crate::radio::RF24::fetch_all)
//! - [`RF24::print_details()`](fn@crate::radio::RF24::print_details)
//! - [`RF24::write_rx_address()`](fn@crate::radio::RF24::write_rx_address)
//! - [`RF24::read_rx_address()`](fn@crate::radio::RF24::read_rx_address)
//! - [`RF24::write_tx_address()`](fn@crate::radio::RF24::write_tx_address)
//! - [`RF24::read_tx_address()`](fn@crate::radio::RF24::read_tx_address)
//! - [`RF24::set_address_width()`](fn@crate::radio::RF24::set_address_width)
//! - [`RF24::pa_level()`](fn@crate::radio::RF24::pa_level)
//! - [`RF24::set_pa_level()`](fn@crate::radio::RF24::set_pa_level)
//!
//! ## Activated features API
//!
//! - [`RF24::read_payload_width()`](fn@crate::radio::RF24::read_payload_width)
//! - [`RF24::write_ack_payload()`](fn@crate::radio::RF24::write_ack_payload)
//! - [`RF24::write_payload_no_ack()`](fn@crate::radio::RF24::write_payload_no_ack)
//! - [`RF24::reuse_tx_payload()`](fn@crate::radio::RF24::reuse_tx_payload)
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod types;
pub use types::{AddressWidth, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};
pub mod radio;

//! QuickCart Core - Shared domain types.
//!
//! This crate provides the value types used across the QuickCart workspace:
//! - `checkout` - Stores, validation, pricing and the checkout session
//! - `cli` - Command-line driver for the checkout flow
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O and no timers.
//! It can be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, catalog records and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

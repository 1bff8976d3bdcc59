//! # Veilgate Core
//!
//! Shared primitives for the Veilgate access-control registries.
//!
//! This crate contains no registry state and no I/O. It is the common
//! vocabulary both registries speak:
//!
//! - [`AccountId`] - host ledger principals, including the reserved burn
//!   account
//! - [`Commitment`] / [`PreimageDigest`] - the two independent digests of an
//!   identity's secret preimage
//! - [`AdminConfig`] / [`Authority`] - per-registry write-once authority and
//!   tunable bounds
//! - [`FeeLedger`] - the injected fee-transfer capability
//! - [`Event`] - append-only records emitted by every mutating operation
//! - [`validation`] - the shared input bounds
//!
//! Time is a [`BlockHeight`] passed explicitly into every operation; the core
//! never reads a clock of its own.

pub mod account;
pub mod config;
pub mod crypto;
pub mod error;
pub mod event;
pub mod ledger;
pub mod types;
pub mod validation;

pub use account::AccountId;
pub use config::{
    AdminConfig, Authority, DEFAULT_MAX_GRANT_DURATION, DEFAULT_MIN_GRANT_DURATION,
};
pub use crypto::{Commitment, PreimageDigest};
pub use error::{ConfigError, ErrorCategory, LedgerError, ValidationError};
pub use event::{Event, EventValue};
pub use ledger::FeeLedger;
pub use types::{AccessType, BlockHeight, Currency, IdType};

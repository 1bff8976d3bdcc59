//! # Veilgate Testkit
//!
//! Testing utilities shared by the registry test suites:
//!
//! - [`MemoryLedger`] - an in-memory [`veilgate_core::FeeLedger`]
//! - [`fixtures`] - deterministic accounts, preimages, provisioned configs
//! - [`generators`] - proptest strategies for registry inputs

pub mod fixtures;
pub mod generators;
pub mod ledger;

pub use fixtures::{account, funded_ledger, preimage, provisioned_config, random_account};
pub use ledger::MemoryLedger;

//! # Veilgate
//!
//! A two-registry access-control core: anonymous identities under a
//! commitment/reveal scheme, and time-bounded access grants binding those
//! identities to content ids.
//!
//! ## Overview
//!
//! - **Identities** are registered under a [`Commitment`], a one-way digest
//!   of a secret preimage. Revealing the preimage proves ownership against
//!   two independent digests.
//! - **Grants** authorize access to a content id for the identity behind a
//!   commitment, for a bounded window of logical time. Only the identity's
//!   owner can create one; only the granter can update or revoke it.
//! - **Authorities** are assigned once per registry, receive the fees, and
//!   drive the blacklist.
//!
//! The host supplies the clock ([`BlockHeight`]) per call and the fee
//! ledger via the [`FeeLedger`] trait; the core holds no ambient state and
//! performs no I/O. Calls are synchronous and atomic: every precondition
//! resolves before the first state write.
//!
//! ## Usage
//!
//! ```rust
//! use veilgate::{AccessControl, AdminConfig, GrantRequest, IdType};
//! use veilgate_testkit::{account, MemoryLedger};
//!
//! let ledger = MemoryLedger::new().with_balance(account(1), 1_000);
//! let mut control = AccessControl::new(
//!     AdminConfig::new(10, 100),
//!     AdminConfig::new(10, 100),
//!     ledger,
//! );
//! control.set_identity_authority(account(0xaa)).unwrap();
//! control.set_grant_authority(account(0xaa)).unwrap();
//!
//! // register an identity at clock 0, valid until clock 10_000
//! let id = control
//!     .create_identity(account(1), b"secret", Default::default(), 10_000, IdType::Anon, 0)
//!     .unwrap();
//! let commitment = control.get_identity(id).unwrap().commitment;
//!
//! // grant content 7 for 3_600 clock units
//! control
//!     .grant_access(account(1), GrantRequest::new(commitment, 7, 3_600), 0)
//!     .unwrap();
//! assert!(control.has_access(&commitment, 7, 3_599));
//! assert!(!control.has_access(&commitment, 7, 3_600));
//! ```
//!
//! ## Re-exports
//!
//! The component crates are re-exported for direct use:
//!
//! - [`core`] - shared primitives (accounts, commitments, config, events)
//! - [`identity`] - the identity registry
//! - [`access`] - the access-grant registry

pub mod control;
pub mod error;

// Re-export component crates
pub use veilgate_access as access;
pub use veilgate_core as core;
pub use veilgate_identity as identity;

// Re-export main types for convenience
pub use control::AccessControl;
pub use error::{Error, Result};

// Re-export commonly used component types
pub use veilgate_access::{AccessGrant, AccessGrantRegistry, GrantId, GrantRequest, GrantUpdate};
pub use veilgate_core::{
    AccessType, AccountId, AdminConfig, Authority, BlockHeight, Commitment, Currency,
    ErrorCategory, Event, EventValue, FeeLedger, IdType, PreimageDigest,
};
pub use veilgate_identity::{
    BlacklistEntry, Identity, IdentityId, IdentityRegistry, IdentityUpdate,
};

//! # Veilgate Identity
//!
//! The anonymous identity registry.
//!
//! Identities are registered under a commitment (a one-way digest of a
//! secret preimage) and proven later by revealing the preimage against two
//! independent digests. The registry also carries the authority-driven
//! blacklist and the per-identity update log.
//!
//! ## Key Concepts
//!
//! - **Commitment**: the public, unlinkable identity handle
//! - **Reveal**: proving ownership by supplying the preimage; both stored
//!   digests must match
//! - **Blacklist**: authority-only suspension that flips the status flag
//! - **Expiry**: a live predicate against the call's clock value, never
//!   cached into the record
//!
//! All state lives in [`IdentityRegistry`]; the host owns the instance and
//! serializes calls to it.

pub mod error;
pub mod record;
pub mod registry;

pub use error::{IdentityError, Result};
pub use record::{BlacklistEntry, Identity, IdentityId, IdentityUpdate, MAX_REVEAL_COUNT};
pub use registry::IdentityRegistry;

//! # Veilgate Access
//!
//! The access-grant registry.
//!
//! A grant binds an identity commitment to a content id for a bounded
//! window of logical time. Creating a grant requires owning the identity
//! behind the commitment, checked live against the identity registry
//! through the injected [`IdentityLookup`] seam. Revocation is terminal;
//! expiry is a live predicate evaluated by [`AccessGrantRegistry::has_access`].

pub mod error;
pub mod record;
pub mod registry;

pub use error::{AccessError, Result};
pub use record::{AccessGrant, GrantId, GrantRequest, GrantUpdate};
pub use registry::{AccessGrantRegistry, IdentityLookup};

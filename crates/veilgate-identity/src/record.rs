//! Identity records.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

use veilgate_core::{AccountId, BlockHeight, Commitment, IdType, PreimageDigest};

/// Cap on reveals per identity. Tracked against [`Identity::reveal_count`]
/// but not yet enforced by the registry.
pub const MAX_REVEAL_COUNT: u32 = 100;

/// Sequential identity handle, assigned at creation and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct IdentityId(pub u64);

impl IdentityId {
    /// The raw handle value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IdentityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// An anonymous identity held by the registry.
///
/// `status` reflects only the blacklist lifecycle. Expiry is never cached
/// into it: consumers evaluate [`Identity::is_expired`] against the clock
/// value of the current call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Sequential handle.
    pub id: IdentityId,
    /// BLAKE3 digest of the preimage; the public handle. Unique.
    pub commitment: Commitment,
    /// SHA-256 digest of the same preimage; the second reveal factor.
    pub preimage_digest: PreimageDigest,
    /// Opaque metadata blob, at most 128 bytes.
    pub metadata: Bytes,
    /// The identity is usable only while the clock is below this value.
    pub expiry: BlockHeight,
    /// Clock value of the last mutation.
    pub timestamp: BlockHeight,
    /// Owning account; changed only by explicit transfer.
    pub owner: AccountId,
    /// The kind of identity.
    pub id_type: IdType,
    /// Active flag; forced false by blacklisting, restored on unblacklist.
    pub status: bool,
    /// How many times the preimage has been revealed.
    pub reveal_count: u32,
}

impl Identity {
    /// Whether the identity has expired at the given clock value.
    pub fn is_expired(&self, now: BlockHeight) -> bool {
        now >= self.expiry
    }
}

/// The most recent owner-driven update of an identity. Last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUpdate {
    pub metadata: Bytes,
    pub expiry: BlockHeight,
    pub timestamp: BlockHeight,
    pub updated_by: AccountId,
}

/// Why and when an identity was blacklisted. Presence implies blacklisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// Non-empty reason, at most 256 bytes.
    pub reason: String,
    pub blacklisted_at: BlockHeight,
    pub blacklisted_by: AccountId,
}

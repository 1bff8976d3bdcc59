//! Access-grant records.

use serde::{Deserialize, Serialize};
use std::fmt;

use veilgate_core::{AccessType, AccountId, BlockHeight, Commitment, Currency};

/// Sequential grant handle, assigned at creation and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GrantId(pub u64);

impl GrantId {
    /// The raw handle value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GrantId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A time-bounded authorization binding an identity commitment to a content
/// id. Unique per (commitment, content) pair.
///
/// `status` only tracks revocation. Expiry is evaluated live against the
/// clock value of the current call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Sequential handle.
    pub id: GrantId,
    /// The identity commitment the grant is keyed by.
    pub commitment: Commitment,
    /// The content being granted. Always positive.
    pub content_id: u64,
    /// Clock value at creation.
    pub granted_at: BlockHeight,
    /// Access ends when the clock reaches this value.
    pub expires_at: BlockHeight,
    /// Clock value of the last mutation.
    pub timestamp: BlockHeight,
    /// How the content may be consumed.
    pub access_type: AccessType,
    /// Penalty percentage, 0 through 100.
    pub penalty: u8,
    /// Voting threshold percentage in (0, 100]. Stored for external
    /// collaborators; never evaluated here.
    pub voting_threshold: u8,
    /// The account that created the grant; the only account allowed to
    /// update or revoke it.
    pub granter: AccountId,
    /// Free-form location tag, non-empty, at most 100 bytes.
    pub location: String,
    /// Settlement currency.
    pub currency: Currency,
    /// Active flag; set false by revocation, which is terminal.
    pub status: bool,
}

impl AccessGrant {
    /// Whether the grant has expired at the given clock value.
    pub fn is_expired(&self, now: BlockHeight) -> bool {
        now >= self.expires_at
    }
}

/// The most recent granter-driven update for a commitment's grant log.
/// Last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantUpdate {
    pub expires_at: BlockHeight,
    pub access_type: AccessType,
    pub timestamp: BlockHeight,
    pub updated_by: AccountId,
}

/// Parameters for creating a grant.
///
/// Constructed with the binding fields and sensible defaults for the rest;
/// the builder methods override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    pub commitment: Commitment,
    pub content_id: u64,
    /// How long access lasts, in clock units from the call's clock value.
    pub duration: u64,
    pub access_type: AccessType,
    pub penalty: u8,
    pub voting_threshold: u8,
    pub location: String,
    pub currency: Currency,
}

impl GrantRequest {
    /// A free, penalty-less grant request; override fields as needed.
    pub fn new(commitment: Commitment, content_id: u64, duration: u64) -> Self {
        Self {
            commitment,
            content_id,
            duration,
            access_type: AccessType::Free,
            penalty: 0,
            voting_threshold: 100,
            location: "global".to_string(),
            currency: Currency::Usd,
        }
    }

    pub fn with_access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = access_type;
        self
    }

    pub fn with_penalty(mut self, penalty: u8) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_voting_threshold(mut self, threshold: u8) -> Self {
        self.voting_threshold = threshold;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

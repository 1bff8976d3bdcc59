//! Error types for the identity registry.

use thiserror::Error;

use veilgate_core::{ConfigError, ErrorCategory, LedgerError, ValidationError};

use crate::record::IdentityId;

/// Errors that can occur during identity registry operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The registry holds as many identities as its configuration allows.
    #[error("identity registry is at capacity ({capacity})")]
    CapacityReached { capacity: u64 },

    /// Malformed or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The derived commitment is already registered.
    #[error("commitment is already registered")]
    CommitmentExists,

    /// No identity under this id.
    #[error("identity {0} not found")]
    NotFound(IdentityId),

    /// Caller is not the identity owner.
    #[error("caller is not the owner of identity {0}")]
    NotOwner(IdentityId),

    /// The identity's expiry lies at or before the current clock.
    #[error("identity {0} has expired")]
    Expired(IdentityId),

    /// The identity is blacklisted.
    #[error("identity {0} is blacklisted")]
    Blacklisted(IdentityId),

    /// Blacklisting an identity that is already blacklisted.
    #[error("identity {0} is already blacklisted")]
    AlreadyBlacklisted(IdentityId),

    /// Unblacklisting an identity that is not blacklisted.
    #[error("identity {0} is not blacklisted")]
    NotBlacklisted(IdentityId),

    /// Caller is not the configured registry authority.
    #[error("caller is not the registry authority")]
    NotAuthority,

    /// The SHA-256 factor of the reveal proof failed.
    #[error("preimage digest does not match the stored digest")]
    PreimageDigestMismatch,

    /// The commitment factor of the reveal proof failed.
    #[error("preimage does not match the stored commitment")]
    CommitmentMismatch,

    /// Ownership cannot be transferred to the burn account.
    #[error("the burn account cannot receive identity ownership")]
    InvalidNewOwner,

    /// Admin configuration error, including the unprovisioned-authority case.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The fee transfer was refused by the host ledger.
    #[error("fee transfer failed: {0}")]
    Fee(#[from] LedgerError),
}

impl IdentityError {
    /// Coarse classification for remediation, per the shared taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            IdentityError::CapacityReached { .. } => ErrorCategory::Capacity,
            IdentityError::Validation(e) => e.category(),
            IdentityError::CommitmentExists
            | IdentityError::NotFound(_)
            | IdentityError::Blacklisted(_)
            | IdentityError::AlreadyBlacklisted(_)
            | IdentityError::NotBlacklisted(_) => ErrorCategory::State,
            IdentityError::NotOwner(_)
            | IdentityError::NotAuthority
            | IdentityError::PreimageDigestMismatch
            | IdentityError::CommitmentMismatch => ErrorCategory::Authorization,
            IdentityError::Expired(_) => ErrorCategory::Temporal,
            IdentityError::InvalidNewOwner => ErrorCategory::Validation,
            IdentityError::Config(e) => e.category(),
            IdentityError::Fee(e) => e.category(),
        }
    }
}

/// Result type for identity registry operations.
pub type Result<T> = std::result::Result<T, IdentityError>;

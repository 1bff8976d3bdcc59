//! Error types for the access-grant registry.

use thiserror::Error;

use veilgate_core::{ConfigError, ErrorCategory, LedgerError, ValidationError};

/// Errors that can occur during access-grant operations.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The registry holds as many grants as its configuration allows.
    #[error("access registry is at capacity ({capacity})")]
    CapacityReached { capacity: u64 },

    /// Malformed or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The commitment does not belong to any registered identity.
    #[error("no identity is registered for this commitment")]
    IdentityNotFound,

    /// Caller is not the owner of the identity behind the commitment.
    #[error("caller does not own the identity behind this commitment")]
    NotIdentityOwner,

    /// A grant already exists for this commitment and content pair.
    #[error("access is already granted for this commitment and content")]
    AlreadyGranted,

    /// No grant exists for this commitment and content pair.
    #[error("no grant exists for this commitment and content")]
    GrantNotFound,

    /// Caller is not the account that created the grant.
    #[error("caller is not the granter")]
    NotGranter,

    /// Admin configuration error, including the unprovisioned-authority case.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The fee transfer was refused by the host ledger.
    #[error("fee transfer failed: {0}")]
    Fee(#[from] LedgerError),
}

impl AccessError {
    /// Coarse classification for remediation, per the shared taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AccessError::CapacityReached { .. } => ErrorCategory::Capacity,
            AccessError::Validation(e) => e.category(),
            AccessError::IdentityNotFound
            | AccessError::AlreadyGranted
            | AccessError::GrantNotFound => ErrorCategory::State,
            AccessError::NotIdentityOwner | AccessError::NotGranter => {
                ErrorCategory::Authorization
            }
            AccessError::Config(e) => e.category(),
            AccessError::Fee(e) => e.category(),
        }
    }
}

/// Result type for access-grant operations.
pub type Result<T> = std::result::Result<T, AccessError>;

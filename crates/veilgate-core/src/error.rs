//! Shared error vocabulary.
//!
//! Every operation fails with a single discrete error. The registries wrap
//! these core errors in their own enums; [`ErrorCategory`] classifies any
//! error in the tree so a caller can pick a remediation without matching on
//! individual variants.

use thiserror::Error;

use crate::types::BlockHeight;

/// Coarse classification of a failure, mirroring the remediation a caller
/// would apply: fix the input, change the caller, wait, reconfigure, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or out-of-range input.
    Validation,
    /// Caller is not the required owner, granter, or authority.
    Authorization,
    /// Not found, already exists, or a lifecycle flag is in the way.
    State,
    /// Expired, or a clock-relative bound was violated.
    Temporal,
    /// A registry is at its configured maximum.
    Capacity,
    /// The registry has not been provisioned yet.
    Configuration,
}

/// Errors from admin configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The write-once authority was already assigned.
    #[error("authority is already set")]
    AuthorityAlreadySet,

    /// The burn account cannot hold authority.
    #[error("the burn account cannot be the authority")]
    InvalidAuthority,

    /// A tunable was touched before the authority was assigned.
    #[error("authority is not set")]
    AuthorityNotSet,

    /// Capacity must be positive.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Duration bounds must be positive.
    #[error("duration bound must be greater than zero")]
    ZeroDuration,

    /// Duration bounds must keep min strictly below max.
    #[error("duration bounds must satisfy min < max (min {min}, max {max})")]
    InvalidDurationBounds { min: u64, max: u64 },
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::AuthorityAlreadySet => ErrorCategory::State,
            ConfigError::AuthorityNotSet => ErrorCategory::Configuration,
            ConfigError::InvalidAuthority
            | ConfigError::ZeroCapacity
            | ConfigError::ZeroDuration
            | ConfigError::InvalidDurationBounds { .. } => ErrorCategory::Validation,
        }
    }
}

/// Input validation errors shared by both registries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A preimage must carry at least one byte.
    #[error("preimage is empty")]
    EmptyPreimage,

    /// Identity metadata exceeds the fixed bound.
    #[error("metadata is {len} bytes, maximum is {max}")]
    MetadataTooLarge { len: usize, max: usize },

    /// An expiry must lie strictly after the current clock value.
    #[error("expiry {expiry} is not after the current clock {now}")]
    ExpiryNotInFuture { expiry: BlockHeight, now: BlockHeight },

    /// A blacklist reason must be non-empty.
    #[error("blacklist reason is empty")]
    EmptyReason,

    /// A blacklist reason exceeds the fixed bound.
    #[error("blacklist reason is {len} bytes, maximum is {max}")]
    ReasonTooLong { len: usize, max: usize },

    /// Content ids start at one; zero is reserved.
    #[error("content id must be greater than zero")]
    ZeroContentId,

    /// A grant duration fell outside the configured bounds.
    #[error("duration {duration} is outside the configured bounds [{min}, {max}]")]
    DurationOutOfBounds { duration: u64, min: u64, max: u64 },

    /// Penalty is a percentage.
    #[error("penalty {0} exceeds 100")]
    PenaltyOutOfRange(u8),

    /// Voting threshold is a percentage in (0, 100].
    #[error("voting threshold {0} is outside (0, 100]")]
    ThresholdOutOfRange(u8),

    /// A grant location must be non-empty.
    #[error("location is empty")]
    EmptyLocation,

    /// A grant location exceeds the fixed bound.
    #[error("location is {len} bytes, maximum is {max}")]
    LocationTooLong { len: usize, max: usize },

    /// Unknown identity type code.
    #[error("unknown identity type {0:?}")]
    InvalidIdentityType(String),

    /// Unknown access type code.
    #[error("unknown access type {0}")]
    InvalidAccessType(u8),

    /// Unknown currency code.
    #[error("unknown currency {0:?}")]
    InvalidCurrency(String),
}

impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::ExpiryNotInFuture { .. }
            | ValidationError::DurationOutOfBounds { .. } => ErrorCategory::Temporal,
            _ => ErrorCategory::Validation,
        }
    }
}

/// Errors from the host fee-transfer capability.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The payer cannot cover the transfer.
    #[error("insufficient balance: account {account} holds {balance}, needs {required}")]
    InsufficientBalance {
        account: String,
        balance: u64,
        required: u64,
    },

    /// The host ledger refused the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

impl LedgerError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::State
    }
}

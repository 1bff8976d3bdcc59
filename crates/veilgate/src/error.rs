//! Unified error type for the facade.

use thiserror::Error;

use veilgate_access::AccessError;
use veilgate_core::ErrorCategory;
use veilgate_identity::IdentityError;

/// Errors surfaced by [`crate::AccessControl`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Identity registry error.
    #[error("identity registry: {0}")]
    Identity(#[from] IdentityError),

    /// Access-grant registry error.
    #[error("access registry: {0}")]
    Access(#[from] AccessError),
}

impl Error {
    /// Coarse classification for remediation, per the shared taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Identity(e) => e.category(),
            Error::Access(e) => e.category(),
        }
    }
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Per-registry admin configuration.
//!
//! Each registry owns one [`AdminConfig`]: a write-once authority reference
//! plus the tunable numeric bounds (fee, capacity, grant-duration bounds).
//! The authority is the fee recipient and the only account trusted for
//! privileged registry operations. It is assigned exactly once; there is no
//! rotation or revocation path.

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::ConfigError;

/// Default lower bound on grant durations, in clock units.
pub const DEFAULT_MIN_GRANT_DURATION: u64 = 1;

/// Default upper bound on grant durations, in clock units.
pub const DEFAULT_MAX_GRANT_DURATION: u64 = 31_536_000;

/// The write-once authority slot.
///
/// Exactly one legal transition exists: `Unset` to `Set`. Every later
/// assignment attempt is rejected structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Authority {
    /// No authority assigned yet; fee-gated operations are unavailable.
    #[default]
    Unset,
    /// The assigned authority account.
    Set(AccountId),
}

impl Authority {
    /// The assigned account, if any.
    pub fn get(&self) -> Option<&AccountId> {
        match self {
            Authority::Unset => None,
            Authority::Set(account) => Some(account),
        }
    }

    /// Whether an authority has been assigned.
    pub fn is_set(&self) -> bool {
        matches!(self, Authority::Set(_))
    }
}

/// Tunable configuration owned by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    authority: Authority,
    fee: u64,
    capacity: u64,
    min_duration: u64,
    max_duration: u64,
}

impl AdminConfig {
    /// Create a configuration with the given creation fee and capacity cap.
    ///
    /// Duration bounds start at their defaults; the identity registry never
    /// reads them.
    pub fn new(fee: u64, capacity: u64) -> Self {
        Self {
            authority: Authority::Unset,
            fee,
            capacity,
            min_duration: DEFAULT_MIN_GRANT_DURATION,
            max_duration: DEFAULT_MAX_GRANT_DURATION,
        }
    }

    /// Assign the authority. Succeeds exactly once.
    pub fn set_authority(&mut self, account: AccountId) -> Result<(), ConfigError> {
        if self.authority.is_set() {
            return Err(ConfigError::AuthorityAlreadySet);
        }
        if account.is_burn() {
            return Err(ConfigError::InvalidAuthority);
        }
        self.authority = Authority::Set(account);
        Ok(())
    }

    /// Change the creation/grant fee. Requires the authority to be set.
    pub fn set_fee(&mut self, fee: u64) -> Result<(), ConfigError> {
        self.require_authority()?;
        self.fee = fee;
        Ok(())
    }

    /// Change the capacity cap. Requires the authority to be set.
    pub fn set_capacity(&mut self, capacity: u64) -> Result<(), ConfigError> {
        self.require_authority()?;
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Change the minimum grant duration. Checked against the currently
    /// stored maximum, not against a simultaneous pair.
    pub fn set_min_duration(&mut self, min: u64) -> Result<(), ConfigError> {
        self.require_authority()?;
        if min == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if min >= self.max_duration {
            return Err(ConfigError::InvalidDurationBounds {
                min,
                max: self.max_duration,
            });
        }
        self.min_duration = min;
        Ok(())
    }

    /// Change the maximum grant duration. Checked against the currently
    /// stored minimum.
    pub fn set_max_duration(&mut self, max: u64) -> Result<(), ConfigError> {
        self.require_authority()?;
        if max == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if max <= self.min_duration {
            return Err(ConfigError::InvalidDurationBounds {
                min: self.min_duration,
                max,
            });
        }
        self.max_duration = max;
        Ok(())
    }

    /// The assigned authority account, if any.
    pub fn authority(&self) -> Option<&AccountId> {
        self.authority.get()
    }

    /// The authority, or the configuration error a fee-gated operation
    /// reports when provisioning has not happened.
    pub fn require_authority(&self) -> Result<&AccountId, ConfigError> {
        self.authority.get().ok_or(ConfigError::AuthorityNotSet)
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn min_duration(&self) -> u64 {
        self.min_duration
    }

    pub fn max_duration(&self) -> u64 {
        self.max_duration
    }
}

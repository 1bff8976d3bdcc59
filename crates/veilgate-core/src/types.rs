//! Shared vocabulary types.
//!
//! Closed-set enums convert from their wire representations via `TryFrom`,
//! so membership violations surface as [`ValidationError`]s at the boundary
//! and the registries never see an out-of-set value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Logical clock value supplied by the host on every call.
///
/// Monotonically non-decreasing across calls. All expiry and timestamp
/// comparisons use the single value passed into the current call.
pub type BlockHeight = u64;

/// The kind of identity being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// Fully anonymous; only the commitment is public.
    Anon,
    /// A persistent pseudonym.
    Pseudonym,
    /// Verified out of band by an external collaborator.
    Verified,
}

impl IdType {
    /// Stable string code for events and external observers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdType::Anon => "anon",
            IdType::Pseudonym => "pseudonym",
            IdType::Verified => "verified",
        }
    }
}

impl TryFrom<&str> for IdType {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "anon" => Ok(IdType::Anon),
            "pseudonym" => Ok(IdType::Pseudonym),
            "verified" => Ok(IdType::Verified),
            other => Err(ValidationError::InvalidIdentityType(other.to_string())),
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How granted content may be consumed. Semantics live outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessType {
    Free = 0,
    PayPerView = 1,
    Subscription = 2,
}

impl AccessType {
    /// Numeric code as carried by the host.
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for AccessType {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AccessType::Free),
            1 => Ok(AccessType::PayPerView),
            2 => Ok(AccessType::Subscription),
            other => Err(ValidationError::InvalidAccessType(other)),
        }
    }
}

/// Settlement currency for a grant. A closed set of three fixed codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Btc,
}

impl Currency {
    /// Stable currency code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Btc => "BTC",
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "BTC" => Ok(Currency::Btc),
            other => Err(ValidationError::InvalidCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

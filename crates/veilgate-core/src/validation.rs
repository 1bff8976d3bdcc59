//! Shared input validation.
//!
//! Both registries resolve their preconditions left-to-right and return on
//! the first violation. The helpers here cover the bounds shared across
//! operations; registry-specific checks (ownership, uniqueness, lifecycle)
//! live with the registries.

use crate::error::ValidationError;
use crate::types::BlockHeight;

/// Maximum identity metadata size in bytes.
pub const MAX_METADATA_LEN: usize = 128;

/// Maximum blacklist reason size in bytes.
pub const MAX_REASON_LEN: usize = 256;

/// Maximum grant location size in bytes.
pub const MAX_LOCATION_LEN: usize = 100;

/// A preimage must carry at least one byte.
pub fn require_preimage(preimage: &[u8]) -> Result<(), ValidationError> {
    if preimage.is_empty() {
        return Err(ValidationError::EmptyPreimage);
    }
    Ok(())
}

/// Identity metadata is an opaque blob of at most [`MAX_METADATA_LEN`] bytes.
pub fn require_metadata(metadata: &[u8]) -> Result<(), ValidationError> {
    if metadata.len() > MAX_METADATA_LEN {
        return Err(ValidationError::MetadataTooLarge {
            len: metadata.len(),
            max: MAX_METADATA_LEN,
        });
    }
    Ok(())
}

/// An expiry must lie strictly after the current clock value.
pub fn require_future_expiry(expiry: BlockHeight, now: BlockHeight) -> Result<(), ValidationError> {
    if expiry <= now {
        return Err(ValidationError::ExpiryNotInFuture { expiry, now });
    }
    Ok(())
}

/// A blacklist reason is non-empty and at most [`MAX_REASON_LEN`] bytes.
pub fn require_reason(reason: &str) -> Result<(), ValidationError> {
    if reason.is_empty() {
        return Err(ValidationError::EmptyReason);
    }
    if reason.len() > MAX_REASON_LEN {
        return Err(ValidationError::ReasonTooLong {
            len: reason.len(),
            max: MAX_REASON_LEN,
        });
    }
    Ok(())
}

/// Content ids start at one.
pub fn require_content_id(content_id: u64) -> Result<(), ValidationError> {
    if content_id == 0 {
        return Err(ValidationError::ZeroContentId);
    }
    Ok(())
}

/// A grant duration must fall inside the configured bounds, inclusive.
pub fn require_duration(duration: u64, min: u64, max: u64) -> Result<(), ValidationError> {
    if duration < min || duration > max {
        return Err(ValidationError::DurationOutOfBounds { duration, min, max });
    }
    Ok(())
}

/// Penalty is a percentage, 0 through 100.
pub fn require_penalty(penalty: u8) -> Result<(), ValidationError> {
    if penalty > 100 {
        return Err(ValidationError::PenaltyOutOfRange(penalty));
    }
    Ok(())
}

/// Voting threshold is a percentage in (0, 100].
pub fn require_voting_threshold(threshold: u8) -> Result<(), ValidationError> {
    if threshold == 0 || threshold > 100 {
        return Err(ValidationError::ThresholdOutOfRange(threshold));
    }
    Ok(())
}

/// A grant location is non-empty and at most [`MAX_LOCATION_LEN`] bytes.
pub fn require_location(location: &str) -> Result<(), ValidationError> {
    if location.is_empty() {
        return Err(ValidationError::EmptyLocation);
    }
    if location.len() > MAX_LOCATION_LEN {
        return Err(ValidationError::LocationTooLong {
            len: location.len(),
            max: MAX_LOCATION_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preimage_bounds() {
        assert!(require_preimage(b"x").is_ok());
        assert!(matches!(
            require_preimage(b""),
            Err(ValidationError::EmptyPreimage)
        ));
    }

    #[test]
    fn test_metadata_bounds() {
        assert!(require_metadata(&[0u8; MAX_METADATA_LEN]).is_ok());
        assert!(matches!(
            require_metadata(&[0u8; MAX_METADATA_LEN + 1]),
            Err(ValidationError::MetadataTooLarge { .. })
        ));
    }

    #[test]
    fn test_expiry_strictly_future() {
        assert!(require_future_expiry(101, 100).is_ok());
        assert!(matches!(
            require_future_expiry(100, 100),
            Err(ValidationError::ExpiryNotInFuture { .. })
        ));
        assert!(matches!(
            require_future_expiry(99, 100),
            Err(ValidationError::ExpiryNotInFuture { .. })
        ));
    }

    #[test]
    fn test_reason_bounds() {
        assert!(require_reason("spam").is_ok());
        assert!(matches!(
            require_reason(""),
            Err(ValidationError::EmptyReason)
        ));
        let long = "r".repeat(MAX_REASON_LEN + 1);
        assert!(matches!(
            require_reason(&long),
            Err(ValidationError::ReasonTooLong { .. })
        ));
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        assert!(require_duration(1, 1, 10).is_ok());
        assert!(require_duration(10, 1, 10).is_ok());
        assert!(matches!(
            require_duration(0, 1, 10),
            Err(ValidationError::DurationOutOfBounds { .. })
        ));
        assert!(matches!(
            require_duration(11, 1, 10),
            Err(ValidationError::DurationOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_percentages() {
        assert!(require_penalty(0).is_ok());
        assert!(require_penalty(100).is_ok());
        assert!(matches!(
            require_penalty(101),
            Err(ValidationError::PenaltyOutOfRange(101))
        ));

        assert!(require_voting_threshold(1).is_ok());
        assert!(require_voting_threshold(100).is_ok());
        assert!(matches!(
            require_voting_threshold(0),
            Err(ValidationError::ThresholdOutOfRange(0))
        ));
        assert!(matches!(
            require_voting_threshold(101),
            Err(ValidationError::ThresholdOutOfRange(101))
        ));
    }

    #[test]
    fn test_location_bounds() {
        assert!(require_location("NL").is_ok());
        assert!(matches!(
            require_location(""),
            Err(ValidationError::EmptyLocation)
        ));
        let long = "x".repeat(MAX_LOCATION_LEN + 1);
        assert!(matches!(
            require_location(&long),
            Err(ValidationError::LocationTooLong { .. })
        ));
    }
}

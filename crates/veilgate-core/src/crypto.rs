//! Commitment cryptography.
//!
//! An identity is registered under a commitment: a one-way digest of a secret
//! preimage. Revealing the preimage later proves ownership. Two independent
//! digests of the same preimage are stored so that a reveal must satisfy both:
//!
//! - [`Commitment`]: BLAKE3(preimage), the public identity handle
//! - [`PreimageDigest`]: SHA-256(preimage), the second reveal factor

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 32-byte identity commitment, computed as BLAKE3(preimage).
///
/// The commitment is the public, unlinkable handle of an identity. It is
/// unique across the identity registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(pub [u8; 32]);

impl Commitment {
    /// Derive the commitment for a preimage.
    pub fn derive(preimage: &[u8]) -> Self {
        Self(*blake3::hash(preimage).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Commitment {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte SHA-256 digest of a preimage.
///
/// Stored beside the commitment and checked independently during reveal. A
/// preimage that collides with one digest still fails the other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreimageDigest(pub [u8; 32]);

impl PreimageDigest {
    /// Derive the digest for a preimage.
    pub fn derive(preimage: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(preimage);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PreimageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PreimageDigest({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PreimageDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PreimageDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

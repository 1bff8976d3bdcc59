//! The AccessControl facade: both registries wired to one host ledger.
//!
//! The host owns one [`AccessControl`], keeps it durable across calls, and
//! serializes all access. The facade threads the per-call injections (clock
//! value, ledger, cross-registry lookup) so callers deal with one object;
//! each registry remains independently provisioned.

use bytes::Bytes;

use veilgate_access::{AccessGrant, AccessGrantRegistry, GrantId, GrantRequest, GrantUpdate};
use veilgate_core::{
    AccessType, AccountId, AdminConfig, BlockHeight, Commitment, FeeLedger, IdType,
};
use veilgate_identity::{Identity, IdentityId, IdentityRegistry};

use crate::error::Result;

/// Both registries plus the host's fee ledger.
pub struct AccessControl<L: FeeLedger> {
    identities: IdentityRegistry,
    grants: AccessGrantRegistry,
    ledger: L,
}

impl<L: FeeLedger> AccessControl<L> {
    /// Create the facade. Each registry is provisioned independently:
    /// assign each authority before fee-gated operations.
    pub fn new(identity_config: AdminConfig, grant_config: AdminConfig, ledger: L) -> Self {
        Self {
            identities: IdentityRegistry::new(identity_config),
            grants: AccessGrantRegistry::new(grant_config),
            ledger,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Assign the identity registry authority. Succeeds exactly once.
    pub fn set_identity_authority(&mut self, account: AccountId) -> Result<()> {
        Ok(self.identities.set_authority(account)?)
    }

    /// Change the identity creation fee.
    pub fn set_identity_fee(&mut self, fee: u64) -> Result<()> {
        Ok(self.identities.set_fee(fee)?)
    }

    /// Change the identity registry capacity.
    pub fn set_identity_capacity(&mut self, capacity: u64) -> Result<()> {
        Ok(self.identities.set_capacity(capacity)?)
    }

    /// Assign the access registry authority. Succeeds exactly once.
    pub fn set_grant_authority(&mut self, account: AccountId) -> Result<()> {
        Ok(self.grants.set_authority(account)?)
    }

    /// Change the grant fee.
    pub fn set_grant_fee(&mut self, fee: u64) -> Result<()> {
        Ok(self.grants.set_fee(fee)?)
    }

    /// Change the access registry capacity.
    pub fn set_grant_capacity(&mut self, capacity: u64) -> Result<()> {
        Ok(self.grants.set_capacity(capacity)?)
    }

    /// Change the minimum grant duration.
    pub fn set_min_grant_duration(&mut self, min: u64) -> Result<()> {
        Ok(self.grants.set_min_duration(min)?)
    }

    /// Change the maximum grant duration.
    pub fn set_max_grant_duration(&mut self, max: u64) -> Result<()> {
        Ok(self.grants.set_max_duration(max)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a new identity. Fee-gated.
    pub fn create_identity(
        &mut self,
        caller: AccountId,
        preimage: &[u8],
        metadata: Bytes,
        expiry: BlockHeight,
        id_type: IdType,
        now: BlockHeight,
    ) -> Result<IdentityId> {
        Ok(self.identities.create_identity(
            caller,
            preimage,
            metadata,
            expiry,
            id_type,
            now,
            &mut self.ledger,
        )?)
    }

    /// Replace an identity's metadata and expiry. Owner-only.
    pub fn update_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        metadata: Bytes,
        expiry: BlockHeight,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self
            .identities
            .update_identity(caller, id, metadata, expiry, now)?)
    }

    /// Prove ownership of an identity by revealing its preimage.
    pub fn reveal_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        preimage: &[u8],
        context: &str,
        now: BlockHeight,
    ) -> Result<Identity> {
        Ok(self
            .identities
            .reveal_identity(caller, id, preimage, context, now)?)
    }

    /// Blacklist an identity. Authority-only.
    pub fn blacklist_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        reason: &str,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self.identities.blacklist_identity(caller, id, reason, now)?)
    }

    /// Remove an identity from the blacklist. Authority-only.
    pub fn unblacklist_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self.identities.unblacklist_identity(caller, id, now)?)
    }

    /// Transfer identity ownership. Owner-only.
    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        new_owner: AccountId,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self
            .identities
            .transfer_ownership(caller, id, new_owner, now)?)
    }

    /// Ownership oracle for external collaborators. Never errors.
    pub fn verify_ownership(
        &self,
        caller: &AccountId,
        commitment: &Commitment,
        preimage: &[u8],
        now: BlockHeight,
    ) -> bool {
        self.identities
            .verify_ownership(caller, commitment, preimage, now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Grant Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an access grant for the identity behind the request's
    /// commitment. Fee-gated; the caller must own that identity.
    pub fn grant_access(
        &mut self,
        caller: AccountId,
        request: GrantRequest,
        now: BlockHeight,
    ) -> Result<GrantId> {
        Ok(self
            .grants
            .grant_access(caller, request, now, &self.identities, &mut self.ledger)?)
    }

    /// Replace a grant's duration and access type. Granter-only.
    pub fn update_grant(
        &mut self,
        caller: AccountId,
        commitment: Commitment,
        content_id: u64,
        duration: u64,
        access_type: AccessType,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self
            .grants
            .update_grant(caller, commitment, content_id, duration, access_type, now)?)
    }

    /// Revoke a grant. Granter-only, terminal.
    pub fn revoke_grant(
        &mut self,
        caller: AccountId,
        commitment: Commitment,
        content_id: u64,
        now: BlockHeight,
    ) -> Result<()> {
        Ok(self
            .grants
            .revoke_grant(caller, commitment, content_id, now)?)
    }

    /// Whether access to `content_id` is currently live for `commitment`.
    pub fn has_access(&self, commitment: &Commitment, content_id: u64, now: BlockHeight) -> bool {
        self.grants.has_access(commitment, content_id, now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Get an identity by handle.
    pub fn get_identity(&self, id: IdentityId) -> Option<&Identity> {
        self.identities.get_identity(id)
    }

    /// Get a grant by its composite key.
    pub fn get_grant(&self, commitment: &Commitment, content_id: u64) -> Option<&AccessGrant> {
        self.grants.get_grant(commitment, content_id)
    }

    /// The last update recorded for a commitment's indexed grant.
    pub fn grant_updates_for(&self, commitment: &Commitment) -> Option<&GrantUpdate> {
        self.grants.grant_updates_for(commitment)
    }

    /// The identity registry, for its read surface and event log.
    pub fn identities(&self) -> &IdentityRegistry {
        &self.identities
    }

    /// The access registry, for its read surface and event log.
    pub fn grants(&self) -> &AccessGrantRegistry {
        &self.grants
    }

    /// The host ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

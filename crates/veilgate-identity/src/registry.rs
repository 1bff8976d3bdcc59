//! The identity registry.
//!
//! An owned repository object: the host constructs one, keeps it durable
//! across calls, and serializes all access to it. Every operation takes the
//! caller and the call's clock value explicitly; fee-gated operations also
//! take the host's fee ledger. An operation resolves its preconditions in
//! order and returns on the first violation, before any state write.

use std::collections::HashMap;

use bytes::Bytes;

use veilgate_core::{
    validation, AccountId, AdminConfig, BlockHeight, Commitment, Event, FeeLedger, IdType,
    PreimageDigest,
};

use crate::error::{IdentityError, Result};
use crate::record::{BlacklistEntry, Identity, IdentityId, IdentityUpdate};

/// Registry of anonymous identities, indexed by id and by commitment.
#[derive(Debug)]
pub struct IdentityRegistry {
    config: AdminConfig,

    /// Identity records by handle.
    identities: HashMap<IdentityId, Identity>,

    /// Commitment uniqueness index.
    by_commitment: HashMap<Commitment, IdentityId>,

    /// Last owner-driven update per identity. Overwritten, not appended.
    updates: HashMap<IdentityId, IdentityUpdate>,

    /// Blacklist entries; presence implies blacklisted.
    blacklist: HashMap<IdentityId, BlacklistEntry>,

    /// Next handle to assign. Handles are never reused.
    next_id: u64,

    /// Append-only event log for external observers.
    events: Vec<Event>,
}

impl IdentityRegistry {
    /// Create an empty registry with the given configuration.
    pub fn new(config: AdminConfig) -> Self {
        Self {
            config,
            identities: HashMap::new(),
            by_commitment: HashMap::new(),
            updates: HashMap::new(),
            blacklist: HashMap::new(),
            next_id: 0,
            events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Assign the registry authority. Succeeds exactly once.
    pub fn set_authority(&mut self, account: AccountId) -> Result<()> {
        self.config.set_authority(account)?;
        self.emit(Event::new("authority-set").with("authority", account));
        Ok(())
    }

    /// Change the identity creation fee.
    pub fn set_fee(&mut self, fee: u64) -> Result<()> {
        self.config.set_fee(fee)?;
        self.emit(Event::new("fee-set").with("fee", fee));
        Ok(())
    }

    /// Change the registry capacity cap.
    pub fn set_capacity(&mut self, capacity: u64) -> Result<()> {
        self.config.set_capacity(capacity)?;
        self.emit(Event::new("capacity-set").with("capacity", capacity));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a new identity under the commitment derived from `preimage`.
    ///
    /// Transfers the configured fee from `caller` to the authority, then
    /// inserts the record with `status = true` and a zero reveal count.
    pub fn create_identity(
        &mut self,
        caller: AccountId,
        preimage: &[u8],
        metadata: Bytes,
        expiry: BlockHeight,
        id_type: IdType,
        now: BlockHeight,
        ledger: &mut dyn FeeLedger,
    ) -> Result<IdentityId> {
        // 1. Capacity
        if self.identities.len() as u64 >= self.config.capacity() {
            return Err(IdentityError::CapacityReached {
                capacity: self.config.capacity(),
            });
        }

        // 2. Preimage and derived digests
        validation::require_preimage(preimage)?;
        let commitment = Commitment::derive(preimage);
        let preimage_digest = PreimageDigest::derive(preimage);

        // 3. Input bounds
        validation::require_metadata(&metadata)?;
        validation::require_future_expiry(expiry, now)?;

        // 4. Commitment uniqueness
        if self.by_commitment.contains_key(&commitment) {
            return Err(IdentityError::CommitmentExists);
        }

        // 5. Fee, paid to the authority. Last fallible step before any write.
        let authority = *self.config.require_authority()?;
        ledger.transfer(self.config.fee(), &caller, &authority)?;

        let id = IdentityId(self.next_id);
        let identity = Identity {
            id,
            commitment,
            preimage_digest,
            metadata,
            expiry,
            timestamp: now,
            owner: caller,
            id_type,
            status: true,
            reveal_count: 0,
        };

        self.identities.insert(id, identity);
        self.by_commitment.insert(commitment, id);
        self.next_id += 1;

        self.emit(
            Event::new("identity-created")
                .with("id", id.0)
                .with("commitment", commitment)
                .with("owner", caller)
                .with("id-type", id_type.as_str())
                .with("expiry", expiry),
        );
        Ok(id)
    }

    /// Replace an identity's metadata and expiry.
    ///
    /// Owner-only, and only while the identity is unexpired and not
    /// blacklisted. Commitment, digests, owner, type, status, and reveal
    /// count are preserved.
    pub fn update_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        metadata: Bytes,
        expiry: BlockHeight,
        now: BlockHeight,
    ) -> Result<()> {
        let identity = self.active_owned(&caller, id, now)?;

        validation::require_metadata(&metadata)?;
        validation::require_future_expiry(expiry, now)?;

        let updated = Identity {
            metadata: metadata.clone(),
            expiry,
            timestamp: now,
            ..identity.clone()
        };
        self.identities.insert(id, updated);
        self.updates.insert(
            id,
            IdentityUpdate {
                metadata,
                expiry,
                timestamp: now,
                updated_by: caller,
            },
        );

        self.emit(
            Event::new("identity-updated")
                .with("id", id.0)
                .with("expiry", expiry)
                .with("updated-by", caller),
        );
        Ok(())
    }

    /// Prove ownership of an identity by revealing its preimage.
    ///
    /// Both digests must match: SHA-256 against the stored preimage digest
    /// and BLAKE3 against the stored commitment. A preimage satisfying only
    /// one factor fails. On success the reveal count is incremented and the
    /// post-increment record returned. `context` is carried only into the
    /// emitted event.
    pub fn reveal_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        preimage: &[u8],
        context: &str,
        now: BlockHeight,
    ) -> Result<Identity> {
        let identity = self.active_owned(&caller, id, now)?;

        if PreimageDigest::derive(preimage) != identity.preimage_digest {
            return Err(IdentityError::PreimageDigestMismatch);
        }
        if Commitment::derive(preimage) != identity.commitment {
            return Err(IdentityError::CommitmentMismatch);
        }

        let revealed = Identity {
            reveal_count: identity.reveal_count + 1,
            ..identity.clone()
        };
        self.identities.insert(id, revealed.clone());

        self.emit(
            Event::new("identity-revealed")
                .with("id", id.0)
                .with("reveal-count", revealed.reveal_count)
                .with("context", context),
        );
        Ok(revealed)
    }

    /// Transfer ownership to another account. Owner-only, while active.
    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        new_owner: AccountId,
        now: BlockHeight,
    ) -> Result<()> {
        let identity = self.active_owned(&caller, id, now)?;

        if new_owner.is_burn() {
            return Err(IdentityError::InvalidNewOwner);
        }

        let transferred = Identity {
            owner: new_owner,
            ..identity.clone()
        };
        self.identities.insert(id, transferred);

        self.emit(
            Event::new("ownership-transferred")
                .with("id", id.0)
                .with("previous-owner", caller)
                .with("new-owner", new_owner),
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Blacklist
    // ─────────────────────────────────────────────────────────────────────────

    /// Blacklist an identity. Authority-only; forces `status = false`.
    pub fn blacklist_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        reason: &str,
        now: BlockHeight,
    ) -> Result<()> {
        self.require_caller_is_authority(&caller)?;
        let identity = self
            .identities
            .get(&id)
            .ok_or(IdentityError::NotFound(id))?;
        validation::require_reason(reason)?;
        if self.blacklist.contains_key(&id) {
            return Err(IdentityError::AlreadyBlacklisted(id));
        }

        let flagged = Identity {
            status: false,
            ..identity.clone()
        };
        self.identities.insert(id, flagged);
        self.blacklist.insert(
            id,
            BlacklistEntry {
                reason: reason.to_string(),
                blacklisted_at: now,
                blacklisted_by: caller,
            },
        );

        self.emit(
            Event::new("identity-blacklisted")
                .with("id", id.0)
                .with("reason", reason),
        );
        Ok(())
    }

    /// Remove an identity from the blacklist. Authority-only; restores
    /// `status = true`.
    pub fn unblacklist_identity(
        &mut self,
        caller: AccountId,
        id: IdentityId,
        _now: BlockHeight,
    ) -> Result<()> {
        self.require_caller_is_authority(&caller)?;
        let identity = self
            .identities
            .get(&id)
            .ok_or(IdentityError::NotFound(id))?;
        if self.blacklist.remove(&id).is_none() {
            return Err(IdentityError::NotBlacklisted(id));
        }

        let restored = Identity {
            status: true,
            ..identity.clone()
        };
        self.identities.insert(id, restored);

        self.emit(Event::new("identity-unblacklisted").with("id", id.0));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Get an identity by handle.
    pub fn get_identity(&self, id: IdentityId) -> Option<&Identity> {
        self.identities.get(&id)
    }

    /// Get an identity by its public commitment.
    pub fn identity_by_commitment(&self, commitment: &Commitment) -> Option<&Identity> {
        self.by_commitment
            .get(commitment)
            .and_then(|id| self.identities.get(id))
    }

    /// Ownership oracle for external collaborators that hold a commitment
    /// and preimage but no handle. Never errors; any failed condition is
    /// `false`.
    pub fn verify_ownership(
        &self,
        caller: &AccountId,
        commitment: &Commitment,
        preimage: &[u8],
        now: BlockHeight,
    ) -> bool {
        if Commitment::derive(preimage) != *commitment {
            return false;
        }
        let Some(identity) = self.identity_by_commitment(commitment) else {
            return false;
        };
        if identity.is_expired(now) || self.blacklist.contains_key(&identity.id) {
            return false;
        }
        identity.owner == *caller
    }

    /// How many identities have ever been created.
    pub fn id_count(&self) -> u64 {
        self.next_id
    }

    /// Whether a commitment is registered.
    pub fn commitment_exists(&self, commitment: &Commitment) -> bool {
        self.by_commitment.contains_key(commitment)
    }

    /// The last update applied to an identity, if any.
    pub fn identity_updates(&self, id: IdentityId) -> Option<&IdentityUpdate> {
        self.updates.get(&id)
    }

    /// The blacklist entry for an identity, if blacklisted.
    pub fn blacklist_entry(&self, id: IdentityId) -> Option<&BlacklistEntry> {
        self.blacklist.get(&id)
    }

    /// Whether an identity is currently blacklisted.
    pub fn is_blacklisted(&self, id: IdentityId) -> bool {
        self.blacklist.contains_key(&id)
    }

    /// The append-only event log.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The registry configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve an identity for an owner-gated mutation: it must exist, be
    /// owned by `caller`, be unexpired, and not blacklisted.
    fn active_owned(
        &self,
        caller: &AccountId,
        id: IdentityId,
        now: BlockHeight,
    ) -> Result<&Identity> {
        let identity = self
            .identities
            .get(&id)
            .ok_or(IdentityError::NotFound(id))?;
        if identity.owner != *caller {
            return Err(IdentityError::NotOwner(id));
        }
        if identity.is_expired(now) {
            return Err(IdentityError::Expired(id));
        }
        if self.blacklist.contains_key(&id) {
            return Err(IdentityError::Blacklisted(id));
        }
        Ok(identity)
    }

    fn require_caller_is_authority(&self, caller: &AccountId) -> Result<()> {
        let authority = self.config.require_authority()?;
        if caller != authority {
            return Err(IdentityError::NotAuthority);
        }
        Ok(())
    }

    fn emit(&mut self, event: Event) {
        tracing::debug!(name = event.name, "identity registry event");
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veilgate_core::{ConfigError, LedgerError};
    use veilgate_testkit::{account, MemoryLedger};

    const FEE: u64 = 25;
    const CAPACITY: u64 = 8;

    fn authority() -> AccountId {
        account(0xaa)
    }

    fn alice() -> AccountId {
        account(0x01)
    }

    fn bob() -> AccountId {
        account(0x02)
    }

    fn provisioned() -> (IdentityRegistry, MemoryLedger) {
        let mut registry = IdentityRegistry::new(AdminConfig::new(FEE, CAPACITY));
        registry.set_authority(authority()).unwrap();
        let ledger = MemoryLedger::new()
            .with_balance(alice(), 1_000)
            .with_balance(bob(), 1_000);
        (registry, ledger)
    }

    fn create(
        registry: &mut IdentityRegistry,
        ledger: &mut MemoryLedger,
        owner: AccountId,
        preimage: &[u8],
        expiry: BlockHeight,
        now: BlockHeight,
    ) -> IdentityId {
        registry
            .create_identity(
                owner,
                preimage,
                Bytes::from_static(b"profile"),
                expiry,
                IdType::Anon,
                now,
                ledger,
            )
            .unwrap()
    }

    #[test]
    fn test_create_requires_authority() {
        let mut registry = IdentityRegistry::new(AdminConfig::new(FEE, CAPACITY));
        let mut ledger = MemoryLedger::new().with_balance(alice(), 1_000);

        let result = registry.create_identity(
            alice(),
            b"secret",
            Bytes::new(),
            100,
            IdType::Anon,
            0,
            &mut ledger,
        );
        assert!(matches!(
            result,
            Err(IdentityError::Config(ConfigError::AuthorityNotSet))
        ));
        assert_eq!(registry.id_count(), 0);
    }

    #[test]
    fn test_create_assigns_sequential_ids_and_pays_fee() {
        let (mut registry, mut ledger) = provisioned();

        let first = create(&mut registry, &mut ledger, alice(), b"secret-1", 100, 0);
        let second = create(&mut registry, &mut ledger, alice(), b"secret-2", 100, 0);

        assert_eq!(first, IdentityId(0));
        assert_eq!(second, IdentityId(1));
        assert_eq!(registry.id_count(), 2);

        let identity = registry.get_identity(first).unwrap();
        assert_eq!(identity.owner, alice());
        assert_eq!(identity.expiry, 100);
        assert!(identity.status);
        assert_eq!(identity.reveal_count, 0);

        assert_eq!(ledger.balance_of(&alice()), 1_000 - 2 * FEE);
        assert_eq!(ledger.balance_of(&authority()), 2 * FEE);
    }

    #[test]
    fn test_create_rejects_duplicate_commitment() {
        let (mut registry, mut ledger) = provisioned();
        create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        // same preimage, different everything else
        let result = registry.create_identity(
            bob(),
            b"secret",
            Bytes::from_static(b"other"),
            999,
            IdType::Verified,
            0,
            &mut ledger,
        );
        assert!(matches!(result, Err(IdentityError::CommitmentExists)));
        assert_eq!(registry.id_count(), 1);
    }

    #[test]
    fn test_create_validates_inputs_in_order() {
        let (mut registry, mut ledger) = provisioned();

        let result = registry.create_identity(
            alice(),
            b"",
            Bytes::new(),
            100,
            IdType::Anon,
            0,
            &mut ledger,
        );
        assert!(matches!(
            result,
            Err(IdentityError::Validation(
                veilgate_core::ValidationError::EmptyPreimage
            ))
        ));

        let oversized = Bytes::from(vec![0u8; 129]);
        let result = registry.create_identity(
            alice(),
            b"secret",
            oversized,
            100,
            IdType::Anon,
            0,
            &mut ledger,
        );
        assert!(matches!(
            result,
            Err(IdentityError::Validation(
                veilgate_core::ValidationError::MetadataTooLarge { .. }
            ))
        ));

        let result = registry.create_identity(
            alice(),
            b"secret",
            Bytes::new(),
            5,
            IdType::Anon,
            5,
            &mut ledger,
        );
        assert!(matches!(
            result,
            Err(IdentityError::Validation(
                veilgate_core::ValidationError::ExpiryNotInFuture { .. }
            ))
        ));
    }

    #[test]
    fn test_capacity_precedes_all_other_checks() {
        let mut registry = IdentityRegistry::new(AdminConfig::new(FEE, 1));
        registry.set_authority(authority()).unwrap();
        let mut ledger = MemoryLedger::new().with_balance(alice(), 1_000);

        create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        // even a call that is invalid in every other way reports capacity
        let result = registry.create_identity(
            alice(),
            b"",
            Bytes::from(vec![0u8; 129]),
            0,
            IdType::Anon,
            0,
            &mut ledger,
        );
        assert!(matches!(
            result,
            Err(IdentityError::CapacityReached { capacity: 1 })
        ));
    }

    #[test]
    fn test_fee_exactness_after_fee_change() {
        let (mut registry, mut ledger) = provisioned();
        create(&mut registry, &mut ledger, alice(), b"secret-1", 100, 0);
        assert_eq!(ledger.balance_of(&authority()), FEE);

        registry.set_fee(40).unwrap();
        create(&mut registry, &mut ledger, alice(), b"secret-2", 100, 0);
        assert_eq!(ledger.balance_of(&authority()), FEE + 40);
    }

    #[test]
    fn test_insufficient_balance_aborts_creation() {
        let (mut registry, _) = provisioned();
        let mut poor = MemoryLedger::new().with_balance(bob(), FEE - 1);

        let result = registry.create_identity(
            bob(),
            b"secret",
            Bytes::new(),
            100,
            IdType::Anon,
            0,
            &mut poor,
        );
        assert!(matches!(
            result,
            Err(IdentityError::Fee(LedgerError::InsufficientBalance { .. }))
        ));
        // nothing was written
        assert_eq!(registry.id_count(), 0);
        assert!(!registry.commitment_exists(&Commitment::derive(b"secret")));
        assert_eq!(poor.balance_of(&bob()), FEE - 1);
    }

    #[test]
    fn test_update_replaces_metadata_and_expiry_only() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        registry
            .update_identity(alice(), id, Bytes::from_static(b"v2"), 200, 10)
            .unwrap();

        let identity = registry.get_identity(id).unwrap();
        assert_eq!(identity.metadata, Bytes::from_static(b"v2"));
        assert_eq!(identity.expiry, 200);
        assert_eq!(identity.timestamp, 10);
        assert_eq!(identity.owner, alice());
        assert_eq!(identity.commitment, Commitment::derive(b"secret"));
        assert_eq!(identity.reveal_count, 0);

        let update = registry.identity_updates(id).unwrap();
        assert_eq!(update.updated_by, alice());
        assert_eq!(update.expiry, 200);

        // the update log is last-write-wins
        registry
            .update_identity(alice(), id, Bytes::from_static(b"v3"), 300, 20)
            .unwrap();
        let update = registry.identity_updates(id).unwrap();
        assert_eq!(update.metadata, Bytes::from_static(b"v3"));
        assert_eq!(update.timestamp, 20);
    }

    #[test]
    fn test_update_gated_on_owner_expiry_blacklist() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let result = registry.update_identity(bob(), id, Bytes::new(), 200, 10);
        assert!(matches!(result, Err(IdentityError::NotOwner(_))));

        registry
            .blacklist_identity(authority(), id, "abuse", 20)
            .unwrap();
        let result = registry.update_identity(alice(), id, Bytes::new(), 200, 30);
        assert!(matches!(result, Err(IdentityError::Blacklisted(_))));

        // expiry is checked before the blacklist
        let result = registry.update_identity(alice(), id, Bytes::new(), 200, 100);
        assert!(matches!(result, Err(IdentityError::Expired(_))));

        let missing = registry.update_identity(alice(), IdentityId(99), Bytes::new(), 200, 100);
        assert!(matches!(missing, Err(IdentityError::NotFound(_))));
    }

    #[test]
    fn test_reveal_requires_both_factors() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        // a wholly wrong preimage fails the first (digest) factor
        let result = registry.reveal_identity(alice(), id, b"wrong", "login", 10);
        assert!(matches!(result, Err(IdentityError::PreimageDigestMismatch)));

        // digest factor passes but commitment factor fails: tamper with the
        // stored commitment so only the second check can trip
        registry.identities.get_mut(&id).unwrap().commitment = Commitment::derive(b"other");
        let result = registry.reveal_identity(alice(), id, b"secret", "login", 10);
        assert!(matches!(result, Err(IdentityError::CommitmentMismatch)));
    }

    #[test]
    fn test_reveal_increments_count_and_returns_snapshot() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let revealed = registry
            .reveal_identity(alice(), id, b"secret", "kyc-check", 10)
            .unwrap();
        assert_eq!(revealed.reveal_count, 1);
        assert_eq!(registry.get_identity(id).unwrap().reveal_count, 1);

        let revealed = registry
            .reveal_identity(alice(), id, b"secret", "kyc-check", 11)
            .unwrap();
        assert_eq!(revealed.reveal_count, 2);

        // context lands in the event, not the record
        let event = registry.events().last().unwrap();
        assert_eq!(event.name, "identity-revealed");
        assert_eq!(
            event.field("context"),
            Some(&veilgate_core::EventValue::Text("kyc-check".into()))
        );
    }

    #[test]
    fn test_reveal_fails_after_expiry() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let result = registry.reveal_identity(alice(), id, b"secret", "late", 101);
        assert!(matches!(result, Err(IdentityError::Expired(_))));
        // the stored record still says active
        assert!(registry.get_identity(id).unwrap().status);
    }

    #[test]
    fn test_blacklist_round_trip() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        registry
            .blacklist_identity(authority(), id, "spam", 5)
            .unwrap();
        assert!(!registry.get_identity(id).unwrap().status);
        let entry = registry.blacklist_entry(id).unwrap();
        assert_eq!(entry.reason, "spam");
        assert_eq!(entry.blacklisted_at, 5);
        assert_eq!(entry.blacklisted_by, authority());

        let again = registry.blacklist_identity(authority(), id, "spam", 6);
        assert!(matches!(again, Err(IdentityError::AlreadyBlacklisted(_))));

        registry.unblacklist_identity(authority(), id, 7).unwrap();
        assert!(registry.get_identity(id).unwrap().status);
        assert!(registry.blacklist_entry(id).is_none());

        let again = registry.unblacklist_identity(authority(), id, 8);
        assert!(matches!(again, Err(IdentityError::NotBlacklisted(_))));
    }

    #[test]
    fn test_blacklist_is_authority_only() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let result = registry.blacklist_identity(alice(), id, "grudge", 5);
        assert!(matches!(result, Err(IdentityError::NotAuthority)));

        let result = registry.blacklist_identity(authority(), id, "", 5);
        assert!(matches!(
            result,
            Err(IdentityError::Validation(
                veilgate_core::ValidationError::EmptyReason
            ))
        ));

        let missing = registry.blacklist_identity(authority(), IdentityId(99), "spam", 5);
        assert!(matches!(missing, Err(IdentityError::NotFound(_))));
    }

    #[test]
    fn test_transfer_ownership() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let result = registry.transfer_ownership(alice(), id, AccountId::BURN, 10);
        assert!(matches!(result, Err(IdentityError::InvalidNewOwner)));

        registry.transfer_ownership(alice(), id, bob(), 10).unwrap();
        let identity = registry.get_identity(id).unwrap();
        assert_eq!(identity.owner, bob());
        // only the owner changed
        assert_eq!(identity.timestamp, 0);

        // the previous owner lost control
        let result = registry.transfer_ownership(alice(), id, alice(), 11);
        assert!(matches!(result, Err(IdentityError::NotOwner(_))));
        registry
            .update_identity(bob(), id, Bytes::new(), 200, 11)
            .unwrap();
    }

    #[test]
    fn test_verify_ownership_oracle() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);
        let commitment = Commitment::derive(b"secret");

        assert!(registry.verify_ownership(&alice(), &commitment, b"secret", 10));
        // wrong caller
        assert!(!registry.verify_ownership(&bob(), &commitment, b"secret", 10));
        // wrong preimage
        assert!(!registry.verify_ownership(&alice(), &commitment, b"wrong", 10));
        // unknown commitment
        let unknown = Commitment::derive(b"unknown");
        assert!(!registry.verify_ownership(&alice(), &unknown, b"unknown", 10));
        // expired
        assert!(!registry.verify_ownership(&alice(), &commitment, b"secret", 100));
        // blacklisted
        registry
            .blacklist_identity(authority(), id, "abuse", 10)
            .unwrap();
        assert!(!registry.verify_ownership(&alice(), &commitment, b"secret", 10));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use veilgate_testkit::generators;

        proptest! {
            #[test]
            fn prop_reveal_accepts_only_the_registered_preimage(
                preimage in generators::preimage(),
                other in generators::preimage(),
            ) {
                let (mut registry, mut ledger) = provisioned();
                let id = registry
                    .create_identity(
                        alice(),
                        &preimage,
                        Bytes::new(),
                        100,
                        IdType::Anon,
                        0,
                        &mut ledger,
                    )
                    .unwrap();

                prop_assert!(registry
                    .reveal_identity(alice(), id, &preimage, "probe", 1)
                    .is_ok());
                if other != preimage {
                    prop_assert!(registry
                        .reveal_identity(alice(), id, &other, "probe", 1)
                        .is_err());
                }
            }

            #[test]
            fn prop_expiry_is_live_everywhere(
                preimage in generators::preimage(),
                expiry in 1u64..1_000,
            ) {
                let (mut registry, mut ledger) = provisioned();
                let id = registry
                    .create_identity(
                        alice(),
                        &preimage,
                        Bytes::new(),
                        expiry,
                        IdType::Anon,
                        0,
                        &mut ledger,
                    )
                    .unwrap();
                let commitment = Commitment::derive(&preimage);

                prop_assert!(registry.verify_ownership(&alice(), &commitment, &preimage, expiry - 1));
                prop_assert!(!registry.verify_ownership(&alice(), &commitment, &preimage, expiry));
                prop_assert!(matches!(
                    registry.reveal_identity(alice(), id, &preimage, "probe", expiry),
                    Err(IdentityError::Expired(_))
                ));
            }
        }
    }

    #[test]
    fn test_lookup_by_commitment() {
        let (mut registry, mut ledger) = provisioned();
        let id = create(&mut registry, &mut ledger, alice(), b"secret", 100, 0);

        let commitment = Commitment::derive(b"secret");
        assert!(registry.commitment_exists(&commitment));
        assert_eq!(
            registry.identity_by_commitment(&commitment).unwrap().id,
            id
        );
        assert!(registry
            .identity_by_commitment(&Commitment::derive(b"unknown"))
            .is_none());
    }
}

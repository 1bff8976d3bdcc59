//! The access-grant registry.
//!
//! Grants authorize time-bounded access to a content id for the identity
//! behind a commitment. Creation is authorized through a live lookup into
//! the identity registry: the caller must be the current owner of the
//! identity the commitment resolves to. The lookup is injected per call as
//! an [`IdentityLookup`], stays synchronous, and participates in the same
//! atomic unit as the grant call.

use std::collections::HashMap;

use veilgate_core::{
    validation, AccessType, AccountId, AdminConfig, BlockHeight, Commitment, Event, FeeLedger,
};
use veilgate_identity::{Identity, IdentityRegistry};

use crate::error::{AccessError, Result};
use crate::record::{AccessGrant, GrantId, GrantRequest, GrantUpdate};

/// The slice of the identity registry the grant path consumes.
pub trait IdentityLookup {
    /// Resolve a commitment to its identity, if registered.
    fn identity_by_commitment(&self, commitment: &Commitment) -> Option<&Identity>;
}

impl IdentityLookup for IdentityRegistry {
    fn identity_by_commitment(&self, commitment: &Commitment) -> Option<&Identity> {
        IdentityRegistry::identity_by_commitment(self, commitment)
    }
}

/// Registry of access grants, keyed by (commitment, content id).
#[derive(Debug)]
pub struct AccessGrantRegistry {
    config: AdminConfig,

    /// Grant records by composite key. Unique per pair, never deleted.
    grants: HashMap<(Commitment, u64), AccessGrant>,

    /// Most recently created grant per commitment; the update log is keyed
    /// through this index.
    latest_grant: HashMap<Commitment, GrantId>,

    /// Last granter-driven update per indexed grant. Overwritten, not
    /// appended.
    updates: HashMap<GrantId, GrantUpdate>,

    /// Next handle to assign. Handles are never reused.
    next_id: u64,

    /// Append-only event log for external observers.
    events: Vec<Event>,
}

impl AccessGrantRegistry {
    /// Create an empty registry with the given configuration.
    pub fn new(config: AdminConfig) -> Self {
        Self {
            config,
            grants: HashMap::new(),
            latest_grant: HashMap::new(),
            updates: HashMap::new(),
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

    /// Change the grant fee.
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

    /// Change the minimum grant duration.
    pub fn set_min_duration(&mut self, min: u64) -> Result<()> {
        self.config.set_min_duration(min)?;
        self.emit(Event::new("min-duration-set").with("min-duration", min));
        Ok(())
    }

    /// Change the maximum grant duration.
    pub fn set_max_duration(&mut self, max: u64) -> Result<()> {
        self.config.set_max_duration(max)?;
        self.emit(Event::new("max-duration-set").with("max-duration", max));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Grant Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a grant for the identity behind `request.commitment`.
    ///
    /// The caller must own that identity, resolved live through
    /// `identities`. Transfers the configured fee from the caller to the
    /// authority, then inserts the record with `status = true`.
    pub fn grant_access(
        &mut self,
        caller: AccountId,
        request: GrantRequest,
        now: BlockHeight,
        identities: &dyn IdentityLookup,
        ledger: &mut dyn FeeLedger,
    ) -> Result<GrantId> {
        // 1. Capacity
        if self.grants.len() as u64 >= self.config.capacity() {
            return Err(AccessError::CapacityReached {
                capacity: self.config.capacity(),
            });
        }

        // 2. Input bounds
        validation::require_content_id(request.content_id)?;
        validation::require_duration(
            request.duration,
            self.config.min_duration(),
            self.config.max_duration(),
        )?;
        validation::require_penalty(request.penalty)?;
        validation::require_voting_threshold(request.voting_threshold)?;
        validation::require_location(&request.location)?;

        // 3. The caller must own the identity behind the commitment
        let identity = identities
            .identity_by_commitment(&request.commitment)
            .ok_or(AccessError::IdentityNotFound)?;
        if identity.owner != caller {
            return Err(AccessError::NotIdentityOwner);
        }

        // 4. One grant per (commitment, content) pair
        let key = (request.commitment, request.content_id);
        if self.grants.contains_key(&key) {
            return Err(AccessError::AlreadyGranted);
        }

        // 5. Fee, paid to the authority. Last fallible step before any write.
        let authority = *self.config.require_authority()?;
        ledger.transfer(self.config.fee(), &caller, &authority)?;

        let id = GrantId(self.next_id);
        let grant = AccessGrant {
            id,
            commitment: request.commitment,
            content_id: request.content_id,
            granted_at: now,
            expires_at: now + request.duration,
            timestamp: now,
            access_type: request.access_type,
            penalty: request.penalty,
            voting_threshold: request.voting_threshold,
            granter: caller,
            location: request.location,
            currency: request.currency,
            status: true,
        };

        let expires_at = grant.expires_at;
        self.grants.insert(key, grant);
        self.latest_grant.insert(request.commitment, id);
        self.next_id += 1;

        self.emit(
            Event::new("access-granted")
                .with("id", id.0)
                .with("commitment", request.commitment)
                .with("content-id", request.content_id)
                .with("granter", caller)
                .with("expires-at", expires_at),
        );
        Ok(id)
    }

    /// Replace a grant's duration and access type.
    ///
    /// Granter-only. The new duration is measured from the call's clock
    /// value. Penalty, threshold, location, currency, status, and granter
    /// are preserved. Neither the status flag nor the current expiry is
    /// re-checked here, so an expired grant gets a fresh window.
    pub fn update_grant(
        &mut self,
        caller: AccountId,
        commitment: Commitment,
        content_id: u64,
        duration: u64,
        access_type: AccessType,
        now: BlockHeight,
    ) -> Result<()> {
        let grant = self
            .grants
            .get(&(commitment, content_id))
            .ok_or(AccessError::GrantNotFound)?;
        if grant.granter != caller {
            return Err(AccessError::NotGranter);
        }
        validation::require_duration(
            duration,
            self.config.min_duration(),
            self.config.max_duration(),
        )?;

        let expires_at = now + duration;
        let updated = AccessGrant {
            expires_at,
            access_type,
            timestamp: now,
            ..grant.clone()
        };
        self.grants.insert((commitment, content_id), updated);

        // the update log is keyed through the commitment index, which holds
        // the most recently created grant for this commitment
        if let Some(log_id) = self.latest_grant.get(&commitment).copied() {
            self.updates.insert(
                log_id,
                GrantUpdate {
                    expires_at,
                    access_type,
                    timestamp: now,
                    updated_by: caller,
                },
            );
        }

        self.emit(
            Event::new("grant-updated")
                .with("commitment", commitment)
                .with("content-id", content_id)
                .with("expires-at", expires_at),
        );
        Ok(())
    }

    /// Revoke a grant. Granter-only, terminal; there is no reversal path.
    pub fn revoke_grant(
        &mut self,
        caller: AccountId,
        commitment: Commitment,
        content_id: u64,
        now: BlockHeight,
    ) -> Result<()> {
        let grant = self
            .grants
            .get(&(commitment, content_id))
            .ok_or(AccessError::GrantNotFound)?;
        if grant.granter != caller {
            return Err(AccessError::NotGranter);
        }

        let revoked = AccessGrant {
            status: false,
            ..grant.clone()
        };
        self.grants.insert((commitment, content_id), revoked);

        self.emit(
            Event::new("access-revoked")
                .with("commitment", commitment)
                .with("content-id", content_id)
                .with("at", now),
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether access to `content_id` is currently live for `commitment`.
    ///
    /// True iff a grant exists, has not been revoked, and has not expired.
    /// Never errors; absence and expiry both read as `false`.
    pub fn has_access(&self, commitment: &Commitment, content_id: u64, now: BlockHeight) -> bool {
        self.grants
            .get(&(*commitment, content_id))
            .is_some_and(|grant| grant.status && !grant.is_expired(now))
    }

    /// Get a grant by its composite key.
    pub fn get_grant(&self, commitment: &Commitment, content_id: u64) -> Option<&AccessGrant> {
        self.grants.get(&(*commitment, content_id))
    }

    /// The last update recorded for a commitment's indexed grant, if any.
    pub fn grant_updates_for(&self, commitment: &Commitment) -> Option<&GrantUpdate> {
        self.latest_grant
            .get(commitment)
            .and_then(|id| self.updates.get(id))
    }

    /// How many grants have ever been created.
    pub fn grant_count(&self) -> u64 {
        self.next_id
    }

    /// Whether a grant exists for the composite key, live or not.
    pub fn grant_exists(&self, commitment: &Commitment, content_id: u64) -> bool {
        self.grants.contains_key(&(*commitment, content_id))
    }

    /// The append-only event log.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The registry configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    fn emit(&mut self, event: Event) {
        tracing::debug!(name = event.name, "access registry event");
        self.events.push(event);
    }
}

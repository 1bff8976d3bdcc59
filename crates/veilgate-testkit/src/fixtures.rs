//! Test fixtures and helpers.
//!
//! Common setup code shared by the registry test suites.

use rand::RngCore;

use veilgate_core::{AccountId, AdminConfig};

use crate::ledger::MemoryLedger;

/// A deterministic account id from a one-byte tag.
pub fn account(tag: u8) -> AccountId {
    AccountId::from_bytes([tag; 32])
}

/// A fresh random account id.
pub fn random_account() -> AccountId {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    AccountId::from_bytes(bytes)
}

/// A deterministic preimage from a one-byte tag.
pub fn preimage(tag: u8) -> Vec<u8> {
    vec![tag; 16]
}

/// A config with its authority already assigned, ready for fee-gated calls.
pub fn provisioned_config(authority: AccountId, fee: u64, capacity: u64) -> AdminConfig {
    let mut config = AdminConfig::new(fee, capacity);
    config
        .set_authority(authority)
        .expect("fresh config accepts its first authority");
    config
}

/// A ledger funding every listed account with the same amount.
pub fn funded_ledger(accounts: &[AccountId], amount: u64) -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    for account in accounts {
        ledger.deposit(*account, amount);
    }
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_accounts_are_stable() {
        assert_eq!(account(7), account(7));
        assert_ne!(account(7), account(8));
        assert!(!account(7).is_burn());
    }

    #[test]
    fn test_random_accounts_differ() {
        assert_ne!(random_account(), random_account());
    }

    #[test]
    fn test_provisioned_config() {
        let config = provisioned_config(account(0xaa), 5, 10);
        assert_eq!(config.authority(), Some(&account(0xaa)));
        assert_eq!(config.fee(), 5);
        assert_eq!(config.capacity(), 10);
    }

    #[test]
    fn test_funded_ledger() {
        let ledger = funded_ledger(&[account(1), account(2)], 500);
        assert_eq!(ledger.balance_of(&account(1)), 500);
        assert_eq!(ledger.balance_of(&account(2)), 500);
        assert_eq!(ledger.balance_of(&account(3)), 0);
    }
}

//! In-memory implementation of the fee ledger.
//!
//! This is primarily for testing. It has the transfer semantics the
//! registries assume from the host ledger, with balances held in a map.

use std::collections::HashMap;

use veilgate_core::{AccountId, FeeLedger, LedgerError};

/// In-memory fee ledger. Accounts without an entry hold a zero balance.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: HashMap<AccountId, u64>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account balance.
    pub fn with_balance(mut self, account: AccountId, amount: u64) -> Self {
        self.balances.insert(account, amount);
        self
    }

    /// Credit an account.
    pub fn deposit(&mut self, account: AccountId, amount: u64) {
        *self.balances.entry(account).or_insert(0) += amount;
    }

    /// Current balance of an account.
    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

impl FeeLedger for MemoryLedger {
    fn transfer(
        &mut self,
        amount: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balance_of(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.to_string(),
                balance,
                required: amount,
            });
        }
        self.balances.insert(*from, balance - amount);
        *self.balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(tag: u8) -> AccountId {
        AccountId::from_bytes([tag; 32])
    }

    #[test]
    fn test_transfer_moves_balance() {
        let mut ledger = MemoryLedger::new().with_balance(acct(1), 100);
        ledger.transfer(40, &acct(1), &acct(2)).unwrap();
        assert_eq!(ledger.balance_of(&acct(1)), 60);
        assert_eq!(ledger.balance_of(&acct(2)), 40);
    }

    #[test]
    fn test_transfer_rejects_overdraft() {
        let mut ledger = MemoryLedger::new().with_balance(acct(1), 10);
        let result = ledger.transfer(11, &acct(1), &acct(2));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { balance: 10, .. })
        ));
        // balances untouched
        assert_eq!(ledger.balance_of(&acct(1)), 10);
        assert_eq!(ledger.balance_of(&acct(2)), 0);
    }

    #[test]
    fn test_zero_transfer_is_a_no_op() {
        let mut ledger = MemoryLedger::new();
        ledger.transfer(0, &acct(1), &acct(2)).unwrap();
        assert_eq!(ledger.balance_of(&acct(2)), 0);
    }
}

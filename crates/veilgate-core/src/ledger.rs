//! The fee-transfer capability.
//!
//! Fees are settled by the host's token ledger, which the core reaches only
//! through this trait. A transfer is assumed atomic with the enclosing
//! registry call: the registries invoke it after every other precondition has
//! passed and before the first state write, so a ledger failure aborts the
//! call with no partial effect.

use crate::account::AccountId;
use crate::error::LedgerError;

/// Host-supplied ledger used to move creation and grant fees.
pub trait FeeLedger {
    /// Move `amount` from `from` to `to`.
    ///
    /// A zero `amount` must succeed without touching balances. Fails with
    /// [`LedgerError::InsufficientBalance`] when the payer cannot cover the
    /// transfer.
    fn transfer(&mut self, amount: u64, from: &AccountId, to: &AccountId)
        -> Result<(), LedgerError>;
}

impl<L: FeeLedger + ?Sized> FeeLedger for &mut L {
    fn transfer(
        &mut self,
        amount: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), LedgerError> {
        (**self).transfer(amount, from, to)
    }
}

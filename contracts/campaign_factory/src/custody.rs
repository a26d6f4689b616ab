//! # Funds custody
//!
//! Pooled balance of the current round. The balance always equals the sum of
//! the contributions of the participants currently registered, and drops to
//! zero only through [`FundsCustody::payout`].
//!
//! Custody only does the bookkeeping. The token transfer to the recipient is
//! performed by the contract in the same invocation, so a failed transfer
//! reverts the zeroing together with everything else.

use soroban_sdk::contracttype;

use crate::Error;

/// Smallest accepted contribution: 0.001 of a 7-decimal Stellar asset.
pub const MIN_CONTRIBUTION: i128 = 10_000;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FundsCustody {
    pub balance: i128,
}

impl FundsCustody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the pool. Rejects anything under [`MIN_CONTRIBUTION`].
    pub fn deposit(&mut self, amount: i128) -> Result<(), Error> {
        if amount < MIN_CONTRIBUTION {
            return Err(Error::ContributionTooSmall);
        }
        self.balance = self.balance.checked_add(amount).ok_or(Error::Overflow)?;
        Ok(())
    }

    pub fn balance(&self) -> i128 {
        self.balance
    }

    /// Drain the pool, returning what it held.
    pub fn payout(&mut self) -> i128 {
        core::mem::take(&mut self.balance)
    }
}

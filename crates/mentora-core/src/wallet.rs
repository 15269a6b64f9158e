//! Wallet ledger types.
//!
//! The engine keeps its own ledger of account balances standing in for the
//! host platform's native value transfer. Settlement moves units between
//! wallets; a wallet that was never funded reads as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Balance record for a platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// The owning account.
    pub account_id: AccountId,

    /// Balance in the smallest payment unit.
    pub balance: u128,

    /// When the balance last changed.
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create an empty wallet.
    #[must_use]
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            balance: 0,
            updated_at: Utc::now(),
        }
    }

    /// Check if the wallet covers a debit of `amount`.
    #[must_use]
    pub fn has_sufficient_funds(&self, amount: u128) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wallet_is_empty() {
        let wallet = Wallet::new(AccountId::new("ahmed").unwrap());
        assert_eq!(wallet.balance, 0);
        assert!(!wallet.has_sufficient_funds(1));
        assert!(wallet.has_sufficient_funds(0));
    }

    #[test]
    fn sufficient_funds_boundary() {
        let mut wallet = Wallet::new(AccountId::new("ahmed").unwrap());
        wallet.balance = 7;
        assert!(wallet.has_sufficient_funds(6));
        assert!(wallet.has_sufficient_funds(7));
        assert!(!wallet.has_sufficient_funds(8));
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_cents;
use super::transaction::{Account, Transaction};

/// Maximum number of transactions kept in the history.
pub const HISTORY_LIMIT: usize = 25;

/// The complete persisted financial state: two balances, an optional
/// savings goal and the most recent transactions (newest first).
///
/// The whole value is written to storage after every accepted change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub checking_balance: Decimal,

    pub savings_balance: Decimal,

    #[serde(default)]
    pub savings_goal: Option<Decimal>,

    /// Newest first, capped at the configured history limit.
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    /// Zero balances, no goal, no history.
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn balance(&self, account: Account) -> Decimal {
        match account {
            Account::Checking => self.checking_balance,
            Account::Savings => self.savings_balance,
        }
    }

    pub(crate) fn set_balance(&mut self, account: Account, value: Decimal) {
        let value = round_cents(value);
        match account {
            Account::Checking => self.checking_balance = value,
            Account::Savings => self.savings_balance = value,
        }
    }

    /// Copy with every currency value rounded to cents.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.checking_balance = round_cents(self.checking_balance);
        self.savings_balance = round_cents(self.savings_balance);
        self.savings_goal = self.savings_goal.map(round_cents);
        self.transactions = self
            .transactions
            .into_iter()
            .map(Transaction::rounded)
            .collect();
        self
    }

    /// Checking plus savings, saturating at the ends of the decimal range.
    #[must_use]
    pub fn total_balance(&self) -> Decimal {
        self.checking_balance
            .checked_add(self.savings_balance)
            .unwrap_or(if self.checking_balance.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checking_balance.is_zero()
            && self.savings_balance.is_zero()
            && self.savings_goal.is_none()
            && self.transactions.is_empty()
    }
}

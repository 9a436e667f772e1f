use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::round_cents;

/// One of the two balances a ledger holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Checking,
    Savings,
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Account::Checking => write!(f, "checking"),
            Account::Savings => write!(f, "savings"),
        }
    }
}

/// What kind of movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transfer,
    Bills,
    Income,
    Goal,
    Adjustment,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Transfer => write!(f, "Transfer"),
            Category::Bills => write!(f, "Bills"),
            Category::Income => write!(f, "Income"),
            Category::Goal => write!(f, "Goal"),
            Category::Adjustment => write!(f, "Adjustment"),
        }
    }
}

/// Which account history a transaction shows up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Checking,
    Savings,
    #[default]
    Both,
}

impl From<Account> for Scope {
    fn from(account: Account) -> Self {
        match account {
            Account::Checking => Scope::Checking,
            Account::Savings => Scope::Savings,
        }
    }
}

/// History filter used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountView {
    #[default]
    All,
    Checking,
    Savings,
}

/// A single recorded ledger movement. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    description: String,
    amount: Decimal,
    category: Category,
    #[serde(default)]
    scope: Scope,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: Category,
        scope: Scope,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            description: description.into(),
            amount,
            category,
            scope,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Signed amount: negative for money leaving checking, zero for goal changes.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Copy with the amount rounded to cents. Ids, dates and text are kept.
    pub(crate) fn rounded(mut self) -> Self {
        self.amount = round_cents(self.amount);
        self
    }

    /// Whether this transaction belongs in the given history view.
    #[must_use]
    pub fn applies_to(&self, view: AccountView) -> bool {
        match view {
            AccountView::All => true,
            AccountView::Checking => matches!(self.scope, Scope::Checking | Scope::Both),
            AccountView::Savings => matches!(self.scope, Scope::Savings | Scope::Both),
        }
    }
}

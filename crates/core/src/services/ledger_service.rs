use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::ledger::{Ledger, HISTORY_LIMIT};
use crate::models::money::{parse_amount, round_cents};
use crate::models::transaction::{Account, Category, Scope, Transaction};

use super::history_service::HistoryService;

/// A user-initiated change to the ledger, carrying the raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerOperation {
    /// Move money from checking to savings.
    TransferToSavings { amount: String },
    /// Move money from savings to checking.
    TransferToChecking { amount: String },
    /// Pay a bill out of checking.
    PayBill { description: String, amount: String },
    /// Deposit new money into savings.
    AddMoney { amount: String },
    /// Set the savings goal. Balances are untouched.
    SetGoal { amount: String },
    /// Overwrite the checking balance.
    EditChecking { amount: String },
    /// Overwrite the savings balance.
    EditSavings { amount: String },
}

impl LedgerOperation {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LedgerOperation::TransferToSavings { .. } => "transfer_to_savings",
            LedgerOperation::TransferToChecking { .. } => "transfer_to_checking",
            LedgerOperation::PayBill { .. } => "pay_bill",
            LedgerOperation::AddMoney { .. } => "add_money",
            LedgerOperation::SetGoal { .. } => "set_goal",
            LedgerOperation::EditChecking { .. } => "edit_checking",
            LedgerOperation::EditSavings { .. } => "edit_savings",
        }
    }
}

/// Validates and applies balance operations.
///
/// Pure business logic, no I/O. `apply` never touches the ledger it is
/// given: it returns the next snapshot, which the caller persists and
/// swaps in. A rejected operation therefore cannot leave partial state.
pub struct LedgerService {
    history: HistoryService,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::with_history_limit(HISTORY_LIMIT)
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: HistoryService::new(limit),
        }
    }

    /// Validate `op` against `ledger` and build the resulting snapshot.
    ///
    /// Returns the new ledger and the transaction that was recorded.
    pub fn apply(
        &self,
        ledger: &Ledger,
        op: &LedgerOperation,
        date: NaiveDate,
    ) -> Result<(Ledger, Transaction), CoreError> {
        let mut next = ledger.clone();

        let tx = match op {
            LedgerOperation::TransferToSavings { amount: raw } => {
                let amount = parse_amount(raw)?;
                Self::ensure_funds(ledger, Account::Checking, amount)?;
                let checking = Self::in_range(ledger.checking_balance.checked_sub(amount), raw)?;
                let savings = Self::in_range(ledger.savings_balance.checked_add(amount), raw)?;
                next.set_balance(Account::Checking, checking);
                next.set_balance(Account::Savings, savings);
                Transaction::new(date, "Transfer to Savings", -amount, Category::Transfer, Scope::Both)
            }
            LedgerOperation::TransferToChecking { amount: raw } => {
                let amount = parse_amount(raw)?;
                Self::ensure_funds(ledger, Account::Savings, amount)?;
                let savings = Self::in_range(ledger.savings_balance.checked_sub(amount), raw)?;
                let checking = Self::in_range(ledger.checking_balance.checked_add(amount), raw)?;
                next.set_balance(Account::Savings, savings);
                next.set_balance(Account::Checking, checking);
                Transaction::new(date, "Transfer to Checking", amount, Category::Transfer, Scope::Both)
            }
            LedgerOperation::PayBill { description, amount: raw } => {
                let description = description.trim();
                if description.is_empty() {
                    return Err(CoreError::MissingDescription);
                }
                let amount = parse_amount(raw)?;
                Self::ensure_funds(ledger, Account::Checking, amount)?;
                let checking = Self::in_range(ledger.checking_balance.checked_sub(amount), raw)?;
                next.set_balance(Account::Checking, checking);
                Transaction::new(
                    date,
                    format!("Bill Payment: {description}"),
                    -amount,
                    Category::Bills,
                    Scope::Checking,
                )
            }
            LedgerOperation::AddMoney { amount: raw } => {
                let amount = parse_amount(raw)?;
                let savings = Self::in_range(ledger.savings_balance.checked_add(amount), raw)?;
                next.set_balance(Account::Savings, savings);
                Transaction::new(date, "Add Money to Savings", amount, Category::Income, Scope::Savings)
            }
            LedgerOperation::SetGoal { amount } => {
                let amount = parse_amount(amount)?;
                next.savings_goal = Some(amount);
                Transaction::new(date, "Set savings goal", Decimal::ZERO, Category::Goal, Scope::Savings)
            }
            LedgerOperation::EditChecking { amount } => {
                Self::correct_balance(ledger, &mut next, Account::Checking, amount, date)?
            }
            LedgerOperation::EditSavings { amount } => {
                Self::correct_balance(ledger, &mut next, Account::Savings, amount, date)?
            }
        };

        self.history.record(&mut next.transactions, tx.clone());

        debug!(
            operation = op.name(),
            amount = %tx.amount(),
            checking = %next.checking_balance,
            savings = %next.savings_balance,
            "ledger operation accepted"
        );

        Ok((next, tx))
    }

    /// Debits are only allowed up to the pre-mutation balance of the debited account.
    fn ensure_funds(ledger: &Ledger, account: Account, amount: Decimal) -> Result<(), CoreError> {
        let available = ledger.balance(account);
        if amount > available {
            return Err(CoreError::InsufficientFunds {
                account,
                requested: amount,
                available,
            });
        }
        Ok(())
    }

    /// A balance that would fall outside the decimal range rejects the input.
    fn in_range(result: Option<Decimal>, raw: &str) -> Result<Decimal, CoreError> {
        result.ok_or_else(|| CoreError::InvalidAmount(raw.to_string()))
    }

    /// Overwrite one balance and record the delta from the value in `current`.
    fn correct_balance(
        current: &Ledger,
        next: &mut Ledger,
        account: Account,
        raw_amount: &str,
        date: NaiveDate,
    ) -> Result<Transaction, CoreError> {
        let new_balance = parse_amount(raw_amount)?;
        let delta = round_cents(Self::in_range(
            new_balance.checked_sub(current.balance(account)),
            raw_amount,
        )?);
        next.set_balance(account, new_balance);
        Ok(Transaction::new(
            date,
            "Balance correction",
            delta,
            Category::Adjustment,
            account.into(),
        ))
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

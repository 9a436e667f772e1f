use crate::models::ledger::HISTORY_LIMIT;
use crate::models::transaction::{AccountView, Transaction};

/// Maintains the capped, newest-first transaction history.
pub struct HistoryService {
    limit: usize,
}

impl HistoryService {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Put `tx` at the front and drop whatever falls past the limit.
    ///
    /// Order is insertion order only; dates are never compared.
    pub fn record(&self, transactions: &mut Vec<Transaction>, tx: Transaction) {
        transactions.insert(0, tx);
        transactions.truncate(self.limit);
    }

    /// Transactions visible in `view`, newest first.
    pub fn filter<'a>(&self, transactions: &'a [Transaction], view: AccountView) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| t.applies_to(view)).collect()
    }

    /// The `n` most recent transactions visible in `view`.
    pub fn latest<'a>(
        &self,
        transactions: &'a [Transaction],
        view: AccountView,
        n: usize,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.applies_to(view))
            .take(n)
            .collect()
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

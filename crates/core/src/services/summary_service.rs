use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ledger::Ledger;
use crate::models::money::format_currency;
use crate::models::summary::{FormattedSummary, LedgerSummary};

/// Builds the view model behind the balances panel and goal progress bar.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, ledger: &Ledger) -> LedgerSummary {
        let goal = ledger.savings_goal.filter(|g| *g > Decimal::ZERO);

        let goal_progress_percent = goal.map(|g| {
            let ratio = ledger
                .savings_balance
                .checked_div(g)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED));
            match ratio {
                Some(pct) => pct
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                    .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
                // Out of range: the balance dwarfs the goal in one direction or the other.
                None if ledger.savings_balance.is_sign_negative() => Decimal::ZERO,
                None => Decimal::ONE_HUNDRED,
            }
        });

        let remaining_to_goal = goal.map(|g| {
            g.checked_sub(ledger.savings_balance)
                .unwrap_or(Decimal::MAX)
                .max(Decimal::ZERO)
        });

        LedgerSummary {
            checking_balance: ledger.checking_balance,
            savings_balance: ledger.savings_balance,
            total_balance: ledger.total_balance(),
            savings_goal: ledger.savings_goal,
            goal_progress_percent,
            remaining_to_goal,
            transaction_count: ledger.transactions.len(),
        }
    }

    pub fn format(&self, summary: &LedgerSummary, symbol: &str) -> FormattedSummary {
        FormattedSummary {
            checking_balance: format_currency(summary.checking_balance, symbol),
            savings_balance: format_currency(summary.savings_balance, symbol),
            total_balance: format_currency(summary.total_balance, symbol),
            savings_goal: summary.savings_goal.map(|g| format_currency(g, symbol)),
            goal_progress: summary.goal_progress_percent.map(|p| format!("{p:.1}%")),
            remaining_to_goal: summary.remaining_to_goal.map(|r| format_currency(r, symbol)),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

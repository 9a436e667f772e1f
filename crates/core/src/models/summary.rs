use rust_decimal::Decimal;
use serde::Serialize;

/// Numbers behind the balances panel and the goal progress bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub checking_balance: Decimal,
    pub savings_balance: Decimal,
    pub total_balance: Decimal,
    pub savings_goal: Option<Decimal>,

    /// Savings as a percentage of the goal, one decimal, capped at 100.
    pub goal_progress_percent: Option<Decimal>,

    /// How much is still missing to reach the goal (never negative).
    pub remaining_to_goal: Option<Decimal>,

    pub transaction_count: usize,
}

/// The same summary rendered as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSummary {
    pub checking_balance: String,
    pub savings_balance: String,
    pub total_balance: String,
    pub savings_goal: Option<String>,
    pub goal_progress: Option<String>,
    pub remaining_to_goal: Option<String>,
}

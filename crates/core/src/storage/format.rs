use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::session::Session;

/// Serialize a ledger as the pretty-printed JSON document used both for
/// the persisted snapshot and for exports.
///
/// ```text
/// { "checkingBalance": 425.0, "savingsBalance": 1000.0,
///   "savingsGoal": null, "transactions": [ ... ] }
/// ```
pub fn encode_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
}

/// Parse and shape-check a ledger document.
///
/// Amounts must be JSON numbers (numeric strings are rejected) and
/// transaction ids must be non-empty. A history longer than `history_limit`
/// is cut down to its newest entries. The result is rounded to cents.
pub fn decode_ledger(json: &str, history_limit: usize) -> Result<Ledger, CoreError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CoreError::CorruptState(format!("not valid JSON: {e}")))?;
    check_shape(&value)?;

    let mut ledger: Ledger = serde_json::from_value(value)
        .map_err(|e| CoreError::CorruptState(format!("malformed ledger document: {e}")))?;

    // Newest first, so only the oldest entries fall off.
    ledger.transactions.truncate(history_limit);

    if let Some(pos) = ledger.transactions.iter().position(|t| t.id().trim().is_empty()) {
        return Err(CoreError::CorruptState(format!(
            "transaction at position {pos} has an empty id"
        )));
    }

    Ok(ledger.normalized())
}

/// Type checks the decimal crate's deserializer would let through.
fn check_shape(value: &Value) -> Result<(), CoreError> {
    let root = value
        .as_object()
        .ok_or_else(|| CoreError::CorruptState("ledger document is not an object".into()))?;

    for field in ["checkingBalance", "savingsBalance"] {
        if !root.get(field).is_some_and(Value::is_number) {
            return Err(CoreError::CorruptState(format!("'{field}' must be a number")));
        }
    }
    if let Some(goal) = root.get("savingsGoal") {
        if !(goal.is_null() || goal.is_number()) {
            return Err(CoreError::CorruptState(
                "'savingsGoal' must be a number or null".into(),
            ));
        }
    }

    let transactions = root
        .get("transactions")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::CorruptState("'transactions' must be an array".into()))?;
    for (pos, tx) in transactions.iter().enumerate() {
        if !tx.get("amount").is_some_and(Value::is_number) {
            return Err(CoreError::CorruptState(format!(
                "transaction at position {pos} has a non-numeric amount"
            )));
        }
    }
    Ok(())
}

pub fn encode_session(session: &Session) -> Result<String, CoreError> {
    serde_json::to_string(session)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
}

pub fn decode_session(json: &str) -> Result<Session, CoreError> {
    let session: Session = serde_json::from_str(json)
        .map_err(|e| CoreError::CorruptState(format!("malformed session marker: {e}")))?;
    if session.name.trim().is_empty() {
        return Err(CoreError::CorruptState("session marker has an empty name".into()));
    }
    Ok(session)
}

/// File name for an export made on `date`: `{prefix}-YYYY-MM-DD.json`.
#[must_use]
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}

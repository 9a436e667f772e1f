use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CoreError;

/// Number of decimal places every stored currency value is kept at.
pub const CENTS_SCALE: u32 = 2;

/// Round a currency value to whole cents, midpoint away from zero.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a user-entered amount.
///
/// Thousands separators (`,`) are stripped before parsing. Plain and
/// scientific notation are accepted. Anything that does not parse, or
/// parses to zero or less, is rejected. Accepted values are rounded to
/// cents.
pub fn parse_amount(raw: &str) -> Result<Decimal, CoreError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(CoreError::InvalidAmount(raw.to_string()));
    }

    let parsed = if cleaned.contains(['e', 'E']) {
        Decimal::from_scientific(&cleaned)
    } else {
        Decimal::from_str(&cleaned)
    }
    .map_err(|_| CoreError::InvalidAmount(raw.to_string()))?;

    if parsed <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(raw.to_string()));
    }

    Ok(round_cents(parsed))
}

/// Format a value for display: `$1,234.50`, `-$75.00`.
#[must_use]
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round_cents(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{symbol}{grouped}.{cents}")
}

//! Validation helpers for the StockMaster platform

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one draft form field (quantity or cost amount).
///
/// A field qualifies only when it is non-empty, parses as a decimal number,
/// and is non-negative; anything else disqualifies the draft it belongs to.
pub fn parse_draft_field(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = Decimal::from_str(trimmed).ok()?;
    if value < Decimal::ZERO {
        return None;
    }
    Some(value)
}

/// Normalize an email for case-insensitive directory lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

//! Naira amount input parsing.

#[cfg(test)]
#[path = "amount_test.rs"]
mod amount_test;

use crate::state::wallet::KOBO_PER_NAIRA;

/// Parse a user-typed naira amount (`"1,250.5"`, `"₦300"`) into kobo.
///
/// Returns `None` for empty input, more than two decimal places, or
/// anything that is not a plain non-negative number.
#[must_use]
pub fn parse_naira(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₦')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if fraction.len() > 2 || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let naira = digits_value(whole)?;
    let kobo = match fraction.len() {
        1 => digits_value(fraction)? * 10,
        _ => digits_value(fraction)?,
    };
    naira.checked_mul(KOBO_PER_NAIRA)?.checked_add(kobo)
}

/// Value of an all-ASCII-digit string; empty is zero, overflow is `None`.
fn digits_value(digits: &str) -> Option<u64> {
    digits
        .bytes()
        .try_fold(0u64, |acc, b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')))
}

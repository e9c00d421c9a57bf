//! Nearest-strike selection
//!
//! Picks the contract whose strike is closest to a desired value. Ties go to
//! the row that appears first, so the result depends only on the input order.

use crate::core::{DerivError, DerivResult, OptionQuote};

/// Index of the strike closest to `desired`, first occurrence on ties.
/// Non-finite strikes never win.
pub fn nearest_index<T>(rows: &[T], desired: f64, strike_of: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, row) in rows.iter().enumerate() {
        let distance = (strike_of(row) - desired).abs();
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}

/// The quote whose strike is closest to `desired`
pub fn nearest_quote(rows: &[OptionQuote], desired: f64) -> DerivResult<&OptionQuote> {
    if rows.is_empty() {
        return Err(DerivError::no_contracts("option chain side is empty"));
    }
    if !desired.is_finite() {
        return Err(DerivError::invalid_input(format!(
            "desired strike must be a number, got {}",
            desired
        )));
    }

    nearest_index(rows, desired, |q| q.strike)
        .map(|i| &rows[i])
        .ok_or_else(|| DerivError::no_contracts("no row has a usable strike"))
}

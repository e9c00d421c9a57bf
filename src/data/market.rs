//! Market-data source abstraction.
//!
//! The Delta workflow only ever reads through this trait, so the live
//! client and the in-memory mock are interchangeable.

use chrono::NaiveDate;

use crate::core::{DerivResult, QuoteChain};

/// Read-only access to quotes, price history and option chains.
///
/// Implementations hold no per-request state; every method may be called
/// any number of times.
pub trait MarketData {
    /// Most recent closing price of `symbol`
    fn spot_price(&self, symbol: &str) -> DerivResult<f64>;

    /// Daily closes over the last `days` calendar days, oldest first
    fn closing_prices(&self, symbol: &str, days: u32) -> DerivResult<Vec<f64>>;

    /// Listed option expirations, nearest first
    fn expirations(&self, symbol: &str) -> DerivResult<Vec<NaiveDate>>;

    /// Calls and puts for one expiration
    fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> DerivResult<QuoteChain>;
}

impl<M: MarketData + ?Sized> MarketData for &M {
    fn spot_price(&self, symbol: &str) -> DerivResult<f64> {
        (**self).spot_price(symbol)
    }

    fn closing_prices(&self, symbol: &str, days: u32) -> DerivResult<Vec<f64>> {
        (**self).closing_prices(symbol, days)
    }

    fn expirations(&self, symbol: &str) -> DerivResult<Vec<NaiveDate>> {
        (**self).expirations(symbol)
    }

    fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> DerivResult<QuoteChain> {
        (**self).option_chain(symbol, expiry)
    }
}

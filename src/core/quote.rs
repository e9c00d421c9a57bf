//! Option quote data
//!
//! One row of an option chain as the market-data source reports it. Every
//! field other than the strike may be missing, so each is an explicit
//! `Option` and callers check presence rather than probing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::option::OptionType;

/// Option market quote (a single contract row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Exchange contract symbol, e.g. "AAPL250620C00200000"
    pub contract_symbol: Option<String>,
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Bid price
    pub bid: Option<f64>,
    /// Ask price
    pub ask: Option<f64>,
    /// Last traded price
    pub last_price: Option<f64>,
    /// Trading volume
    pub volume: Option<u64>,
    /// Open interest
    pub open_interest: Option<u64>,
    /// Implied volatility as reported by the source
    pub implied_vol: Option<f64>,
}

impl OptionQuote {
    /// Create a bare row with only the contract terms filled in
    pub fn new(strike: f64, expiry: NaiveDate, option_type: OptionType) -> Self {
        Self {
            contract_symbol: None,
            strike,
            expiry,
            option_type,
            bid: None,
            ask: None,
            last_price: None,
            volume: None,
            open_interest: None,
            implied_vol: None,
        }
    }

    /// Mid price when both sides are quoted with a positive ask
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) if bid >= 0.0 && ask > 0.0 => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Implied vol, ignoring the zero/NaN placeholders some feeds emit
    pub fn usable_implied_vol(&self) -> Option<f64> {
        self.implied_vol.filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Calls and puts for a single expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteChain {
    /// Underlying symbol
    pub underlying: String,
    /// Expiry date
    pub expiry: NaiveDate,
    /// Call rows, in source order
    pub calls: Vec<OptionQuote>,
    /// Put rows, in source order
    pub puts: Vec<OptionQuote>,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl QuoteChain {
    pub fn new(underlying: impl Into<String>, expiry: NaiveDate) -> Self {
        Self {
            underlying: underlying.into(),
            expiry,
            calls: Vec::new(),
            puts: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Add a call quote
    pub fn add_call(&mut self, quote: OptionQuote) {
        self.calls.push(quote);
    }

    /// Add a put quote
    pub fn add_put(&mut self, quote: OptionQuote) {
        self.puts.push(quote);
    }

    /// Route a quote to the side matching its option type
    pub fn add(&mut self, quote: OptionQuote) {
        match quote.option_type {
            OptionType::Call => self.add_call(quote),
            OptionType::Put => self.add_put(quote),
        }
    }

    /// Rows for one side
    pub fn side(&self, option_type: OptionType) -> &[OptionQuote] {
        match option_type {
            OptionType::Call => &self.calls,
            OptionType::Put => &self.puts,
        }
    }

    /// Strikes on one side, in source order
    pub fn strikes(&self, option_type: OptionType) -> Vec<f64> {
        self.side(option_type).iter().map(|q| q.strike).collect()
    }

    /// Strike of the middle row of one side (the default pick for a lookup)
    pub fn middle_strike(&self, option_type: OptionType) -> Option<f64> {
        let rows = self.side(option_type);
        rows.get(rows.len() / 2).map(|q| q.strike)
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.puts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn test_quote_mid() {
        let mut quote = OptionQuote::new(500.0, expiry(), OptionType::Call);
        assert!(quote.mid().is_none());

        quote.bid = Some(10.0);
        quote.ask = Some(10.5);
        assert!((quote.mid().unwrap() - 10.25).abs() < 1e-12);

        // No-quote placeholders
        quote.bid = Some(0.0);
        quote.ask = Some(0.0);
        assert!(quote.mid().is_none());
    }

    #[test]
    fn test_usable_implied_vol() {
        let mut quote = OptionQuote::new(500.0, expiry(), OptionType::Put);
        assert_eq!(quote.usable_implied_vol(), None);

        quote.implied_vol = Some(0.0);
        assert_eq!(quote.usable_implied_vol(), None);

        quote.implied_vol = Some(0.27);
        assert_eq!(quote.usable_implied_vol(), Some(0.27));
    }

    #[test]
    fn test_chain_routes_by_side() {
        let mut chain = QuoteChain::new("QQQ", expiry());
        for strike in [95.0, 100.0, 105.0] {
            chain.add(OptionQuote::new(strike, expiry(), OptionType::Call));
        }
        chain.add(OptionQuote::new(90.0, expiry(), OptionType::Put));

        assert_eq!(chain.strikes(OptionType::Call), vec![95.0, 100.0, 105.0]);
        assert_eq!(chain.strikes(OptionType::Put), vec![90.0]);
        assert_eq!(chain.middle_strike(OptionType::Call), Some(100.0));
        assert_eq!(chain.middle_strike(OptionType::Put), Some(90.0));
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_middle_strike_of_even_side_rounds_up() {
        let mut chain = QuoteChain::new("QQQ", expiry());
        for strike in [90.0, 95.0, 100.0, 105.0] {
            chain.add_put(OptionQuote::new(strike, expiry(), OptionType::Put));
        }
        assert_eq!(chain.middle_strike(OptionType::Put), Some(100.0));
        assert_eq!(chain.middle_strike(OptionType::Call), None);
    }
}

//! In-memory market data for testing.
//!
//! Serves canned spot prices, closing-price histories, expirations and
//! chains, and counts requests so tests can assert which data a workflow
//! actually pulled.
//!
//! # Example
//!
//! ```rust
//! use derivlab::data::{MarketData, MockMarketData};
//!
//! let market = MockMarketData::new()
//!     .with_spot("AAPL", 231.5)
//!     .with_history("AAPL", vec![225.0, 228.0, 231.5]);
//!
//! assert_eq!(market.spot_price("AAPL").unwrap(), 231.5);
//! assert_eq!(market.spot_requests(), 1);
//! ```

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::market::MarketData;
use crate::core::{DerivError, DerivResult, QuoteChain};

/// Mock market-data source
#[derive(Debug, Default)]
pub struct MockMarketData {
    spots: HashMap<String, f64>,
    histories: HashMap<String, Vec<f64>>,
    expirations: HashMap<String, Vec<NaiveDate>>,
    chains: HashMap<(String, NaiveDate), QuoteChain>,
    failing: Option<String>,
    spot_requests: AtomicUsize,
    history_requests: AtomicUsize,
    chain_requests: AtomicUsize,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spot(mut self, symbol: &str, price: f64) -> Self {
        self.spots.insert(symbol.to_string(), price);
        self
    }

    pub fn with_history(mut self, symbol: &str, closes: Vec<f64>) -> Self {
        self.histories.insert(symbol.to_string(), closes);
        self
    }

    pub fn with_expirations(mut self, symbol: &str, dates: Vec<NaiveDate>) -> Self {
        self.expirations.insert(symbol.to_string(), dates);
        self
    }

    /// Register a chain; its expiry is also added to the symbol's listing
    pub fn with_chain(mut self, chain: QuoteChain) -> Self {
        let dates = self.expirations.entry(chain.underlying.clone()).or_default();
        if !dates.contains(&chain.expiry) {
            dates.push(chain.expiry);
            dates.sort();
        }
        self.chains
            .insert((chain.underlying.clone(), chain.expiry), chain);
        self
    }

    /// Make every request fail the way an unreachable source does
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failing = Some(reason.into());
        self
    }

    pub fn spot_requests(&self) -> usize {
        self.spot_requests.load(Ordering::Relaxed)
    }

    pub fn history_requests(&self) -> usize {
        self.history_requests.load(Ordering::Relaxed)
    }

    pub fn chain_requests(&self) -> usize {
        self.chain_requests.load(Ordering::Relaxed)
    }

    fn check_failure(&self) -> DerivResult<()> {
        match &self.failing {
            Some(reason) => Err(DerivError::no_market_data(reason.clone())),
            None => Ok(()),
        }
    }
}

impl MarketData for MockMarketData {
    fn spot_price(&self, symbol: &str) -> DerivResult<f64> {
        self.spot_requests.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        self.spots
            .get(symbol)
            .copied()
            .ok_or_else(|| DerivError::no_market_data(format!("No price data for {}", symbol)))
    }

    fn closing_prices(&self, symbol: &str, days: u32) -> DerivResult<Vec<f64>> {
        self.history_requests.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        let closes = self
            .histories
            .get(symbol)
            .ok_or_else(|| DerivError::no_market_data(format!("No price history for {}", symbol)))?;

        let keep = closes.len().min(days as usize);
        Ok(closes[closes.len() - keep..].to_vec())
    }

    fn expirations(&self, symbol: &str) -> DerivResult<Vec<NaiveDate>> {
        self.check_failure()?;
        Ok(self.expirations.get(symbol).cloned().unwrap_or_default())
    }

    fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> DerivResult<QuoteChain> {
        self.chain_requests.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        self.chains
            .get(&(symbol.to_string(), expiry))
            .cloned()
            .ok_or_else(|| {
                DerivError::no_market_data(format!("No option chain for {} {}", symbol, expiry))
            })
    }
}

//! Historical volatility proxy
//!
//! Stands in for implied volatility when the caller has none: the sample
//! standard deviation of daily percentage returns over a trailing window,
//! annualized and floored. Nothing is solved against option prices, so the
//! result is only an approximation of what the market implies.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::core::{DerivError, DerivResult};

/// Annualization basis for daily returns
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Lowest volatility the estimator will hand out
pub const DEFAULT_VOL_FLOOR: f64 = 0.10;

/// Where the volatility used for a Delta came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolSource {
    /// Supplied by the caller
    User,
    /// Estimated from closing prices, after flooring
    Historical,
}

/// Historical volatility estimator
#[derive(Debug, Clone, Copy)]
pub struct HistoricalVol {
    /// Annualization factor (trading days per year)
    pub trading_days: f64,
    /// Minimum returned volatility
    pub floor: f64,
}

impl Default for HistoricalVol {
    fn default() -> Self {
        Self {
            trading_days: TRADING_DAYS_PER_YEAR,
            floor: DEFAULT_VOL_FLOOR,
        }
    }
}

impl HistoricalVol {
    pub fn new(trading_days: f64, floor: f64) -> Self {
        Self { trading_days, floor }
    }

    /// Annualized volatility of `closes` (oldest first), before flooring
    pub fn raw(&self, closes: &[f64]) -> DerivResult<f64> {
        let returns = pct_returns(closes);
        if returns.len() < 2 {
            return Err(DerivError::no_market_data(format!(
                "need at least 3 closing prices to estimate volatility, got {}",
                closes.len()
            )));
        }

        let daily = returns.iter().std_dev();
        if !daily.is_finite() {
            return Err(DerivError::data("volatility estimate is not a number"));
        }

        Ok(daily * self.trading_days.sqrt())
    }

    /// Annualized volatility of `closes`, never below the floor
    pub fn estimate(&self, closes: &[f64]) -> DerivResult<f64> {
        let raw = self.raw(closes)?;
        let vol = raw.max(self.floor);
        if vol > raw {
            tracing::debug!("historical vol {:.4} below floor, using {:.4}", raw, vol);
        }
        Ok(vol)
    }
}

/// Day-over-day percentage changes; pairs containing a non-positive or
/// non-finite close are skipped.
pub fn pct_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w.iter().all(|c| c.is_finite() && *c > 0.0))
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}

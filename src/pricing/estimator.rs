//! Delta lookup workflow
//!
//! Ties the market-data source to the Black-Scholes Delta:
//! - `estimate`: Delta for one contract given ticker, expiry, strike, side
//! - `lookup`: the full interactive flow (pick an expiration, find the
//!   nearest listed strike, estimate, classify)
//!
//! The clock is always passed in, and nothing is cached between calls.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::nearest::nearest_quote;
use crate::config::DerivConfig;
use crate::core::{DerivError, DerivResult, Moneyness, OptionType};
use crate::data::MarketData;
use crate::models::{black_scholes, VolSource};

const SECONDS_PER_DAY: i64 = 86_400;

/// Year fraction from `now` to the start of `expiry`, counted in whole days
/// (partial days round down, so an expiry later today or tomorrow morning
/// already counts as zero).
pub fn time_to_expiry(expiry: NaiveDate, now: NaiveDateTime, days_per_year: f64) -> f64 {
    let remaining = expiry.and_time(NaiveTime::MIN) - now;
    let days = remaining.num_seconds().div_euclid(SECONDS_PER_DAY);
    days as f64 / days_per_year
}

/// Result of a single Delta estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaEstimate {
    pub delta: f64,
    /// Spot price used
    pub spot: f64,
    pub strike: f64,
    pub expiry: NaiveDate,
    pub option_type: OptionType,
    /// Years to expiry
    pub time_to_expiry: f64,
    pub volatility: f64,
    pub vol_source: VolSource,
    pub risk_free_rate: f64,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRequest {
    pub ticker: String,
    pub option_type: OptionType,
    /// Expiration to use; the nearest listed one when absent
    pub expiry: Option<NaiveDate>,
    /// Desired strike; the middle of the chain when absent
    pub strike: Option<f64>,
    /// Volatility override; historical proxy when absent
    pub volatility: Option<f64>,
}

impl DeltaRequest {
    pub fn new(ticker: impl Into<String>, option_type: OptionType) -> Self {
        Self {
            ticker: ticker.into(),
            option_type,
            expiry: None,
            strike: None,
            volatility: None,
        }
    }

    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }
}

/// Everything shown for a completed lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub ticker: String,
    /// Expirations offered for selection
    pub expirations: Vec<NaiveDate>,
    /// Strike the user asked for (or the default pick)
    pub requested_strike: f64,
    /// Contract symbol of the matched row
    pub contract_symbol: Option<String>,
    pub estimate: DeltaEstimate,
    pub moneyness: Moneyness,
    /// Row data as reported by the source
    pub implied_vol: Option<f64>,
    pub last_price: Option<f64>,
    /// Bid/ask midpoint when both sides are quoted
    pub mid_price: Option<f64>,
    pub open_interest: Option<u64>,
}

/// Delta estimator over a market-data source
pub struct DeltaEstimator<'a, M: MarketData> {
    market: &'a M,
    config: &'a DerivConfig,
}

impl<'a, M: MarketData> DeltaEstimator<'a, M> {
    pub fn new(market: &'a M, config: &'a DerivConfig) -> Self {
        Self { market, config }
    }

    /// Delta for one contract.
    ///
    /// Fails with `ExpiredContract` when `expiry` is not at least a full day
    /// after `now`, before any market data is requested.
    pub fn estimate(
        &self,
        ticker: &str,
        expiry: NaiveDate,
        strike: f64,
        option_type: OptionType,
        volatility: Option<f64>,
        now: NaiveDateTime,
    ) -> DerivResult<DeltaEstimate> {
        let time = time_to_expiry(expiry, now, self.config.days_per_year);
        if time <= 0.0 {
            return Err(DerivError::ExpiredContract { expiry });
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(DerivError::invalid_input(format!(
                "strike must be a positive number, got {}",
                strike
            )));
        }
        if let Some(vol) = volatility {
            if !vol.is_finite() || vol <= 0.0 {
                return Err(DerivError::invalid_input(format!(
                    "volatility must be a positive number, got {}",
                    vol
                )));
            }
        }

        let spot = self.market.spot_price(ticker)?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(DerivError::no_market_data(format!(
                "{} reported an unusable price {}",
                ticker, spot
            )));
        }

        let (volatility, vol_source) = match volatility {
            Some(vol) => (vol, VolSource::User),
            None => {
                let closes = self.market.closing_prices(ticker, self.config.history_days)?;
                let vol = self.config.historical_vol().estimate(&closes)?;
                (vol, VolSource::Historical)
            }
        };

        let rate = self.config.risk_free_rate;
        let delta = black_scholes::delta(spot, strike, rate, volatility, time, option_type)?;

        tracing::debug!(
            "{} {} {} K={} S={:.2} T={:.4} vol={:.4} -> delta {:.4}",
            ticker, expiry, option_type, strike, spot, time, volatility, delta
        );

        Ok(DeltaEstimate {
            delta,
            spot,
            strike,
            expiry,
            option_type,
            time_to_expiry: time,
            volatility,
            vol_source,
            risk_free_rate: rate,
        })
    }

    /// Full lookup: listed expirations, chain, nearest strike, Delta.
    pub fn lookup(&self, request: &DeltaRequest, now: NaiveDateTime) -> DerivResult<DeltaReport> {
        let ticker = request.ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(DerivError::invalid_input("ticker must not be empty"));
        }

        let listed = self.market.expirations(&ticker)?;
        if listed.is_empty() {
            return Err(DerivError::no_contracts(format!(
                "{} has no listed options",
                ticker
            )));
        }

        let expiry = match request.expiry {
            Some(date) if listed.contains(&date) => date,
            Some(date) => {
                return Err(DerivError::invalid_input(format!(
                    "{} has no options expiring {}",
                    ticker, date
                )))
            }
            None => listed[0],
        };

        let chain = self.market.option_chain(&ticker, expiry)?;
        let rows = chain.side(request.option_type);
        if rows.is_empty() {
            return Err(DerivError::no_contracts(format!(
                "no {} contracts for {} expiring {}",
                request.option_type.as_str(),
                ticker,
                expiry
            )));
        }

        let requested_strike = match request.strike {
            Some(strike) => strike,
            None => chain
                .middle_strike(request.option_type)
                .ok_or_else(|| DerivError::no_contracts("option chain side is empty"))?,
        };
        let row = nearest_quote(rows, requested_strike)?;

        tracing::info!(
            "{} {} {}: requested strike {}, matched {}",
            ticker, expiry, request.option_type, requested_strike, row.strike
        );

        let estimate = self.estimate(
            &ticker,
            expiry,
            row.strike,
            request.option_type,
            request.volatility,
            now,
        )?;

        let mut expirations = listed;
        expirations.truncate(self.config.max_expirations);

        Ok(DeltaReport {
            ticker,
            expirations,
            requested_strike,
            contract_symbol: row.contract_symbol.clone(),
            moneyness: Moneyness::from_delta(estimate.delta),
            implied_vol: row.usable_implied_vol(),
            last_price: row.last_price.filter(|p| *p > 0.0),
            mid_price: row.mid(),
            open_interest: row.open_interest.filter(|oi| *oi > 0),
            estimate,
        })
    }
}

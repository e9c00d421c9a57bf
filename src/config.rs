//! Runtime configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{DerivError, DerivResult};
use crate::models::volatility::{DEFAULT_VOL_FLOOR, TRADING_DAYS_PER_YEAR};
use crate::models::HistoricalVol;

/// Most retries a single market-data request may make
pub const MAX_RETRIES: u32 = 3;

/// Configuration for the Delta lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivConfig {
    /// Risk-free rate used in d1
    pub risk_free_rate: f64,
    /// Lowest historical volatility handed to the model
    pub volatility_floor: f64,
    /// Calendar days of closing prices used for the volatility proxy
    pub history_days: u32,
    /// Annualization factor for daily returns
    pub trading_days_per_year: f64,
    /// Day count for time to expiry
    pub days_per_year: f64,
    /// Per-request HTTP timeout
    pub http_timeout_secs: u64,
    /// Extra attempts after a failed request
    pub max_retries: u32,
    /// Expirations offered to the user
    pub max_expirations: usize,
    /// Market-data host, e.g. "https://query1.finance.yahoo.com"
    pub base_url: String,
    pub user_agent: String,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for DerivConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            volatility_floor: DEFAULT_VOL_FLOOR,
            history_days: 30,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            days_per_year: 365.0,
            http_timeout_secs: 10,
            max_retries: 1,
            max_expirations: 12,
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl DerivConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DerivResult<Self> {
        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> DerivResult<Self> {
        let config: Self = toml::from_str(s)
            .map_err(|e| DerivError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> DerivResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> DerivResult<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(DerivError::config("risk_free_rate must be a number"));
        }
        if !(self.volatility_floor.is_finite() && self.volatility_floor > 0.0) {
            return Err(DerivError::config("volatility_floor must be positive"));
        }
        if self.history_days < 3 {
            return Err(DerivError::config("history_days must be at least 3"));
        }
        if !(self.trading_days_per_year > 0.0 && self.days_per_year > 0.0) {
            return Err(DerivError::config("day counts must be positive"));
        }
        if self.http_timeout_secs == 0 {
            return Err(DerivError::config("http_timeout_secs must be non-zero"));
        }
        if self.max_retries > MAX_RETRIES {
            return Err(DerivError::config(format!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES, self.max_retries
            )));
        }
        if self.max_expirations == 0 {
            return Err(DerivError::config("max_expirations must be non-zero"));
        }
        if self.base_url.trim().is_empty() {
            return Err(DerivError::config("base_url must not be empty"));
        }
        Ok(())
    }

    /// Volatility estimator built from these settings
    pub fn historical_vol(&self) -> HistoricalVol {
        HistoricalVol::new(self.trading_days_per_year, self.volatility_floor)
    }
}

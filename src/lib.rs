//! # derivlab - Option Delta lookup and derivative formula deck
//!
//! Two small tools sharing one crate:
//!
//! - **Delta lookup**: fetch spot, price history and the option chain for a
//!   ticker, pick the listed contract nearest a desired strike and evaluate
//!   its Black-Scholes Delta.
//! - **Formula deck**: a fixed catalog of calculus differentiation rules,
//!   a random flashcard drill and a five-question practice quiz.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: closed-form Delta with an explicit at-expiry convention
//! - **Historical vol**: trailing daily-return volatility, annualized and floored
//! - **Market data**: `MarketData` trait, Yahoo Finance client, in-memory mock
//! - **Estimator**: the lookup workflow and its error taxonomy
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use derivlab::prelude::*;
//!
//! let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
//! let mut chain = QuoteChain::new("AAPL", expiry);
//! for strike in [90.0, 95.0, 100.0, 105.0] {
//!     chain.add_call(OptionQuote::new(strike, expiry, OptionType::Call));
//! }
//!
//! let market = MockMarketData::new()
//!     .with_spot("AAPL", 98.0)
//!     .with_history("AAPL", vec![96.0, 99.0, 97.5, 98.0, 101.0, 98.0])
//!     .with_chain(chain);
//! let config = DerivConfig::default();
//!
//! let now = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let request = DeltaRequest::new("AAPL", OptionType::Call).with_strike(97.0);
//! let report = DeltaEstimator::new(&market, &config).lookup(&request, now).unwrap();
//!
//! assert_eq!(report.estimate.strike, 95.0);
//! assert!(report.estimate.delta > 0.5);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Solve for implied volatility (historical volatility stands in)
//! - Stream prices or keep any state between lookups
//! - Price options (Delta only)

pub mod catalog;
pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        DerivError, DerivResult, Moneyness, OptionQuote, OptionType, QuoteChain,
    };

    pub use crate::config::DerivConfig;

    // Data fetching
    pub use crate::data::{MarketData, MockMarketData, YahooClient};

    // Models
    pub use crate::models::{delta as bs_delta, norm_cdf, HistoricalVol, VolSource};

    // Delta lookup
    pub use crate::pricing::{
        nearest_quote, DeltaEstimate, DeltaEstimator, DeltaReport, DeltaRequest,
    };

    // Formula deck
    pub use crate::catalog::{
        FlashcardAction, FlashcardSession, FormulaCatalog, FormulaEntry, QuizSession,
    };
}

// Re-export main types at crate root
pub use crate::config::DerivConfig;
pub use crate::core::{DerivError, DerivResult};

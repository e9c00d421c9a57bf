//! Pricing models
//!
//! - black_scholes: closed-form Delta
//! - volatility: historical volatility proxy

pub mod black_scholes;
pub mod volatility;

pub use black_scholes::{d1, delta, expired_delta, norm_cdf, norm_pdf};
pub use volatility::{HistoricalVol, VolSource};

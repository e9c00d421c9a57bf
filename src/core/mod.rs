//! Core data types
//!
//! Defines fundamental types:
//! - OptionType / Moneyness: contract side and Delta-based classification
//! - OptionQuote / QuoteChain: option-chain rows for one expiry
//! - DerivError: crate-wide error

pub mod option;
pub mod quote;
pub mod error;

pub use option::*;
pub use quote::*;
pub use error::*;

//! Market data
//!
//! Handles:
//! - The `MarketData` trait the Delta workflow reads through
//! - Yahoo Finance HTTP client
//! - In-memory mock source for tests and offline demos

pub mod market;
pub mod yahoo;
pub mod mock;

pub use market::*;
pub use yahoo::*;
pub use mock::*;

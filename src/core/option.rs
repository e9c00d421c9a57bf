//! Option side and moneyness
//!
//! The two small enums every Delta lookup carries around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DerivError;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = DerivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(DerivError::invalid_input(format!(
                "unknown option type '{}', expected call or put",
                other
            ))),
        }
    }
}

/// Qualitative moneyness bucket read off the size of Delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneyness {
    /// Deep in the money
    ITM,
    /// Near the money
    ATM,
    /// Out of the money
    OTM,
}

impl Moneyness {
    /// |delta| above this is in the money
    pub const ITM_THRESHOLD: f64 = 0.7;
    /// |delta| above this (and not ITM) is at the money
    pub const ATM_THRESHOLD: f64 = 0.3;

    /// Classify by Delta magnitude; calls and puts share thresholds.
    pub fn from_delta(delta: f64) -> Self {
        let magnitude = delta.abs();
        if magnitude > Self::ITM_THRESHOLD {
            Moneyness::ITM
        } else if magnitude > Self::ATM_THRESHOLD {
            Moneyness::ATM
        } else {
            Moneyness::OTM
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Moneyness::ITM => "deep in the money (ITM)",
            Moneyness::ATM => "at the money (ATM)",
            Moneyness::OTM => "deep out of the money (OTM)",
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Moneyness::ITM => "ITM",
            Moneyness::ATM => "ATM",
            Moneyness::OTM => "OTM",
        };
        write!(f, "{}", label)
    }
}

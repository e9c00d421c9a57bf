//! Error types for derivlab

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DerivError {
    #[error("Contract expired: {expiry} is not in the future")]
    ExpiredContract { expiry: NaiveDate },

    #[error("No market data: {0}")]
    NoMarketData(String),

    #[error("No contracts available: {0}")]
    NoContractsAvailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client could not be set up
    #[error("Network error: {0}")]
    Network(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type DerivResult<T> = Result<T, DerivError>;

impl DerivError {
    pub fn no_market_data(msg: impl Into<String>) -> Self {
        Self::NoMarketData(msg.into())
    }

    pub fn no_contracts(msg: impl Into<String>) -> Self {
        Self::NoContractsAvailable(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for the failures a user fixes by changing their request,
    /// as opposed to the data source misbehaving.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::ExpiredContract { .. }
                | Self::NoContractsAvailable(_)
                | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_message_names_date() {
        let err = DerivError::ExpiredContract {
            expiry: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Contract expired: 2024-03-15 is not in the future"
        );
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_network_is_not_user_facing() {
        assert!(!DerivError::Network("timed out".into()).is_user_facing());
        assert!(!DerivError::no_market_data("bad ticker").is_user_facing());
    }
}

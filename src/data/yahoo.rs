//! Yahoo Finance data fetcher
//!
//! Spot prices and daily closes come from the chart endpoint, expirations
//! and chains from the options endpoint. Both are unofficial APIs.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::market::MarketData;
use crate::config::DerivConfig;
use crate::core::{DerivError, DerivResult, OptionQuote, OptionType, QuoteChain};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
    max_retries: u32,
}

impl YahooClient {
    /// Build a client with the timeout, retry count and host from `config`
    pub fn new(config: &DerivConfig) -> DerivResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| DerivError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Transport failures and 5xx responses are retried up to
    /// `max_retries` times; a 4xx means the symbol or date is unknown and
    /// fails at once. Either way the caller gets `NoMarketData` with the
    /// last cause in the message.
    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> DerivResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let attempts = self.max_retries.saturating_add(1);
        let mut last_err = format!("no request sent to {}", url);

        for attempt in 1..=attempts {
            tracing::debug!("GET {} {:?} (attempt {}/{})", url, query, attempt, attempts);

            match self.client.get(&url).query(query).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .text()
                            .map_err(|e| DerivError::no_market_data(format!("{}: {}", url, e)))?;
                        return serde_json::from_str(&body).map_err(|e| {
                            DerivError::data(format!("Failed to parse response from {}: {}", url, e))
                        });
                    }
                    if status.is_client_error() {
                        return Err(DerivError::no_market_data(format!(
                            "{} returned {}",
                            url, status
                        )));
                    }
                    last_err = format!("{} returned {}", url, status);
                }
                Err(e) => last_err = e.to_string(),
            }

            if attempt < attempts {
                tracing::warn!("Request to {} failed ({}), retrying", url, last_err);
            }
        }

        Err(DerivError::no_market_data(format!(
            "giving up after {} attempt(s): {}",
            attempts, last_err
        )))
    }

    /// Chart data for a symbol over a query window
    fn get_chart(&self, symbol: &str, window: &[(&str, String)]) -> DerivResult<YahooChartData> {
        let mut query = vec![("interval", "1d".to_string())];
        query.extend_from_slice(window);

        let response: YahooChartResponse =
            self.get_json(&format!("/v8/finance/chart/{}", symbol), &query)?;
        chart_result(response, symbol)
    }

    /// Raw options payload, optionally for a specific expiration
    fn get_options(&self, symbol: &str, expiry: Option<NaiveDate>) -> DerivResult<YahooOptionChainData> {
        let query: Vec<(&str, String)> = expiry
            .map(|d| vec![("date", expiry_timestamp(d).to_string())])
            .unwrap_or_default();

        let response: YahooOptionsResponse =
            self.get_json(&format!("/v7/finance/options/{}", symbol), &query)?;
        options_result(response, symbol)
    }
}

impl MarketData for YahooClient {
    fn spot_price(&self, symbol: &str) -> DerivResult<f64> {
        let chart = self.get_chart(symbol, &[("range", "1d".to_string())])?;
        latest_price(&chart, symbol)
    }

    fn closing_prices(&self, symbol: &str, days: u32) -> DerivResult<Vec<f64>> {
        let end = Utc::now();
        let start = end - Duration::days(i64::from(days));
        let chart = self.get_chart(
            symbol,
            &[
                ("period1", start.timestamp().to_string()),
                ("period2", end.timestamp().to_string()),
            ],
        )?;

        let closes = closes(&chart);
        tracing::info!("Fetched {} daily closes for {}", closes.len(), symbol);
        Ok(closes)
    }

    fn expirations(&self, symbol: &str) -> DerivResult<Vec<NaiveDate>> {
        let data = self.get_options(symbol, None)?;
        Ok(expiration_dates(&data))
    }

    fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> DerivResult<QuoteChain> {
        let data = self.get_options(symbol, Some(expiry))?;
        let chain = build_chain(data, symbol, expiry);
        tracing::info!(
            "Chain for {} {}: {} calls, {} puts",
            symbol,
            expiry,
            chain.calls.len(),
            chain.puts.len()
        );
        Ok(chain)
    }
}

/// Unix timestamp Yahoo uses to key an expiration (00:00 UTC)
pub fn expiry_timestamp(expiry: NaiveDate) -> i64 {
    expiry.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn chart_result(response: YahooChartResponse, symbol: &str) -> DerivResult<YahooChartData> {
    if let Some(err) = response.chart.error {
        return Err(DerivError::no_market_data(format!(
            "{}: {}",
            symbol,
            err.description.unwrap_or(err.code)
        )));
    }
    response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| DerivError::no_market_data(format!("No price data returned for {}", symbol)))
}

/// Non-null closes, oldest first
fn closes(chart: &YahooChartData) -> Vec<f64> {
    chart
        .indicators
        .quote
        .first()
        .map(|q| q.close.iter().flatten().copied().filter(|c| c.is_finite()).collect())
        .unwrap_or_default()
}

/// Last close, falling back to the quoted market price
fn latest_price(chart: &YahooChartData, symbol: &str) -> DerivResult<f64> {
    closes(chart)
        .last()
        .copied()
        .or(chart.meta.regular_market_price)
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| DerivError::no_market_data(format!("No closing price for {}", symbol)))
}

fn options_result(response: YahooOptionsResponse, symbol: &str) -> DerivResult<YahooOptionChainData> {
    if let Some(err) = response.option_chain.error {
        return Err(DerivError::no_market_data(format!(
            "{}: {}",
            symbol,
            err.description.unwrap_or(err.code)
        )));
    }
    response
        .option_chain
        .result
        .into_iter()
        .next()
        .ok_or_else(|| DerivError::no_market_data(format!("No options data returned for {}", symbol)))
}

fn expiration_dates(data: &YahooOptionChainData) -> Vec<NaiveDate> {
    data.expiration_dates
        .iter()
        .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
        .collect()
}

fn build_chain(data: YahooOptionChainData, symbol: &str, expiry: NaiveDate) -> QuoteChain {
    let mut chain = QuoteChain::new(symbol, expiry);

    if let Some(options) = data.options.into_iter().next() {
        for call in options.calls {
            if let Some(quote) = convert_option_quote(call, expiry, OptionType::Call) {
                chain.add_call(quote);
            }
        }
        for put in options.puts {
            if let Some(quote) = convert_option_quote(put, expiry, OptionType::Put) {
                chain.add_put(quote);
            }
        }
    }

    chain
}

/// Convert Yahoo option data to our quote format; rows without a strike are dropped
fn convert_option_quote(data: YahooOptionData, expiry: NaiveDate, option_type: OptionType) -> Option<OptionQuote> {
    let strike = data.strike.filter(|k| k.is_finite() && *k > 0.0)?;

    let mut quote = OptionQuote::new(strike, expiry, option_type);
    quote.contract_symbol = data.contract_symbol;
    quote.bid = data.bid;
    quote.ask = data.ask;
    quote.last_price = data.last_price;
    quote.volume = data.volume.and_then(|v| u64::try_from(v).ok());
    quote.open_interest = data.open_interest.and_then(|oi| u64::try_from(oi).ok());
    quote.implied_vol = data.implied_volatility;

    Some(quote)
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    meta: YahooChartMeta,
    #[serde(default)]
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooIndicatorQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooIndicatorQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: YahooOptionChain,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChain {
    #[serde(default)]
    result: Vec<YahooOptionChainData>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChainData {
    #[serde(rename = "expirationDates", default)]
    expiration_dates: Vec<i64>,
    #[serde(default)]
    options: Vec<YahooOptions>,
}

#[derive(Debug, Deserialize)]
struct YahooOptions {
    #[serde(default)]
    calls: Vec<YahooOptionData>,
    #[serde(default)]
    puts: Vec<YahooOptionData>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionData {
    #[serde(rename = "contractSymbol")]
    contract_symbol: Option<String>,
    strike: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
    volume: Option<i64>,
    #[serde(rename = "openInterest")]
    open_interest: Option<i64>,
    #[serde(rename = "impliedVolatility")]
    implied_volatility: Option<f64>,
}

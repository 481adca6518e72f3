//! Yahoo Finance spot quotes
//!
//! Fetches delayed equity/ETF quotes from Yahoo Finance's unofficial
//! API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SpotProvider;
use crate::core::{BsmError, BsmResult};

/// Spot quote for an underlying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com/v7/finance".to_string(),
        }
    }

    /// Get the current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> BsmResult<SpotQuote> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsmError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsmError::Data(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| BsmError::data(format!("No quote data for {symbol}")))?;

        tracing::debug!(symbol, price = result.regular_market_price, "fetched spot quote");

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: result.regular_market_price,
            bid: result.bid,
            ask: result.ask,
            timestamp: Utc::now(),
        })
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotProvider for YahooClient {
    fn fetch_spot(&self, symbol: &str) -> BsmResult<f64> {
        Ok(self.get_quote(symbol)?.price)
    }
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponseBody,
}

#[derive(Debug, Deserialize)]
struct QuoteResponseBody {
    result: Vec<QuoteResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResult {
    regular_market_price: f64,
    bid: Option<f64>,
    ask: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_response_parsing() {
        let payload = r#"{
            "quoteResponse": {
                "result": [
                    {"regularMarketPrice": 187.42, "bid": 187.40, "ask": 187.45}
                ],
                "error": null
            }
        }"#;

        let parsed: YahooQuoteResponse = serde_json::from_str(payload).unwrap();
        let quote = &parsed.quote_response.result[0];
        assert_eq!(quote.regular_market_price, 187.42);
        assert_eq!(quote.bid, Some(187.40));
    }

    #[test]
    fn test_quote_response_without_book() {
        let payload = r#"{
            "quoteResponse": {
                "result": [{"regularMarketPrice": 42.0}],
                "error": null
            }
        }"#;

        let parsed: YahooQuoteResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.quote_response.result[0].bid, None);
    }
}

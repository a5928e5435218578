//! Coinbase spot-price oracle
//!
//! Fetches the spot price for a currency pair from Coinbase's public REST
//! API and scales the decimal amount into fixed-point units.

use super::PriceOracle;
use crate::trend::{price_from_decimal, PriceObservation};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Coinbase API base URL
pub const COINBASE_API_URL: &str = "https://api.coinbase.com/v2";

/// Configuration for the Coinbase oracle
#[derive(Debug, Clone)]
pub struct CoinbaseConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Currency pair, e.g. "ETH-USD"
    pub pair: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinbaseConfig {
    fn default() -> Self {
        Self {
            base_url: COINBASE_API_URL.to_string(),
            pair: "ETH-USD".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Spot-price client for Coinbase's public API
pub struct CoinbaseOracle {
    config: CoinbaseConfig,
    client: Client,
}

impl CoinbaseOracle {
    /// Create an oracle with default configuration
    pub fn new() -> Self {
        Self::with_config(CoinbaseConfig::default())
    }

    /// Create an oracle with custom configuration
    pub fn with_config(config: CoinbaseConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn spot_url(&self) -> String {
        format!("{}/prices/{}/spot", self.config.base_url, self.config.pair)
    }

    /// Parse a spot-price response body into fixed-point units.
    fn parse_response(body: &str) -> anyhow::Result<i64> {
        let response: SpotPriceResponse = serde_json::from_str(body)?;
        let amount = Decimal::from_str(&response.data.amount)
            .map_err(|e| anyhow::anyhow!("bad spot amount {:?}: {}", response.data.amount, e))?;
        price_from_decimal(amount)
            .ok_or_else(|| anyhow::anyhow!("spot amount {} out of range", amount))
    }
}

impl Default for CoinbaseOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceOracle for CoinbaseOracle {
    async fn latest_price(&self) -> anyhow::Result<PriceObservation> {
        let url = self.spot_url();
        tracing::debug!(url = %url, "Fetching spot price");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Coinbase API error: {} - {}", status, body);
        }

        let body = response.text().await?;
        let price = Self::parse_response(&body)?;

        Ok(PriceObservation {
            price,
            observed_at: Utc::now().timestamp(),
        })
    }
}

/// Spot price response envelope
#[derive(Debug, Deserialize)]
struct SpotPriceResponse {
    data: SpotPriceData,
}

/// Spot price payload
#[derive(Debug, Deserialize)]
struct SpotPriceData {
    /// Decimal amount as a string, e.g. "2456.78"
    amount: String,
    /// Quote currency
    #[serde(default)]
    #[allow(dead_code)]
    currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_creation() {
        let oracle = CoinbaseOracle::new();
        assert_eq!(oracle.config.base_url, COINBASE_API_URL);
        assert_eq!(oracle.config.pair, "ETH-USD");
    }

    #[test]
    fn test_spot_url() {
        let oracle = CoinbaseOracle::new();
        assert_eq!(
            oracle.spot_url(),
            "https://api.coinbase.com/v2/prices/ETH-USD/spot"
        );
    }

    #[test]
    fn test_spot_url_custom_pair() {
        let oracle = CoinbaseOracle::with_config(CoinbaseConfig {
            pair: "BTC-USD".to_string(),
            ..Default::default()
        });
        assert!(oracle.spot_url().ends_with("/prices/BTC-USD/spot"));
    }

    #[test]
    fn test_parse_valid_response() {
        let body = r#"{"data":{"amount":"2456.78","currency":"USD"}}"#;
        assert_eq!(CoinbaseOracle::parse_response(body).unwrap(), 2456_78000000);
    }

    #[test]
    fn test_parse_whole_dollar_response() {
        let body = r#"{"data":{"amount":"20000","currency":"USD"}}"#;
        assert_eq!(
            CoinbaseOracle::parse_response(body).unwrap(),
            20000_00000000
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(CoinbaseOracle::parse_response("not json").is_err());
    }

    #[test]
    fn test_parse_non_numeric_amount() {
        let body = r#"{"data":{"amount":"n/a","currency":"USD"}}"#;
        assert!(CoinbaseOracle::parse_response(body).is_err());
    }
}

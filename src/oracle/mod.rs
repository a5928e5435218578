//! Price oracle adapters
//!
//! Supplies (price, timestamp) pairs on demand. Staleness and validity of the
//! upstream feed are the oracle's responsibility; the tracker only defends
//! against observations that are non-positive or travel back in time.

mod coinbase;
mod fixed;

pub use coinbase::{CoinbaseConfig, CoinbaseOracle, COINBASE_API_URL};
pub use fixed::FixedOracle;

use async_trait::async_trait;

use crate::trend::PriceObservation;

/// Trait for price oracle implementations
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Fetch the latest (price, timestamp) pair.
    async fn latest_price(&self) -> anyhow::Result<PriceObservation>;
}

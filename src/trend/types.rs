//! Trend state types

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock;

/// Fixed-point USD price with [`PRICE_DECIMALS`] implied decimal places.
pub type Price = i64;

/// Number of implied decimal places in a [`Price`].
pub const PRICE_DECIMALS: u32 = 8;

/// Scale factor between whole USD units and [`Price`] units.
pub const PRICE_SCALE: i64 = 100_000_000;

/// Convert a decimal USD amount into fixed-point [`Price`] units.
///
/// Returns `None` if the scaled amount does not fit in an `i64`.
pub fn price_from_decimal(amount: Decimal) -> Option<Price> {
    (amount * Decimal::from(PRICE_SCALE)).trunc().to_i64()
}

/// Render a fixed-point price as a decimal USD string.
pub fn format_price(price: Price) -> String {
    format!("{}.{:08}", price / PRICE_SCALE, (price % PRICE_SCALE).abs())
}

/// A single (price, timestamp) pair supplied by an oracle or test harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Observed price in fixed-point units
    pub price: Price,
    /// Unix timestamp (seconds) of the observation
    pub observed_at: i64,
}

/// Direction of a price move between two observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// New price above the previous one
    Up,
    /// New price below the previous one
    Down,
    /// No change
    Flat,
}

impl Direction {
    /// Direction of the move from `previous` to `next`.
    pub fn between(previous: Price, next: Price) -> Self {
        match next.cmp(&previous) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Flat,
        }
    }
}

/// The single persisted record of the tracker.
///
/// `latest_date_checked` is always a day key, and `trend` is only ever
/// mutated by [`advance`](super::advance); everything else the crate exposes
/// is a read-only projection of these three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendState {
    /// Most recently committed price
    pub latest_price: Price,
    /// Day key of the most recent committed observation
    pub latest_date_checked: i64,
    /// Signed streak counter; 0 only as the seeded/neutral value
    pub trend: i64,
}

impl TrendState {
    /// Seed a fresh state from an initial observation. The trend starts
    /// neutral and the timestamp is truncated to its day key.
    pub fn seed(observation: PriceObservation) -> Result<Self, TrendError> {
        if observation.price <= 0 {
            return Err(TrendError::InvalidPrice(observation.price));
        }
        Ok(Self {
            latest_price: observation.price,
            latest_date_checked: clock::day_start(observation.observed_at),
            trend: 0,
        })
    }
}

/// Errors rejected by the trend transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrendError {
    /// Supplied price was zero or negative
    #[error("price must be positive, got {0}")]
    InvalidPrice(Price),
    /// Supplied timestamp truncates to a day before the last committed one
    #[error("observation day {supplied} precedes last checked day {latest}")]
    NonMonotonicTimestamp {
        /// Day key of the rejected observation
        supplied: i64,
        /// Day key currently committed
        latest: i64,
    },
}

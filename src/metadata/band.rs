//! Band selection
//!
//! Seven observable display states derived from the trend counter and the
//! latest price. The thresholds are policy, not algorithm, so they live here
//! as named constants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::trend::{Price, PRICE_SCALE};

/// Price at or above which the high band overrides all trend classification.
pub const HIGH_PRICE_THRESHOLD: Price = 20_000 * PRICE_SCALE;

/// Largest streak magnitude still classified as a short streak.
pub const SHORT_STREAK_MAX: u64 = 2;

/// Largest streak magnitude still classified as a mid streak.
pub const MID_STREAK_MAX: u64 = 4;

/// One of the seven display bands.
///
/// The discriminants are the stable metadata indices appended to the base
/// URI, so they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Band {
    /// Neutral or up-streak of 1-2 days
    Up1 = 0,
    /// Up-streak of 3-4 days
    Up2 = 1,
    /// Up-streak of 5+ days
    Up3 = 2,
    /// Down-streak of 1-2 days
    Down1 = 3,
    /// Down-streak of 3-4 days
    Down2 = 4,
    /// Down-streak of 5+ days
    Down3 = 5,
    /// Price at or above the high threshold, regardless of trend
    High = 6,
}

impl Band {
    /// Metadata index of this band.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Select the band for a (trend, price) pair.
    ///
    /// The high-price override wins over any trend classification and holds
    /// for as long as the price stays at or above the threshold, even while
    /// the trend is negative.
    pub fn select(trend: i64, latest_price: Price) -> Self {
        if latest_price >= HIGH_PRICE_THRESHOLD {
            return Band::High;
        }

        let magnitude = trend.unsigned_abs();
        match trend.signum() {
            1 => match magnitude {
                1..=SHORT_STREAK_MAX => Band::Up1,
                ..=MID_STREAK_MAX => Band::Up2,
                _ => Band::Up3,
            },
            -1 => match magnitude {
                1..=SHORT_STREAK_MAX => Band::Down1,
                ..=MID_STREAK_MAX => Band::Down2,
                _ => Band::Down3,
            },
            _ => Band::Up1,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

//! Trend transition function
//!
//! A streak extends only while observations arrive on consecutive calendar
//! days. A skipped day collapses the magnitude back to one: a missing
//! observation signals lost cadence, not confirmed continuation. A flat day
//! neither confirms nor breaks a streak unless a day was skipped, in which
//! case the last known direction survives at magnitude one.

use super::types::{Direction, PriceObservation, TrendError, TrendState};
use crate::clock;

/// Compute the next state from the previous one and a new observation.
///
/// Pure and total over its documented domain: rejects non-positive prices and
/// observations from a day earlier than the committed one, otherwise returns
/// the full next state for the caller to commit. `latest_price` and
/// `latest_date_checked` always refresh to the new observation regardless of
/// which streak branch applies.
///
/// An observation on the same calendar day as the committed one (only
/// reachable by bypassing the upkeep gate) is treated like a consecutive-day
/// observation against the recorded price.
pub fn advance(state: &TrendState, observation: PriceObservation) -> Result<TrendState, TrendError> {
    if observation.price <= 0 {
        return Err(TrendError::InvalidPrice(observation.price));
    }

    let new_day = clock::day_start(observation.observed_at);
    if new_day < state.latest_date_checked {
        return Err(TrendError::NonMonotonicTimestamp {
            supplied: new_day,
            latest: state.latest_date_checked,
        });
    }

    let gap = clock::day_gap(state.latest_date_checked, new_day);
    let direction = Direction::between(state.latest_price, observation.price);

    let trend = match (gap, direction) {
        (0..=1, Direction::Up) => {
            if state.trend >= 0 {
                state.trend.saturating_add(1)
            } else {
                1
            }
        }
        (0..=1, Direction::Down) => {
            if state.trend <= 0 {
                state.trend.saturating_sub(1)
            } else {
                -1
            }
        }
        (0..=1, Direction::Flat) => state.trend,
        // a skipped day discards the streak even when the direction matches
        (_, Direction::Up) => 1,
        (_, Direction::Down) => -1,
        (_, Direction::Flat) => state.trend.signum(),
    };

    Ok(TrendState {
        latest_price: observation.price,
        latest_date_checked: new_day,
        trend,
    })
}

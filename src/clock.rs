//! Calendar-day keys
//!
//! All gating and gap arithmetic works on day keys: unix timestamps truncated
//! to the start of their UTC calendar day. Two observations taken at any
//! time-of-day within the same day truncate to an identical key.

/// Length of a calendar day in seconds.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Truncate a unix timestamp to the start of its UTC calendar day.
pub fn day_start(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

/// Number of whole calendar days between two day keys.
///
/// Both arguments must already be day keys (multiples of [`SECONDS_PER_DAY`]).
pub fn day_gap(from_day: i64, to_day: i64) -> i64 {
    (to_day - from_day) / SECONDS_PER_DAY
}

//! Trend state and its transition function
//!
//! The trend is a signed streak counter over daily price observations: the
//! sign is the direction of the current streak, the magnitude is how many
//! consecutive qualifying days it has run. The transition function is pure;
//! callers own the state and commit the returned value.

mod engine;
mod types;

pub use engine::advance;
pub use types::{
    format_price, price_from_decimal, Direction, Price, PriceObservation, TrendError,
    TrendState, PRICE_DECIMALS, PRICE_SCALE,
};

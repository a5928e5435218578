//! Metadata band selection and URI rendering
//!
//! Maps the persisted (trend, price) pair to one of seven display bands and
//! renders the band into a token URI. Both are pure read-time projections;
//! nothing here is cached or stored.

mod band;
mod uri;

pub use band::{Band, HIGH_PRICE_THRESHOLD, MID_STREAK_MAX, SHORT_STREAK_MAX};
pub use uri::token_uri;

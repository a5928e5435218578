//! Day-gated tracker
//!
//! Owns the persisted [`TrendState`] and the upkeep gate in front of it.
//! Multiple independent pollers may race to trigger the daily update; only
//! the first call on a new calendar day commits, every later same-day call
//! observes a skip. Reads are projections and never touch the state.

use crate::clock;
use crate::metadata::{token_uri, Band};
use crate::trend::{self, Price, PriceObservation, TrendError, TrendState};

/// Result of a gated update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpkeepOutcome {
    /// A new calendar day had elapsed; the state was advanced and committed.
    Performed {
        /// The committed state
        state: TrendState,
        /// Band projected before the update
        previous_band: Band,
        /// Band projected after the update
        band: Band,
    },
    /// The observation fell on the same calendar day as the committed state.
    SkippedSameDay,
}

/// Tracker holding the single [`TrendState`] record and its base URI.
#[derive(Debug, Clone)]
pub struct Tracker {
    base_uri: String,
    state: TrendState,
}

impl Tracker {
    /// Create a tracker seeded from an initial observation (trend starts
    /// neutral).
    pub fn new(base_uri: impl Into<String>, seed: PriceObservation) -> Result<Self, TrendError> {
        Ok(Self {
            base_uri: base_uri.into(),
            state: TrendState::seed(seed)?,
        })
    }

    /// Resume a tracker from a previously persisted state.
    pub fn from_state(base_uri: impl Into<String>, state: TrendState) -> Self {
        Self {
            base_uri: base_uri.into(),
            state,
        }
    }

    /// Most recently committed price.
    pub fn latest_price(&self) -> Price {
        self.state.latest_price
    }

    /// Day key of the most recent committed observation.
    pub fn latest_date_checked(&self) -> i64 {
        self.state.latest_date_checked
    }

    /// Current signed streak counter.
    pub fn trend(&self) -> i64 {
        self.state.trend
    }

    /// Band projected from the current state.
    pub fn band(&self) -> Band {
        Band::select(self.state.trend, self.state.latest_price)
    }

    /// Token URI projected from the current state.
    ///
    /// Every token shares the collection-wide band projection, so the id does
    /// not influence the result.
    pub fn token_uri(&self, _token_id: u64) -> String {
        token_uri(&self.base_uri, self.band())
    }

    /// Whether an observation taken now would fall on a new calendar day.
    pub fn check_upkeep(&self, now: i64) -> bool {
        clock::day_start(now) != self.state.latest_date_checked
    }

    /// Run the gated update.
    ///
    /// Same-day observations are silent no-ops. Otherwise the transition
    /// either commits in full or leaves the state untouched on error.
    pub fn perform_upkeep(
        &mut self,
        observation: PriceObservation,
    ) -> Result<UpkeepOutcome, TrendError> {
        if !self.check_upkeep(observation.observed_at) {
            return Ok(UpkeepOutcome::SkippedSameDay);
        }

        let previous_band = self.band();
        let next = trend::advance(&self.state, observation)?;
        self.state = next;

        Ok(UpkeepOutcome::Performed {
            state: next,
            previous_band,
            band: self.band(),
        })
    }

    /// The raw persisted record.
    pub fn state(&self) -> &TrendState {
        &self.state
    }
}

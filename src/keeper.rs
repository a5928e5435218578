//! Keeper polling service
//!
//! The automated caller of the upkeep gate: polls the oracle on an interval,
//! feeds each observation through the gated update, and persists and
//! journals whatever commits. The gate makes the cadence forgiving: polling
//! far more often than daily costs nothing but skipped cycles.

use std::time::Duration;

use crate::journal::Journal;
use crate::oracle::PriceOracle;
use crate::store::StateStore;
use crate::telemetry::{self, CounterMetric};
use crate::tracker::{Tracker, UpkeepOutcome};

/// Polling service wiring an oracle to the tracker and its persistence.
pub struct Keeper<O> {
    oracle: O,
    tracker: Tracker,
    store: StateStore,
    journal: Option<Journal>,
}

impl<O: PriceOracle> Keeper<O> {
    /// Create a keeper around an already-seeded or resumed tracker.
    pub fn new(oracle: O, tracker: Tracker, store: StateStore, journal: Option<Journal>) -> Self {
        Self {
            oracle,
            tracker,
            store,
            journal,
        }
    }

    /// The wrapped tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Fetch one observation and run it through the gated update.
    ///
    /// Commits are persisted and journaled before returning. Errors (oracle
    /// failures, rejected observations) leave the persisted state exactly as
    /// it was.
    pub async fn poll_once(&mut self) -> anyhow::Result<UpkeepOutcome> {
        let observation = match self.oracle.latest_price().await {
            Ok(observation) => observation,
            Err(e) => {
                telemetry::increment(CounterMetric::OracleErrors);
                return Err(e.context("oracle read failed"));
            }
        };

        let outcome = self.tracker.perform_upkeep(observation)?;
        match outcome {
            UpkeepOutcome::Performed {
                state,
                previous_band,
                band,
            } => {
                self.store.save(&state)?;
                if let Some(journal) = &self.journal {
                    journal.append(&state, band)?;
                }

                telemetry::increment(CounterMetric::UpkeepPerformed);
                telemetry::observe_state(&state, band);
                tracing::info!(
                    price = state.latest_price,
                    trend = state.trend,
                    band = band.index(),
                    "Upkeep performed"
                );
                if band != previous_band {
                    tracing::info!(
                        from = previous_band.index(),
                        to = band.index(),
                        "Band transition"
                    );
                }
            }
            UpkeepOutcome::SkippedSameDay => {
                telemetry::increment(CounterMetric::UpkeepSkipped);
                tracing::debug!("Same-day poll, nothing to do");
            }
        }

        Ok(outcome)
    }

    /// Poll forever on the given interval.
    ///
    /// Individual cycle failures are logged and do not stop the loop; a
    /// stale oracle read today must not prevent tomorrow's update.
    pub async fn run(&mut self, poll_interval: Duration) -> anyhow::Result<()> {
        tracing::info!(
            interval_secs = poll_interval.as_secs(),
            uri = %self.tracker.token_uri(0),
            "Keeper started"
        );

        let mut interval = tokio::time::interval(poll_interval);
        loop {
            interval.tick().await;
            if let Err(e) = self.poll_once().await {
                tracing::warn!(error = %e, "Upkeep cycle failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SECONDS_PER_DAY;
    use crate::oracle::FixedOracle;
    use crate::trend::PriceObservation;

    fn obs(price: i64, day: i64, hour: i64) -> PriceObservation {
        PriceObservation {
            price,
            observed_at: day * SECONDS_PER_DAY + hour * 3_600,
        }
    }

    fn keeper(script: Vec<PriceObservation>, dir: &std::path::Path) -> Keeper<FixedOracle> {
        let tracker = Tracker::new("https://base.com/", obs(2000_00000000, 1, 0)).unwrap();
        Keeper::new(
            FixedOracle::new(script),
            tracker,
            StateStore::new(dir.join("state.json")),
            Some(Journal::new(dir.join("journal.csv"))),
        )
    }

    #[tokio::test]
    async fn test_poll_commits_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut keeper = keeper(vec![obs(2100_00000000, 2, 3)], dir.path());

        let outcome = keeper.poll_once().await.unwrap();
        assert!(matches!(outcome, UpkeepOutcome::Performed { .. }));

        let persisted = keeper.store.load().unwrap().unwrap();
        assert_eq!(&persisted, keeper.tracker().state());
        assert_eq!(persisted.trend, 1);
    }

    #[tokio::test]
    async fn test_same_day_poll_skips_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let mut keeper = keeper(
            vec![obs(2100_00000000, 2, 3), obs(2500_00000000, 2, 15)],
            dir.path(),
        );

        keeper.poll_once().await.unwrap();
        let after_first = *keeper.tracker().state();

        let outcome = keeper.poll_once().await.unwrap();
        assert_eq!(outcome, UpkeepOutcome::SkippedSameDay);
        assert_eq!(keeper.tracker().state(), &after_first);
        assert_eq!(keeper.store.load().unwrap(), Some(after_first));
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut keeper = keeper(vec![], dir.path());
        assert!(keeper.poll_once().await.is_err());
    }

    #[tokio::test]
    async fn test_journal_records_only_commits() {
        let dir = tempfile::tempdir().unwrap();
        let mut keeper = keeper(
            vec![
                obs(2100_00000000, 2, 3),
                obs(2500_00000000, 2, 15),
                obs(2200_00000000, 3, 3),
            ],
            dir.path(),
        );

        keeper.poll_once().await.unwrap();
        keeper.poll_once().await.unwrap(); // same-day skip
        keeper.poll_once().await.unwrap();

        let records = keeper.journal.as_ref().unwrap().read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].trend, 2);
    }
}

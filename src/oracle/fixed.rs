//! Scripted oracle for tests and dry runs

use super::PriceOracle;
use crate::trend::PriceObservation;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Oracle that replays a queued script of observations.
///
/// Each call pops the next queued observation; once the script is exhausted,
/// the last observation repeats. Reading an empty, never-filled script is an
/// error.
pub struct FixedOracle {
    quotes: Mutex<VecDeque<PriceObservation>>,
    last: Mutex<Option<PriceObservation>>,
}

impl FixedOracle {
    /// Create an oracle with an initial script of observations.
    pub fn new(script: impl IntoIterator<Item = PriceObservation>) -> Self {
        Self {
            quotes: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(None),
        }
    }

    /// Queue another observation onto the script.
    pub fn push(&self, observation: PriceObservation) {
        self.quotes.lock().expect("oracle lock").push_back(observation);
    }
}

#[async_trait]
impl PriceOracle for FixedOracle {
    async fn latest_price(&self) -> anyhow::Result<PriceObservation> {
        let next = self.quotes.lock().expect("oracle lock").pop_front();
        let mut last = self.last.lock().expect("oracle lock");
        match next.or(*last) {
            Some(observation) => {
                *last = Some(observation);
                Ok(observation)
            }
            None => anyhow::bail!("fixed oracle has no observations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(price: i64, observed_at: i64) -> PriceObservation {
        PriceObservation { price, observed_at }
    }

    #[test]
    fn test_replays_script_in_order() {
        let oracle = FixedOracle::new([obs(100, 1), obs(200, 2)]);
        tokio_test::block_on(async {
            assert_eq!(oracle.latest_price().await.unwrap(), obs(100, 1));
            assert_eq!(oracle.latest_price().await.unwrap(), obs(200, 2));
        });
    }

    #[test]
    fn test_repeats_last_observation_when_exhausted() {
        let oracle = FixedOracle::new([obs(100, 1)]);
        tokio_test::block_on(async {
            assert_eq!(oracle.latest_price().await.unwrap(), obs(100, 1));
            assert_eq!(oracle.latest_price().await.unwrap(), obs(100, 1));
        });
    }

    #[test]
    fn test_empty_script_is_an_error() {
        let oracle = FixedOracle::new([]);
        tokio_test::block_on(async {
            assert!(oracle.latest_price().await.is_err());
        });
    }

    #[test]
    fn test_push_extends_script() {
        let oracle = FixedOracle::new([]);
        oracle.push(obs(300, 3));
        tokio_test::block_on(async {
            assert_eq!(oracle.latest_price().await.unwrap(), obs(300, 3));
        });
    }
}

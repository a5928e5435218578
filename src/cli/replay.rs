//! Replay command implementation
//!
//! Drives a fresh tracker from a CSV of historical observations. The first
//! row seeds the state; every later row goes through the same gated update
//! the keeper uses, printing each committed transition.

use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

use crate::trend::{format_price, price_from_decimal, PriceObservation};
use crate::tracker::{Tracker, UpkeepOutcome};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// CSV file with timestamp,price rows (unix seconds, decimal USD)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Base URI used when rendering token URIs
    #[arg(long, default_value = "https://base.com/")]
    pub base_uri: String,
}

/// One input row
#[derive(Debug, Deserialize)]
struct ObservationRow {
    timestamp: i64,
    price: Decimal,
}

impl ObservationRow {
    fn to_observation(&self) -> anyhow::Result<PriceObservation> {
        let price = price_from_decimal(self.price)
            .ok_or_else(|| anyhow::anyhow!("price {} out of range", self.price))?;
        Ok(PriceObservation {
            price,
            observed_at: self.timestamp,
        })
    }
}

impl ReplayArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut reader = csv::Reader::from_path(&self.input)?;
        let mut rows = reader.deserialize::<ObservationRow>();

        let seed = rows
            .next()
            .ok_or_else(|| anyhow::anyhow!("replay input is empty"))??
            .to_observation()?;
        let mut tracker = Tracker::new(&self.base_uri, seed)?;
        println!(
            "seed  price={} trend=0 band={}",
            format_price(seed.price),
            tracker.band().index()
        );

        let mut committed = 0usize;
        for row in rows {
            let observation = row?.to_observation()?;
            match tracker.perform_upkeep(observation)? {
                UpkeepOutcome::Performed { state, band, .. } => {
                    committed += 1;
                    println!(
                        "day {} price={} trend={} band={}",
                        state.latest_date_checked / crate::clock::SECONDS_PER_DAY,
                        format_price(state.latest_price),
                        state.trend,
                        band.index()
                    );
                }
                UpkeepOutcome::SkippedSameDay => {
                    tracing::debug!(observed_at = observation.observed_at, "Same-day row skipped");
                }
            }
        }

        println!(
            "replayed {} committed updates; final trend={} uri={}",
            committed,
            tracker.trend(),
            tracker.token_uri(0)
        );
        Ok(())
    }
}

//! Run command implementation

use clap::Args;
use std::time::Duration;

use crate::config::Config;
use crate::journal::Journal;
use crate::keeper::Keeper;
use crate::oracle::{CoinbaseConfig, CoinbaseOracle};
use crate::store::StateStore;
use crate::telemetry;
use crate::tracker::Tracker;
use crate::trend::{price_from_decimal, PriceObservation};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Poll the oracle once and exit instead of looping
    #[arg(long)]
    pub once: bool,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if config.oracle.provider != "coinbase" {
            anyhow::bail!("unknown oracle provider: {}", config.oracle.provider);
        }

        if let Some(port) = config.telemetry.metrics_port {
            telemetry::init_metrics_exporter(port)?;
        }

        let oracle = CoinbaseOracle::with_config(CoinbaseConfig {
            base_url: config.oracle.base_url.clone(),
            pair: config.oracle.pair.clone(),
            timeout: Duration::from_secs(config.oracle.timeout_secs),
        });

        let store = StateStore::new(&config.tracker.state_path);
        let tracker = match store.load()? {
            Some(state) => {
                tracing::info!(
                    trend = state.trend,
                    day = state.latest_date_checked,
                    "Resuming from persisted state"
                );
                Tracker::from_state(&config.tracker.base_uri, state)
            }
            None => {
                let price = price_from_decimal(config.tracker.seed_price)
                    .ok_or_else(|| anyhow::anyhow!("seed price out of range"))?;
                let observed_at = config
                    .tracker
                    .seed_timestamp
                    .unwrap_or_else(|| chrono::Utc::now().timestamp());
                tracing::info!(price, observed_at, "Seeding fresh tracker state");
                Tracker::new(&config.tracker.base_uri, PriceObservation { price, observed_at })?
            }
        };

        let journal = config
            .journal
            .enabled
            .then(|| Journal::new(&config.journal.path));

        let mut keeper = Keeper::new(oracle, tracker, store, journal);
        if self.once {
            keeper.poll_once().await?;
            Ok(())
        } else {
            keeper
                .run(Duration::from_secs(config.upkeep.poll_interval_secs))
                .await
        }
    }
}

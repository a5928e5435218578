use clap::Parser;
use trend_tracker::cli::{Cli, Commands};
use trend_tracker::config::Config;
use trend_tracker::metadata::{token_uri, Band};
use trend_tracker::store::StateStore;
use trend_tracker::trend::format_price;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = trend_tracker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting keeper");
            args.execute(&config).await?;
        }
        Commands::Replay(args) => {
            tracing::info!("Starting replay");
            args.execute().await?;
        }
        Commands::Status => {
            let store = StateStore::new(&config.tracker.state_path);
            match store.load()? {
                Some(state) => {
                    let band = Band::select(state.trend, state.latest_price);
                    println!("trend-tracker status");
                    println!("  Price: {}", format_price(state.latest_price));
                    println!("  Last checked day: {}", state.latest_date_checked);
                    println!("  Trend: {}", state.trend);
                    println!("  Band: {}", band.index());
                    println!("  Token URI: {}", token_uri(&config.tracker.base_uri, band));
                }
                None => {
                    println!(
                        "No persisted state at {}",
                        config.tracker.state_path.display()
                    );
                }
            }
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Oracle: {} {}", config.oracle.provider, config.oracle.pair);
            println!("  Base URI: {}", config.tracker.base_uri);
            println!("  State path: {}", config.tracker.state_path.display());
            println!("  Poll interval: {}s", config.upkeep.poll_interval_secs);
            println!(
                "  Journal: {}",
                if config.journal.enabled {
                    config.journal.path.display().to_string()
                } else {
                    "disabled".to_string()
                }
            );
        }
    }

    Ok(())
}

//! Command-line front end for the modelfolio simulator.
//!
//! Thin glue only: argument parsing, universe loading, provider
//! wiring, and rendering of the report the core produces.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modelfolio_core::export::{write_breakdown_csv, write_trajectory_csv};
use modelfolio_core::universe::{default_universe, Universe};
use modelfolio_core::{GrowthReport, SimulationRequest, SimulationService, SimulationServiceTrait};
use modelfolio_market_data::{CachedPriceProvider, PriceProvider, YahooProvider};

/// Buy-and-hold growth simulator over a fixed model allocation.
#[derive(Parser)]
#[command(name = "modelfolio", about = "Simulate buy-and-hold growth of a model allocation")]
struct Cli {
    /// Initial amount in dollars
    #[arg(long, default_value = "10000")]
    amount: Decimal,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    end: NaiveDate,

    /// Comma-separated symbols to include; defaults to the whole universe
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// JSON file with the model allocation; defaults to the built-in
    /// Growth 80/20 model
    #[arg(long)]
    universe: Option<PathBuf>,

    /// Write the daily portfolio values to this CSV file
    #[arg(long)]
    values_csv: Option<PathBuf>,

    /// Write the per-holding breakdown to this CSV file
    #[arg(long)]
    breakdown_csv: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn load_universe(cli: &Cli) -> anyhow::Result<Universe> {
    match &cli.universe {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading universe file {}", path.display()))?;
            Ok(Universe::from_json_str(&json)?)
        }
        None => Ok(default_universe()),
    }
}

fn print_report(report: &GrowthReport) {
    for excluded in &report.excluded {
        eprintln!(
            "warning: {} excluded ({})",
            excluded.symbol,
            excluded.reason.as_str()
        );
    }

    let summary = &report.summary;
    println!("Start value:     ${:.2}", summary.start_value);
    println!("End value:       ${:.2}", summary.end_value);
    println!("Absolute change: ${:.2}", summary.absolute_change);
    match summary.pct_change {
        Some(pct) => println!("Change:          {:.2}%", pct * Decimal::ONE_HUNDRED),
        None => println!("Change:          n/a"),
    }

    for group in &report.breakdown {
        println!(
            "\n{}  (subtotal weight {:.3}%)",
            group.asset_class.as_str(),
            group.subtotal_weight_pct
        );
        for row in &group.rows {
            println!(
                "  {:<46} {:<6} {:>8.3}%  {:>11.4} -> {:>11.4}  {:>13.6} sh  ${:>11.2}",
                row.name,
                row.symbol,
                row.weight_pct,
                row.start_price,
                row.end_price,
                row.shares,
                row.end_value
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let universe = load_universe(&cli)?;
    let enabled_symbols = if cli.symbols.is_empty() {
        universe.symbols()
    } else {
        cli.symbols.clone()
    };

    let provider: Arc<dyn PriceProvider> =
        Arc::new(CachedPriceProvider::new(Arc::new(YahooProvider::new()?)));
    let service = SimulationService::new(provider);

    let request = SimulationRequest {
        initial_amount: cli.amount,
        start_date: cli.start,
        end_date: cli.end,
        enabled_symbols,
    };
    let report = service.simulate(&universe, &request).await?;
    tracing::debug!(
        days = report.trajectory.len(),
        holdings = report.positions.len(),
        "simulation complete"
    );

    print_report(&report);

    if let Some(path) = &cli.values_csv {
        let file = fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_trajectory_csv(file, &report.trajectory)?;
        println!("\nWrote daily portfolio values to {}", path.display());
    }
    if let Some(path) = &cli.breakdown_csv {
        let file = fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_breakdown_csv(file, &report.breakdown)?;
        println!("Wrote component breakdown to {}", path.display());
    }

    Ok(())
}

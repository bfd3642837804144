use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use ferronet::TransitNetwork;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ferronet",
    version,
    about = "Shortest and most efficient paths through a transit network",
    long_about = "Loads a network of stops and directed routes from CSV tables and \
                  answers path queries against it. Efficiency accounts for dwell time \
                  at every intermediate stop and for peak-hour congestion by zone."
)]
struct Args {
    /// Stop table: stop_id,name,latitude,longitude,zone
    #[arg(long, global = true)]
    stops: Option<PathBuf>,

    /// Route table: from_id,to_id,distance[,bidirectional]
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// TOML file with [network] and [analysis] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Traffic period: morning_peak, normal or evening_peak
    #[arg(short, long, global = true, conflicts_with = "at")]
    period: Option<String>,

    /// Clock time (HH:MM) whose traffic period should be used
    #[arg(long, global = true)]
    at: Option<String>,

    /// Show debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimum-distance path between two stops
    Shortest { from: String, to: String },
    /// Every simple path between two stops, scored by efficiency
    Paths { from: String, to: String },
    /// Shortest path next to the most efficient one
    Compare { from: String, to: String },
    /// Stop with the most incident routes, earliest added on ties
    Hub,
    /// Network size and load summary
    Stats,
}

#[derive(Serialize)]
struct StatsOutput {
    #[serde(flatten)]
    network: ferronet::NetworkStats,
    load: ferronet::prelude::LoadReport,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli_config = match &args.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    let network_config = cli_config.network(args.stops.clone(), args.routes.clone())?;

    let (mut network, report) =
        TransitNetwork::load(&network_config, cli_config.analysis.clone())
            .context("failed to load network")?;

    if let Some(period) = &args.period {
        network.set_period_str(period)?;
    }
    if let Some(at) = &args.at {
        let time = NaiveTime::parse_from_str(at, "%H:%M")
            .with_context(|| format!("invalid time '{at}', expected HH:MM"))?;
        network.set_period_at(time);
    }
    info!("Traffic period: {}", network.traffic().period());

    match &args.command {
        Command::Shortest { from, to } => {
            let path = network
                .shortest_path(from, to)
                .ok_or_else(|| anyhow!("no path from {from} to {to}"))?;
            print_json(&path)
        }
        Command::Paths { from, to } => print_json(&network.scored_paths(from, to)),
        Command::Compare { from, to } => {
            let comparison = network
                .compare_paths(from, to)
                .ok_or_else(|| anyhow!("no path from {from} to {to}"))?;
            print_json(&comparison)
        }
        Command::Hub => {
            let hub = network
                .find_highest_degree_stop()
                .ok_or_else(|| anyhow!("network has no stops"))?;
            let degree = network.graph().degree(&hub);
            print_json(&serde_json::json!({ "stop_id": hub, "degree": degree }))
        }
        Command::Stats => print_json(&StatsOutput {
            network: network.stats(),
            load: report,
        }),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

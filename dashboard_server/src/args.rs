//! Command-line arguments for the dashboard server.
use clap::Parser;
use dashboard_common::net::{addr, COMMAND_PORT};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::time_series::{DEFAULT_HIGH, DEFAULT_LOW};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the command server listens on.
    #[clap(long, default_value_t = addr("0.0.0.0", COMMAND_PORT))]
    pub bind: String,

    /// Milliseconds between ticker updates.
    #[clap(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for every random draw; makes ticks and responses reproducible.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Days of history before today on technical and prediction charts.
    #[clap(long, default_value_t = 30)]
    pub days_back: u32,

    /// Days predicted after today.
    #[clap(long, default_value_t = 30)]
    pub days_forward: u32,

    /// Lowest mock price (inclusive).
    #[clap(long, default_value_t = DEFAULT_LOW)]
    pub price_low: f64,

    /// Highest mock price (exclusive).
    #[clap(long, default_value_t = DEFAULT_HIGH)]
    pub price_high: f64,
}

/// Seeded generator when `seed` is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

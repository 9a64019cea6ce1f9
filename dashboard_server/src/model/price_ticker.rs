//! Random-walk price ticker.
//!
//! `PriceTicker` owns the current price of every tracked symbol. Each tick adds a fresh
//! perturbation to the stored price and keeps the result, so moves compound from tick
//! to tick instead of being drawn around the seed price.
use std::ops::Range;

use dashboard_common::model::tick::{Direction, TickUpdate};
use dashboard_common::symbols::MarketIndex;
use dashboard_common::{DashboardError, Result};
use log::debug;
use rand::Rng;

/// Range each per-tick perturbation is drawn from.
pub const PERTURBATION: Range<f64> = -5.0..5.0;
/// Floor applied after each move so prices stay positive.
pub const MIN_PRICE: f64 = 0.01;

#[derive(Debug, Clone)]
struct TrackedPrice {
    symbol: String,
    price: f64,
}

/// Ticker state plus the random source driving it.
#[derive(Debug)]
pub struct PriceTicker<R> {
    prices: Vec<TrackedPrice>,
    rng: R,
}

impl<R: Rng> PriceTicker<R> {
    /// Track `seeds` (symbol → starting price) in the given order.
    ///
    /// Returns `InvalidArgument` for a blank or repeated symbol or a non-positive price.
    pub fn new(seeds: Vec<(String, f64)>, rng: R) -> Result<Self> {
        let mut prices: Vec<TrackedPrice> = Vec::with_capacity(seeds.len());
        for (symbol, price) in seeds {
            if symbol.trim().is_empty() {
                return Err(DashboardError::invalid("ticker symbol must not be empty"));
            }
            if !(price.is_finite() && price > 0.0) {
                return Err(DashboardError::invalid(format!(
                    "seed price for {} must be positive, got {}",
                    symbol, price
                )));
            }
            if prices.iter().any(|tracked| tracked.symbol == symbol) {
                return Err(DashboardError::invalid(format!(
                    "ticker symbol {} listed twice",
                    symbol
                )));
            }
            prices.push(TrackedPrice { symbol, price });
        }
        Ok(Self { prices, rng })
    }

    /// Ticker over the default market indices.
    pub fn market_indices(rng: R) -> Result<Self> {
        Self::new(MarketIndex::seed_prices(), rng)
    }

    /// Perturb every tracked price with a draw from [`PERTURBATION`].
    pub fn tick(&mut self) -> Vec<TickUpdate> {
        let Self { prices, rng } = self;
        apply(prices, |_| rng.random_range(PERTURBATION))
    }

    /// Perturb every tracked price by whatever `perturb` returns for its symbol.
    pub fn step(&mut self, perturb: impl FnMut(&str) -> f64) -> Vec<TickUpdate> {
        apply(&mut self.prices, perturb)
    }

    /// Current price of `symbol`.
    pub fn price(&self, symbol: &str) -> Result<f64> {
        self.prices
            .iter()
            .find(|tracked| tracked.symbol == symbol)
            .map(|tracked| tracked.price)
            .ok_or_else(|| DashboardError::invalid(format!("unknown ticker symbol: {}", symbol)))
    }

    /// Tracked symbols in order.
    pub fn symbols(&self) -> Vec<&str> {
        self.prices.iter().map(|t| t.symbol.as_str()).collect()
    }
}

fn apply(prices: &mut [TrackedPrice], mut perturb: impl FnMut(&str) -> f64) -> Vec<TickUpdate> {
    prices
        .iter_mut()
        .map(|tracked| {
            let delta = perturb(&tracked.symbol);
            tracked.price = (tracked.price + delta).max(MIN_PRICE);
            debug!("{} moved {:+.2} to {:.2}", tracked.symbol, delta, tracked.price);
            TickUpdate {
                symbol: tracked.symbol.clone(),
                price: tracked.price,
                direction: Direction::from_delta(delta),
            }
        })
        .collect()
}

//! Ticker updates.
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Direction of the last price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Perturbation was zero or positive.
    Up,
    /// Perturbation was negative.
    Down,
}

impl Direction {
    /// Direction for a perturbation; zero counts as up.
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.0 { Direction::Up } else { Direction::Down }
    }
}

/// New price for one tracked symbol after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickUpdate {
    /// Tracked symbol, e.g. `sp500`.
    pub symbol: String,
    /// Price after the tick.
    pub price: f64,
    /// Whether the tick moved the price up or down.
    pub direction: Direction,
}

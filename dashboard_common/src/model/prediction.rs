//! Per-symbol prediction sets.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Forecast horizon shown on a prediction card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Horizon {
    /// One day ahead.
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    Day,
    /// One week ahead.
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    Week,
    /// One month ahead.
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    Month,
}

impl Horizon {
    /// Horizons in card order.
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Week, Horizon::Month];

    /// Largest relative gain a mock prediction may show for this horizon.
    pub fn max_gain(&self) -> f64 {
        match self {
            Horizon::Day => 0.05,
            Horizon::Week => 0.10,
            Horizon::Month => 0.20,
        }
    }

    /// Lowest mock confidence for this horizon; values span `floor..=floor + 15`.
    pub fn confidence_floor(&self) -> u8 {
        match self {
            Horizon::Day => 80,
            Horizon::Week => 75,
            Horizon::Month => 70,
        }
    }
}

/// One prediction card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Horizon of the card.
    pub period: Horizon,
    /// Predicted price.
    pub price: f64,
    /// Change from the current price, in percent.
    pub change_percent: f64,
    /// Confidence in percent, within `0..=100`.
    pub confidence: u8,
}

/// Current price plus one prediction per horizon for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    /// Upper-cased symbol.
    pub symbol: String,
    /// Display name of the company.
    pub company_name: String,
    /// Last historical price.
    pub current_price: f64,
    /// Cards in horizon order.
    pub predictions: Vec<Prediction>,
}

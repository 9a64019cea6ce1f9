//! Market index symbols for the ticker strip and stock symbol helpers for the
//! prediction panel.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::DashboardError;
use crate::result::Result;

/// Symbol shown on the prediction panel when no search has been made yet.
pub const DEFAULT_STOCK: &str = "AAPL";

/// Indices tracked by the price ticker.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, AsRefStr, Hash, Eq, PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MarketIndex {
    /// S&P 500.
    Sp500,
    /// Nasdaq Composite.
    Nasdaq,
    /// Dow Jones Industrial Average.
    Dow,
}

impl MarketIndex {
    /// All indices in display order.
    pub const ALL: [MarketIndex; 3] = [MarketIndex::Sp500, MarketIndex::Nasdaq, MarketIndex::Dow];

    /// Seed price the ticker starts from.
    pub fn base_price(&self) -> f64 {
        match self {
            MarketIndex::Sp500 => 4890.97,
            MarketIndex::Nasdaq => 15360.28,
            MarketIndex::Dow => 37490.17,
        }
    }

    /// Default symbol → seed price mapping, in display order.
    pub fn seed_prices() -> Vec<(String, f64)> {
        Self::ALL
            .iter()
            .map(|index| (index.to_string(), index.base_price()))
            .collect()
    }
}

/// Normalize a user-entered stock symbol: trim and upper-case.
///
/// Returns `InvalidArgument` for an empty or whitespace-only input.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(DashboardError::invalid("symbol must not be empty"));
    }
    Ok(symbol)
}

/// Display name for a stock symbol; unknown symbols become `"<SYMBOL> Corp"`.
pub fn company_name(symbol: &str) -> String {
    match symbol {
        "AAPL" => "Apple Inc.".to_string(),
        "GOOGL" => "Alphabet Inc.".to_string(),
        "MSFT" => "Microsoft Corporation".to_string(),
        "AMZN" => "Amazon.com Inc.".to_string(),
        "META" | "FB" => "Meta Platforms Inc.".to_string(),
        "TSLA" => "Tesla Inc.".to_string(),
        other => format!("{} Corp", other),
    }
}

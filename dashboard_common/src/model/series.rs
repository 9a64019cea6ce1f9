//! Dated price sequences.
//!
//! A `Series` is built once from generated points and never mutated afterwards;
//! refreshing a view means generating a new one.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::result::Result;

/// Date format used for chart labels.
pub const LABEL_FORMAT: &str = "%Y-%m-%d";

/// Single dated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Price, always positive.
    pub price: f64,
}

/// Ordered price history (or forecast) for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    symbol: String,
    points: Vec<PricePoint>,
}

impl Series {
    /// Build a series, checking that dates strictly increase and prices are positive.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self> {
        if let Some(bad) = points.iter().find(|p| !(p.price > 0.0)) {
            return Err(DashboardError::invalid(format!(
                "price on {} must be positive, got {}",
                bad.date, bad.price
            )));
        }
        if points.windows(2).any(|pair| pair[0].date >= pair[1].date) {
            return Err(DashboardError::invalid(
                "series dates must be strictly increasing",
            ));
        }
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// Symbol the series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Points in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Prices in date order.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Dates rendered as chart labels.
    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.date.format(LABEL_FORMAT).to_string())
            .collect()
    }

    /// Most recent point, if any.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

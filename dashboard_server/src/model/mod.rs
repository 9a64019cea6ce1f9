//! Domain models and generators for the dashboard server.
//!
//! This module groups the data-producing side of the server:
//! - `time_series` — mock price history/forecast generation.
//! - `moving_average` — simple moving average over a price sequence.
//! - `metrics` — mock fundamental, sentiment and indicator readings.
//! - `prediction` — mock prediction cards for a searched symbol.
//! - `pipeline` — chart payload assembly from generated series.
//! - `price_ticker` — random-walk state for the tracked market indices.
//! - `ticker_service` — background ticking thread and `TickEvent` broadcasting.

pub mod metrics;
pub mod moving_average;
pub mod pipeline;
pub mod prediction;
pub mod price_ticker;
pub mod ticker_service;
pub mod time_series;

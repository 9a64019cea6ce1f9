//! Data model types exchanged between the dashboard server and its clients.
//!
//! - `series` — dated price points and the `Series` built from them.
//! - `chart` — chart payloads: labels plus index-aligned datasets.
//! - `metrics` — formatted metric panels for the fundamental/sentiment/indicator views.
//! - `prediction` — per-symbol prediction sets with 24h/7d/30d horizons.
//! - `tick` — ticker updates emitted once per tick.
pub mod chart;
pub mod metrics;
pub mod prediction;
pub mod series;
pub mod tick;

//!
//! Common types and utilities shared by the dashboard server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `DashboardError` used across the workspace.
//! - `result` — handy `Result<T, DashboardError>` alias.
//! - `symbols` — tracked market indices and stock symbol helpers.
//! - `tool` — analysis panel identifiers.
//! - `model` — series, chart, metric, prediction and tick payloads.
//! - `command` — JSON-lines requests and responses exchanged over TCP.
//! - `format` — price and percentage display helpers.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod command;
pub mod error;
pub mod format;
pub mod model;
pub mod net;
pub mod result;
pub mod symbols;
pub mod tool;

pub use command::{Request, Response};
pub use error::DashboardError;
pub use result::Result;

//! Result type alias shared across the workspace.
//!
//! Defaults the error type to [`DashboardError`], so functions can simply return
//! `Result<T>`.
use crate::error::DashboardError;

/// Workspace-wide `Result` alias with `DashboardError` as the default error.
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;

//! Command-line arguments for the dashboard client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use dashboard_common::command::{RefreshRequest, DEFAULT_WINDOWS};
use dashboard_common::net::{addr, COMMAND_PORT};
use dashboard_common::tool::AnalysisTool;
use dashboard_common::Request;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address of the dashboard server's command port.
    #[clap(long, default_value_t = addr("127.0.0.1", COMMAND_PORT))]
    pub server: String,

    /// What to ask the server for.
    #[command(subcommand)]
    pub action: Action,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Refresh one analysis panel.
    Refresh {
        /// Panel to refresh.
        #[clap(value_enum, default_value_t = AnalysisTool::Technical)]
        tool: AnalysisTool,

        /// Symbol for the technical chart.
        #[clap(long)]
        symbol: Option<String>,

        /// Moving-average windows for the technical chart, comma separated.
        #[clap(long, value_delimiter = ',', default_values_t = DEFAULT_WINDOWS)]
        windows: Vec<usize>,
    },
    /// Search a symbol and show its predictions.
    Predict {
        /// Stock symbol, case-insensitive.
        symbol: String,
    },
    /// Stream index prices until Ctrl+C.
    Watch,
}

impl Action {
    /// Protocol request for this action.
    pub fn to_request(&self) -> Request {
        match self {
            Action::Refresh {
                tool,
                symbol,
                windows,
            } => Request::Refresh(RefreshRequest {
                tool: *tool,
                symbol: symbol.clone(),
                windows: windows.iter().copied().collect(),
            }),
            Action::Predict { symbol } => Request::Predict {
                symbol: symbol.clone(),
            },
            Action::Watch => Request::Subscribe,
        }
    }
}

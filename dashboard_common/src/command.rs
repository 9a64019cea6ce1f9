//! Command protocol exchanged between client and server.
//!
//! Each message is one JSON object on its own line. A client opens a TCP connection,
//! writes a single `Request` and reads `Response` lines: exactly one for `refresh` and
//! `predict`, one per tick for `subscribe` until either side hangs up.
use std::collections::BTreeSet;
use std::io::{BufRead, Read, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::model::chart::ChartPayload;
use crate::model::metrics::MetricPanel;
use crate::model::prediction::PredictionSet;
use crate::model::tick::TickUpdate;
use crate::result::Result;
use crate::tool::AnalysisTool;

/// Moving-average windows drawn on the technical chart when none are requested.
pub const DEFAULT_WINDOWS: [usize; 2] = [20, 50];

/// Longest accepted message line, newline included.
pub const MAX_MESSAGE_BYTES: u64 = 64 * 1024;

fn default_windows() -> BTreeSet<usize> {
    DEFAULT_WINDOWS.into_iter().collect()
}

/// Refresh of one analysis panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Panel to refresh.
    pub tool: AnalysisTool,
    /// Symbol for the technical chart; the default stock is used when absent.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Moving-average windows for the technical chart; [`DEFAULT_WINDOWS`] when omitted.
    #[serde(default = "default_windows")]
    pub windows: BTreeSet<usize>,
}

impl RefreshRequest {
    /// Refresh `tool` with the default windows and no symbol.
    pub fn new(tool: AnalysisTool) -> Self {
        Self {
            tool,
            symbol: None,
            windows: default_windows(),
        }
    }
}

/// Message sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Refresh an analysis panel.
    Refresh(RefreshRequest),
    /// Load predictions for a searched symbol.
    Predict {
        /// Symbol as typed by the user.
        symbol: String,
    },
    /// Stream ticker updates until disconnect.
    Subscribe,
}

/// Message sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    /// Technical panel: price chart and indicator readings.
    Chart {
        /// Price line plus moving averages.
        chart: ChartPayload,
        /// Indicator readings for the side panel.
        indicators: MetricPanel,
    },
    /// Fundamental or sentiment panel.
    Metrics(MetricPanel),
    /// Prediction panel for one symbol.
    Prediction {
        /// Prediction cards.
        set: PredictionSet,
        /// Historical and predicted lines.
        chart: ChartPayload,
    },
    /// Ticker updates from one tick.
    Ticks {
        /// One entry per tracked symbol.
        updates: Vec<TickUpdate>,
    },
    /// The request could not be served.
    Error {
        /// Human-readable reason.
        message: String,
    },
}

impl From<&DashboardError> for Response {
    fn from(err: &DashboardError) -> Self {
        Response::Error {
            message: err.to_string(),
        }
    }
}

/// Write `message` as one JSON line and flush.
pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<()> {
    let mut line = serde_json::to_vec(message)?;
    line.push(b'\n');
    writer.write_all(&line)?;
    writer.flush()?;
    Ok(())
}

/// Read the next JSON line. Returns `Ok(None)` once the peer has closed the stream.
///
/// A line longer than [`MAX_MESSAGE_BYTES`] is a protocol error.
pub fn read_message<R: BufRead, T: DeserializeOwned>(reader: &mut R) -> Result<Option<T>> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.by_ref().take(MAX_MESSAGE_BYTES).read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if read as u64 == MAX_MESSAGE_BYTES && !line.ends_with('\n') {
            return Err(DashboardError::Protocol(format!(
                "message exceeds {} bytes",
                MAX_MESSAGE_BYTES
            )));
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        return serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| DashboardError::Protocol(format!("{}: {}", e, trimmed)));
    }
}

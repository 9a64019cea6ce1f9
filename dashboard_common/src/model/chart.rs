//! Chart payloads handed to the rendering side.
//!
//! Every dataset is index-aligned with `labels`; positions without a value hold `None`,
//! which serializes as JSON `null` so the chart widget leaves a gap there.
use serde::{Deserialize, Serialize};

/// Dataset label for the raw price line.
pub const PRICE_LABEL: &str = "Price";
/// Dataset label for the historical segment of a prediction chart.
pub const HISTORICAL_LABEL: &str = "Historical Price";
/// Dataset label for the predicted segment of a prediction chart.
pub const PREDICTED_LABEL: &str = "Predicted Price";

/// Dataset label for a moving average of the given window, e.g. `MA(20)`.
pub fn ma_label(window: usize) -> String {
    format!("MA({})", window)
}

/// How a line is stroked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line, used for predicted values.
    Dashed,
}

/// One named line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Stroke style.
    pub style: LineStyle,
    /// Values aligned with the chart labels; `None` draws nothing at that position.
    pub data: Vec<Option<f64>>,
}

impl Dataset {
    /// Solid line.
    pub fn solid(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            style: LineStyle::Solid,
            data,
        }
    }

    /// Dashed line.
    pub fn dashed(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            style: LineStyle::Dashed,
            data,
        }
    }

    /// Number of positions that carry a value.
    pub fn present(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// Labels plus the datasets drawn over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// X-axis labels (dates).
    pub labels: Vec<String>,
    /// Lines, each as long as `labels`.
    pub datasets: Vec<Dataset>,
}

impl ChartPayload {
    /// Look up a dataset by its legend label.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    /// `true` when every dataset has exactly one entry per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

//! Formatted metric panels for the fundamental, sentiment and indicator views.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::tool::AnalysisTool;

/// Overall market mood derived from the sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Score at or above 50.
    Positive,
    /// Score below 50.
    Negative,
}

impl Tone {
    /// Classify a 0-100 sentiment score.
    pub fn from_score(score: f64) -> Self {
        if score >= 50.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

/// Metric name → display string for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPanel {
    /// Panel the values belong to.
    pub tool: AnalysisTool,
    /// Formatted values keyed by metric name.
    pub values: BTreeMap<String, String>,
    /// Present on sentiment panels only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl MetricPanel {
    /// Empty panel for `tool`.
    pub fn new(tool: AnalysisTool) -> Self {
        Self {
            tool,
            values: BTreeMap::new(),
            tone: None,
        }
    }

    /// Add (or replace) a formatted value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Formatted value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_boundary_is_fifty() {
        assert_eq!(Tone::from_score(50.0), Tone::Positive);
        assert_eq!(Tone::from_score(49.99), Tone::Negative);
    }

    #[test]
    fn tone_is_omitted_when_absent() {
        let mut panel = MetricPanel::new(AnalysisTool::Fundamental);
        panel.insert("peRatio", "21.40");
        let json = serde_json::to_string(&panel).unwrap();
        assert!(!json.contains("tone"));
        assert_eq!(panel.get("peRatio"), Some("21.40"));
    }
}

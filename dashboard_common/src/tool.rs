//! Analysis tool identifiers.
//!
//! Each panel of the analysis view is addressed by an explicit `AnalysisTool` value;
//! the client parses it from the command line and the server routes on it.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Analysis panel selected by the user.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AnalysisTool {
    /// Price chart with moving averages and indicator readings.
    #[default]
    Technical,
    /// Valuation and balance-sheet ratios.
    Fundamental,
    /// News/social sentiment scores.
    Sentiment,
}

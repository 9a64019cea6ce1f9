//! Mock fundamental, sentiment and indicator readings.
//!
//! Each value is drawn uniformly from a fixed half-open range. The ranges are part of
//! the contract: the rendering side and the tests both rely on them.
use std::ops::Range;

use dashboard_common::model::metrics::{MetricPanel, Tone};
use dashboard_common::tool::AnalysisTool;
use rand::Rng;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Price-to-earnings ratio range.
pub const PE_RATIO: Range<f64> = 15.0..35.0;
/// Price-to-book ratio range.
pub const PB_RATIO: Range<f64> = 2.0..7.0;
/// PEG ratio range.
pub const PEG_RATIO: Range<f64> = 1.0..2.0;
/// Debt-to-equity range (percent).
pub const DEBT_TO_EQUITY: Range<f64> = 30.0..80.0;
/// Current ratio range.
pub const CURRENT_RATIO: Range<f64> = 1.5..2.5;
/// Quick ratio range.
pub const QUICK_RATIO: Range<f64> = 1.0..1.5;
/// Range of every 0-100 score (sentiment scores, indicator readings).
pub const SCORE: Range<f64> = 0.0..100.0;
/// Analyst rating range (stars).
pub const ANALYST_RATING: Range<f64> = 0.0..5.0;

/// Valuation and balance-sheet ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalMetrics {
    /// Price-to-earnings ratio.
    pub pe_ratio: f64,
    /// Price-to-book ratio.
    pub pb_ratio: f64,
    /// Price/earnings-to-growth ratio.
    pub peg_ratio: f64,
    /// Debt-to-equity, in percent.
    pub debt_to_equity: f64,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
    /// Liquid assets over current liabilities.
    pub quick_ratio: f64,
}

impl FundamentalMetrics {
    /// Panel with every ratio at two decimals.
    pub fn to_panel(&self) -> MetricPanel {
        let mut panel = MetricPanel::new(AnalysisTool::Fundamental);
        panel.insert("peRatio", format!("{:.2}", self.pe_ratio));
        panel.insert("pbRatio", format!("{:.2}", self.pb_ratio));
        panel.insert("pegRatio", format!("{:.2}", self.peg_ratio));
        panel.insert("debtToEquity", format!("{:.2}", self.debt_to_equity));
        panel.insert("currentRatio", format!("{:.2}", self.current_ratio));
        panel.insert("quickRatio", format!("{:.2}", self.quick_ratio));
        panel
    }
}

/// News/social sentiment scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentMetrics {
    /// Blended sentiment score, 0-100.
    pub overall: f64,
    /// News sentiment score, 0-100.
    pub news: f64,
    /// Social media sentiment score, 0-100.
    pub social: f64,
    /// Average analyst rating in stars.
    pub analyst_rating: f64,
}

impl SentimentMetrics {
    /// Panel with scores as percentages and the overall tone.
    pub fn to_panel(&self) -> MetricPanel {
        let mut panel = MetricPanel::new(AnalysisTool::Sentiment);
        panel.insert("overallSentiment", format!("{:.1}%", self.overall));
        panel.insert("newsScore", format!("{:.1}%", self.news));
        panel.insert("socialScore", format!("{:.1}%", self.social));
        panel.insert("analystRating", format!("{:.1}", self.analyst_rating));
        panel.tone = Some(Tone::from_score(self.overall));
        panel
    }
}

/// Technical indicators listed next to the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Indicator {
    /// Relative strength index.
    #[strum(serialize = "RSI")]
    Rsi,
    /// Moving average convergence/divergence.
    #[strum(serialize = "MACD")]
    Macd,
    /// Stochastic oscillator.
    #[strum(serialize = "Stochastic")]
    Stochastic,
    /// Average directional index.
    #[strum(serialize = "ADX")]
    Adx,
}

/// Stateless source of mock readings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockMetricsGenerator;

impl MockMetricsGenerator {
    /// Draw a full set of fundamental ratios.
    pub fn fundamentals<R: Rng + ?Sized>(&self, rng: &mut R) -> FundamentalMetrics {
        FundamentalMetrics {
            pe_ratio: rng.random_range(PE_RATIO),
            pb_ratio: rng.random_range(PB_RATIO),
            peg_ratio: rng.random_range(PEG_RATIO),
            debt_to_equity: rng.random_range(DEBT_TO_EQUITY),
            current_ratio: rng.random_range(CURRENT_RATIO),
            quick_ratio: rng.random_range(QUICK_RATIO),
        }
    }

    /// Draw sentiment scores.
    pub fn sentiment<R: Rng + ?Sized>(&self, rng: &mut R) -> SentimentMetrics {
        SentimentMetrics {
            overall: rng.random_range(SCORE),
            news: rng.random_range(SCORE),
            social: rng.random_range(SCORE),
            analyst_rating: rng.random_range(ANALYST_RATING),
        }
    }

    /// Draw a single indicator reading in `[0, 100)`.
    pub fn indicator_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(SCORE)
    }

    /// One fresh reading per indicator, formatted with two decimals.
    pub fn indicators<R: Rng + ?Sized>(&self, rng: &mut R) -> MetricPanel {
        let mut panel = MetricPanel::new(AnalysisTool::Technical);
        for indicator in Indicator::iter() {
            panel.insert(
                indicator.to_string(),
                format!("{:.2}", self.indicator_value(rng)),
            );
        }
        panel
    }
}

//! Request routing.
//!
//! Maps a `RefreshRequest` or prediction search to the payload the matching panel
//! renders. Every call generates fresh data; nothing is cached between requests.
use chrono::NaiveDate;
use dashboard_common::command::RefreshRequest;
use dashboard_common::symbols::{normalize_symbol, DEFAULT_STOCK};
use dashboard_common::tool::AnalysisTool;
use dashboard_common::{DashboardError, Request, Response, Result};
use log::debug;
use rand::Rng;

use crate::model::metrics::MockMetricsGenerator;
use crate::model::pipeline::{build_prediction_payload, build_series_payload};
use crate::model::prediction::PredictionGenerator;
use crate::model::time_series::TimeSeriesGenerator;

/// Produces responses for non-streaming requests.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    series: TimeSeriesGenerator,
    metrics: MockMetricsGenerator,
    predictions: PredictionGenerator,
    days_back: u32,
}

impl Dispatcher {
    /// Technical charts and prediction histories span `days_back + 1` days; predictions
    /// extend `days_forward` days past today.
    pub fn new(series: TimeSeriesGenerator, days_back: u32, days_forward: u32) -> Self {
        Self {
            predictions: PredictionGenerator::new(series.clone(), days_back, days_forward),
            series,
            metrics: MockMetricsGenerator,
            days_back,
        }
    }

    /// Answer `request`. Subscriptions are streamed by the connection handler and are
    /// rejected here.
    pub fn handle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        request: &Request,
    ) -> Result<Response> {
        match request {
            Request::Refresh(refresh) => self.refresh(rng, today, refresh),
            Request::Predict { symbol } => self.predict(rng, today, symbol),
            Request::Subscribe => Err(DashboardError::Protocol(
                "subscribe is a streaming request".to_string(),
            )),
        }
    }

    /// Regenerate the panel named by `request.tool`.
    pub fn refresh<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        request: &RefreshRequest,
    ) -> Result<Response> {
        debug!("Refreshing {} panel", request.tool);
        match request.tool {
            AnalysisTool::Technical => {
                let symbol = match &request.symbol {
                    Some(raw) => normalize_symbol(raw)?,
                    None => DEFAULT_STOCK.to_string(),
                };
                let history = self.series.history(rng, &symbol, today, self.days_back)?;
                let chart = build_series_payload(&history, &request.windows)?;
                Ok(Response::Chart {
                    chart,
                    indicators: self.metrics.indicators(rng),
                })
            }
            AnalysisTool::Fundamental => {
                Ok(Response::Metrics(self.metrics.fundamentals(rng).to_panel()))
            }
            AnalysisTool::Sentiment => Ok(Response::Metrics(self.metrics.sentiment(rng).to_panel())),
        }
    }

    /// Prediction cards and chart for a searched symbol.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        symbol: &str,
    ) -> Result<Response> {
        let outcome = self.predictions.predict(rng, symbol, today)?;
        let chart = build_prediction_payload(&outcome.history, &outcome.forecast)?;
        Ok(Response::Prediction {
            set: outcome.set,
            chart,
        })
    }
}

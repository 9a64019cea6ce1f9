//! Mock stock predictions.
//!
//! A prediction is built from a fresh history/forecast pair: the last historical price
//! becomes the current price and each horizon gets a bounded upward move plus a mock
//! confidence score.
use chrono::NaiveDate;
use dashboard_common::model::prediction::{Horizon, Prediction, PredictionSet};
use dashboard_common::model::series::Series;
use dashboard_common::symbols::{company_name, normalize_symbol};
use dashboard_common::{DashboardError, Result};
use rand::Rng;

use crate::model::time_series::TimeSeriesGenerator;

/// Widest spread added on top of a horizon's confidence floor.
const CONFIDENCE_SPREAD: u8 = 15;

/// Prediction cards plus the series the chart is drawn from.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    /// Cards shown in the prediction panel.
    pub set: PredictionSet,
    /// Historical line, ending today.
    pub history: Series,
    /// Predicted line, starting tomorrow.
    pub forecast: Series,
}

/// Builds `PredictionOutcome`s for searched symbols.
#[derive(Debug, Clone)]
pub struct PredictionGenerator {
    series: TimeSeriesGenerator,
    days_back: u32,
    days_forward: u32,
}

impl PredictionGenerator {
    /// Histories span `days_back + 1` days and forecasts `days_forward` days.
    pub fn new(series: TimeSeriesGenerator, days_back: u32, days_forward: u32) -> Self {
        Self {
            series,
            days_back,
            days_forward,
        }
    }

    /// Generate predictions for `raw_symbol` as typed by the user.
    ///
    /// Returns `InvalidArgument` when the symbol is blank.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        raw_symbol: &str,
        today: NaiveDate,
    ) -> Result<PredictionOutcome> {
        let symbol = normalize_symbol(raw_symbol)?;
        let (history, forecast) =
            self.series
                .generate(rng, &symbol, today, self.days_back, self.days_forward)?;
        let current_price = history
            .last()
            .map(|p| p.price)
            .ok_or_else(|| DashboardError::invalid("history is empty"))?;

        let predictions = Horizon::ALL
            .iter()
            .map(|horizon| predict_horizon(rng, *horizon, current_price))
            .collect();

        Ok(PredictionOutcome {
            set: PredictionSet {
                company_name: company_name(&symbol),
                symbol,
                current_price,
                predictions,
            },
            history,
            forecast,
        })
    }
}

fn predict_horizon<R: Rng + ?Sized>(rng: &mut R, period: Horizon, current: f64) -> Prediction {
    let gain = rng.random_range(0.0..1.0) * period.max_gain();
    let price = current * (1.0 + gain);
    Prediction {
        period,
        price,
        change_percent: (price - current) / current * 100.0,
        confidence: period.confidence_floor() + rng.random_range(0..=CONFIDENCE_SPREAD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> PredictionGenerator {
        PredictionGenerator::new(TimeSeriesGenerator::default(), 30, 30)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn current_price_is_last_historical_price() {
        let outcome = generator()
            .predict(&mut StdRng::seed_from_u64(5), " aapl ", today())
            .unwrap();
        assert_eq!(outcome.set.symbol, "AAPL");
        assert_eq!(outcome.set.company_name, "Apple Inc.");
        assert_eq!(outcome.history.len(), 31);
        assert_eq!(outcome.forecast.len(), 30);
        assert_eq!(
            Some(outcome.set.current_price),
            outcome.history.last().map(|p| p.price)
        );
    }

    #[test]
    fn one_card_per_horizon_with_bounded_move_and_confidence() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let outcome = generator().predict(&mut rng, "ZZZ", today()).unwrap();
            let set = outcome.set;
            assert_eq!(set.company_name, "ZZZ Corp");
            let periods: Vec<Horizon> = set.predictions.iter().map(|p| p.period).collect();
            assert_eq!(periods, Horizon::ALL.to_vec());

            for p in &set.predictions {
                let floor = p.period.confidence_floor();
                assert!(p.confidence >= floor && p.confidence <= floor + CONFIDENCE_SPREAD);
                assert!(p.confidence <= 100);
                assert!(p.price >= set.current_price);
                assert!(p.change_percent >= 0.0);
                assert!(p.change_percent < p.period.max_gain() * 100.0 + 1e-9);
                assert_relative_eq!(
                    p.price,
                    set.current_price * (1.0 + p.change_percent / 100.0),
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn blank_symbol_is_invalid() {
        let result = generator().predict(&mut StdRng::seed_from_u64(7), "  ", today());
        assert!(matches!(result, Err(DashboardError::InvalidArgument(_))));
    }
}

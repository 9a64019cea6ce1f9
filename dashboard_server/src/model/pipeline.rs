//! Chart payload assembly.
//!
//! Turns generated series into labels plus datasets that are index-aligned with those
//! labels, which is the shape the chart widget draws from.
use std::collections::BTreeSet;

use dashboard_common::model::chart::{
    ma_label, ChartPayload, Dataset, HISTORICAL_LABEL, PREDICTED_LABEL, PRICE_LABEL,
};
use dashboard_common::model::series::Series;
use dashboard_common::{DashboardError, Result};

use crate::model::moving_average::moving_average;

/// Price line plus one moving-average line per window, windows in ascending order.
///
/// Returns `InvalidArgument` for an empty series or a zero window.
pub fn build_series_payload(series: &Series, windows: &BTreeSet<usize>) -> Result<ChartPayload> {
    if series.is_empty() {
        return Err(DashboardError::invalid(format!(
            "cannot chart an empty series for {}",
            series.symbol()
        )));
    }

    let prices = series.prices();
    let mut datasets = Vec::with_capacity(windows.len() + 1);
    datasets.push(Dataset::solid(
        PRICE_LABEL,
        prices.iter().copied().map(Some).collect(),
    ));
    for &window in windows {
        datasets.push(Dataset::solid(ma_label(window), moving_average(&prices, window)?));
    }

    Ok(ChartPayload {
        labels: series.labels(),
        datasets,
    })
}

/// Historical line followed by a dashed predicted line over the concatenated dates.
///
/// Each line holds `None` wherever the other one has data, so the chart shows one
/// continuous historical segment and then the dashed forecast. Returns
/// `InvalidArgument` when `history` is empty.
pub fn build_prediction_payload(history: &Series, forecast: &Series) -> Result<ChartPayload> {
    if history.is_empty() {
        return Err(DashboardError::invalid(format!(
            "cannot chart a prediction without history for {}",
            history.symbol()
        )));
    }

    let mut labels = history.labels();
    labels.extend(forecast.labels());

    let historical = history
        .prices()
        .into_iter()
        .map(Some)
        .chain(std::iter::repeat_n(None, forecast.len()))
        .collect();
    let predicted = std::iter::repeat_n(None, history.len())
        .chain(forecast.prices().into_iter().map(Some))
        .collect();

    Ok(ChartPayload {
        labels,
        datasets: vec![
            Dataset::solid(HISTORICAL_LABEL, historical),
            Dataset::dashed(PREDICTED_LABEL, predicted),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::time_series::TimeSeriesGenerator;
    use chrono::NaiveDate;
    use dashboard_common::model::chart::LineStyle;
    use dashboard_common::model::series::PricePoint;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn fixed_series(prices: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = prices
            .iter()
            .zip(start.iter_days())
            .map(|(price, date)| PricePoint { date, price: *price })
            .collect();
        Series::new("AAPL", points).unwrap()
    }

    #[test]
    fn series_payload_has_price_and_requested_averages() {
        let series = fixed_series(&[150.0, 160.0, 170.0, 180.0]);
        let windows: BTreeSet<usize> = [3, 2].into_iter().collect();
        let payload = build_series_payload(&series, &windows).unwrap();

        assert!(payload.is_aligned());
        let labels: Vec<&str> = payload.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Price", "MA(2)", "MA(3)"]);
        assert_eq!(
            payload.dataset("MA(2)").unwrap().data,
            vec![None, Some(155.0), Some(165.0), Some(175.0)]
        );
        assert_eq!(
            payload.dataset("MA(3)").unwrap().data,
            vec![None, None, Some(160.0), Some(170.0)]
        );
        assert_eq!(payload.labels[0], "2024-01-01");
    }

    #[test]
    fn series_payload_without_windows_is_just_price() {
        let series = fixed_series(&[1.0, 2.0]);
        let payload = build_series_payload(&series, &BTreeSet::new()).unwrap();
        assert_eq!(payload.datasets.len(), 1);
        assert_eq!(payload.datasets[0].present(), 2);
    }

    #[test]
    fn zero_window_or_empty_series_is_rejected() {
        let series = fixed_series(&[1.0, 2.0]);
        let zero: BTreeSet<usize> = [0].into_iter().collect();
        assert!(build_series_payload(&series, &zero).is_err());

        let empty = Series::new("AAPL", Vec::new()).unwrap();
        assert!(matches!(
            build_series_payload(&empty, &BTreeSet::new()),
            Err(DashboardError::InvalidArgument(_))
        ));
        assert!(build_prediction_payload(&empty, &series).is_err());
    }

    #[test]
    fn prediction_payload_pads_each_line_with_the_other_region() {
        let mut rng = StdRng::seed_from_u64(21);
        let (history, forecast) = TimeSeriesGenerator::default()
            .generate(&mut rng, "AAPL", today(), 30, 30)
            .unwrap();
        let payload = build_prediction_payload(&history, &forecast).unwrap();

        assert_eq!(payload.labels.len(), 61);
        assert!(payload.is_aligned());

        let historical = payload.dataset(HISTORICAL_LABEL).unwrap();
        assert_eq!(historical.style, LineStyle::Solid);
        assert!(historical.data[..31].iter().all(Option::is_some));
        assert!(historical.data[31..].iter().all(Option::is_none));

        let predicted = payload.dataset(PREDICTED_LABEL).unwrap();
        assert_eq!(predicted.style, LineStyle::Dashed);
        assert!(predicted.data[..31].iter().all(Option::is_none));
        assert_eq!(
            predicted.data[31..].to_vec(),
            forecast.prices().into_iter().map(Some).collect::<Vec<_>>()
        );

        assert_eq!(payload.labels[30], "2024-05-10");
        assert_eq!(payload.labels[31], "2024-05-11");
    }

    #[test]
    fn prediction_payload_with_empty_forecast_is_history_only() {
        let history = fixed_series(&[5.0, 6.0]);
        let forecast = Series::new("AAPL", Vec::new()).unwrap();
        let payload = build_prediction_payload(&history, &forecast).unwrap();
        assert_eq!(payload.labels.len(), 2);
        assert_eq!(payload.dataset(PREDICTED_LABEL).unwrap().present(), 0);
    }
}

//! Synthetic price history and forecast generation.
//!
//! Prices are drawn independently and uniformly from a fixed `PriceRange`; dates are
//! consecutive calendar days anchored on the caller-supplied `today`. Randomness comes
//! from the `Rng` passed in, so a seeded generator reproduces the same series.
use chrono::{Days, NaiveDate};
use dashboard_common::model::series::{PricePoint, Series};
use dashboard_common::{DashboardError, Result};
use rand::Rng;

/// Default lower bound for generated prices (inclusive).
pub const DEFAULT_LOW: f64 = 150.0;
/// Default upper bound for generated prices (exclusive).
pub const DEFAULT_HIGH: f64 = 200.0;

/// Half-open interval `[low, high)` that mock prices are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    low: f64,
    high: f64,
}

impl PriceRange {
    /// Build a range; both bounds must be finite, `low` positive and `high > low`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !(low.is_finite() && high.is_finite()) || low <= 0.0 || high <= low {
            return Err(DashboardError::invalid(format!(
                "price range [{}, {}) must be positive and non-empty",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// `true` if `price` lies inside the range.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price < self.high
    }

    /// Draw one price.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..self.high)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

/// Generates dated mock price sequences.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesGenerator {
    range: PriceRange,
}

impl TimeSeriesGenerator {
    /// Create a generator drawing from `range`.
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }

    /// History of `days_back + 1` daily prices ending at `today` (inclusive).
    pub fn history<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        symbol: &str,
        today: NaiveDate,
        days_back: u32,
    ) -> Result<Series> {
        let mut points = Vec::with_capacity(days_back as usize + 1);
        for offset in (0..=days_back).rev() {
            let date = today
                .checked_sub_days(Days::new(u64::from(offset)))
                .ok_or_else(|| out_of_range(today, offset))?;
            points.push(PricePoint {
                date,
                price: self.range.sample(rng),
            });
        }
        Series::new(symbol, points)
    }

    /// Forecast of `days_forward` daily prices starting the day after `today`.
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        symbol: &str,
        today: NaiveDate,
        days_forward: u32,
    ) -> Result<Series> {
        let mut points = Vec::with_capacity(days_forward as usize);
        for offset in 1..=days_forward {
            let date = today
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or_else(|| out_of_range(today, offset))?;
            points.push(PricePoint {
                date,
                price: self.range.sample(rng),
            });
        }
        Series::new(symbol, points)
    }

    /// History and forecast in one call, history drawn first.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        symbol: &str,
        today: NaiveDate,
        days_back: u32,
        days_forward: u32,
    ) -> Result<(Series, Series)> {
        let history = self.history(rng, symbol, today, days_back)?;
        let forecast = self.forecast(rng, symbol, today, days_forward)?;
        Ok((history, forecast))
    }
}

fn out_of_range(today: NaiveDate, offset: u32) -> DashboardError {
    DashboardError::invalid(format!(
        "{} days from {} is outside the supported calendar",
        offset, today
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    #[test]
    fn thirty_days_back_yields_thirty_one_points_ending_today() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = TimeSeriesGenerator::default()
            .history(&mut rng, "AAPL", today(), 30)
            .unwrap();

        assert_eq!(series.len(), 31);
        assert_eq!(series.points()[30].date, today());
        assert_eq!(
            series.points()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()
        );
        for pair in series.points().windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        assert!(series.prices().iter().all(|p| (150.0..200.0).contains(p)));
    }

    #[test]
    fn history_crosses_leap_day() {
        let mut rng = StdRng::seed_from_u64(2);
        let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let series = TimeSeriesGenerator::default()
            .history(&mut rng, "AAPL", march_first, 1)
            .unwrap();
        assert_eq!(
            series.dates(),
            vec![NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), march_first]
        );
    }

    #[test]
    fn forecast_starts_the_day_after_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = TimeSeriesGenerator::default()
            .forecast(&mut rng, "AAPL", today(), 30)
            .unwrap();
        assert_eq!(series.len(), 30);
        assert_eq!(series.points()[0].date, today().succ_opt().unwrap());
    }

    #[test]
    fn zero_forecast_is_empty() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = TimeSeriesGenerator::default()
            .forecast(&mut rng, "AAPL", today(), 0)
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn same_seed_same_series() {
        let generator = TimeSeriesGenerator::default();
        let a = generator
            .generate(&mut StdRng::seed_from_u64(9), "MSFT", today(), 30, 30)
            .unwrap();
        let b = generator
            .generate(&mut StdRng::seed_from_u64(9), "MSFT", today(), 30, 30)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(PriceRange::new(0.0, 10.0).is_err());
        assert!(PriceRange::new(10.0, 10.0).is_err());
        assert!(PriceRange::new(10.0, f64::INFINITY).is_err());
        assert!(PriceRange::new(1.0, 2.0).is_ok());
    }

    proptest! {
        #[test]
        fn prices_stay_within_configured_range(
            seed in any::<u64>(),
            low in 1.0f64..1000.0,
            width in 0.01f64..500.0,
            days_back in 0u32..120,
        ) {
            let range = PriceRange::new(low, low + width).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let series = TimeSeriesGenerator::new(range)
                .history(&mut rng, "X", today(), days_back)
                .unwrap();
            prop_assert_eq!(series.len(), days_back as usize + 1);
            prop_assert!(series.prices().iter().all(|p| range.contains(*p)));
        }
    }
}

//! Simple moving average.
use dashboard_common::{DashboardError, Result};

/// Simple moving average of `prices` over `window` observations.
///
/// The output has one entry per input price. Entry `i` is `None` while fewer than
/// `window` prices are available (`i < window - 1`), otherwise the mean of
/// `prices[i + 1 - window..=i]`. A window longer than the input yields all `None`;
/// an empty input yields an empty output.
///
/// Returns `InvalidArgument` for a zero window.
pub fn moving_average(prices: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(DashboardError::invalid("moving average window must be at least 1"));
    }

    let mut averages = vec![None; prices.len()];
    if prices.len() < window {
        return Ok(averages);
    }

    for end in (window - 1)..prices.len() {
        let start = end + 1 - window;
        let sum: f64 = prices[start..=end].iter().sum();
        averages[end] = Some(sum / window as f64);
    }
    Ok(averages)
}

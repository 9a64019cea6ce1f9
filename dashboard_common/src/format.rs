//! Display formatting for prices and percentages.

/// Format a USD amount with thousands separators and two decimals, e.g. `$1,234.56`.
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.2}", price.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a value already expressed in percent with two decimals, e.g. `12.34%`.
pub fn format_percentage(percent: f64) -> String {
    format!("{:.2}%", percent)
}

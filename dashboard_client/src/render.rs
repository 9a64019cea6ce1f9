//! Plain-text rendering of server responses.
use dashboard_common::format::{format_percentage, format_price};
use dashboard_common::model::chart::ChartPayload;
use dashboard_common::model::metrics::MetricPanel;
use dashboard_common::model::prediction::PredictionSet;
use dashboard_common::model::tick::TickUpdate;

/// One row per label, one column per dataset; absent values print as `-`.
pub fn render_chart(chart: &ChartPayload) -> Vec<String> {
    let mut header = format!("{:<12}", "Date");
    for dataset in &chart.datasets {
        header.push_str(&format!(" {:>16}", dataset.label));
    }

    let mut lines = vec![header];
    for (i, label) in chart.labels.iter().enumerate() {
        let mut row = format!("{:<12}", label);
        for dataset in &chart.datasets {
            let cell = match dataset.data.get(i).copied().flatten() {
                Some(value) => format_price(value),
                None => "-".to_string(),
            };
            row.push_str(&format!(" {:>16}", cell));
        }
        lines.push(row);
    }
    lines
}

/// `name: value` lines for a metric panel, followed by the tone when present.
pub fn render_panel(panel: &MetricPanel) -> Vec<String> {
    let mut lines = vec![format!("[{}]", panel.tool)];
    lines.extend(
        panel
            .values
            .iter()
            .map(|(name, value)| format!("{:<18} {}", name, value)),
    );
    if let Some(tone) = panel.tone {
        lines.push(format!("{:<18} {}", "tone", tone));
    }
    lines
}

/// Header with the current price, then one line per prediction card.
pub fn render_prediction(set: &PredictionSet) -> Vec<String> {
    let mut lines = vec![
        format!("{} - {}", set.symbol, set.company_name),
        format!("Current price: {}", format_price(set.current_price)),
    ];
    for p in &set.predictions {
        lines.push(format!(
            "{:>4} {:>12} {:>8}  Confidence: {}%",
            p.period.to_string(),
            format_price(p.price),
            format_percentage(p.change_percent),
            p.confidence
        ));
    }
    lines
}

/// `symbol price direction` per update.
pub fn render_ticks(updates: &[TickUpdate]) -> Vec<String> {
    updates
        .iter()
        .map(|u| format!("{:<7} {:>12} {}", u.symbol, format_price(u.price), u.direction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_common::model::chart::Dataset;
    use dashboard_common::model::metrics::Tone;
    use dashboard_common::model::prediction::{Horizon, Prediction};
    use dashboard_common::model::tick::Direction;
    use dashboard_common::tool::AnalysisTool;

    #[test]
    fn chart_rows_mark_absent_values() {
        let chart = ChartPayload {
            labels: vec!["2024-01-01".into(), "2024-01-02".into()],
            datasets: vec![
                Dataset::solid("Price", vec![Some(150.0), Some(160.0)]),
                Dataset::solid("MA(2)", vec![None, Some(155.0)]),
            ],
        };
        let lines = render_chart(&chart);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("MA(2)"));
        assert!(lines[1].trim_end().ends_with('-'));
        assert!(lines[2].ends_with("$155.00"));
    }

    #[test]
    fn panel_lists_values_and_tone() {
        let mut panel = MetricPanel::new(AnalysisTool::Sentiment);
        panel.insert("newsScore", "61.0%");
        panel.tone = Some(Tone::Positive);
        let lines = render_panel(&panel);
        assert_eq!(lines[0], "[sentiment]");
        assert!(lines[1].starts_with("newsScore"));
        assert!(lines[2].ends_with("positive"));
    }

    #[test]
    fn prediction_cards_show_price_change_and_confidence() {
        let set = PredictionSet {
            symbol: "AAPL".into(),
            company_name: "Apple Inc.".into(),
            current_price: 1000.0,
            predictions: vec![Prediction {
                period: Horizon::Week,
                price: 1050.0,
                change_percent: 5.0,
                confidence: 81,
            }],
        };
        let lines = render_prediction(&set);
        assert_eq!(lines[0], "AAPL - Apple Inc.");
        assert_eq!(lines[1], "Current price: $1,000.00");
        assert!(lines[2].contains("7d"));
        assert!(lines[2].contains("$1,050.00"));
        assert!(lines[2].contains("5.00%"));
        assert!(lines[2].ends_with("Confidence: 81%"));
    }

    #[test]
    fn ticks_render_direction() {
        let lines = render_ticks(&[TickUpdate {
            symbol: "nasdaq".into(),
            price: 15360.28,
            direction: Direction::Down,
        }]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("$15,360.28"));
        assert!(lines[0].ends_with("down"));
    }
}

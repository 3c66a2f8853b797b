use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ChartData, ChartKind, ChartOptions, ChartSpec, Colors, Dataset};

pub const DEFAULT_CHART_KEY: &str = "default";

static CHART_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[CHART:(.*?)\]").expect("chart placeholder pattern is valid"));

const MONTHS: [&str; 5] = ["January", "February", "March", "April", "May"];

static CHART_TABLE: LazyLock<HashMap<&'static str, ChartSpec>> = LazyLock::new(|| {
    HashMap::from([
        ("bar", sales_bar_chart()),
        ("line", revenue_line_chart()),
        ("pie", product_pie_chart()),
        (DEFAULT_CHART_KEY, quarterly_bar_chart()),
    ])
});

/// Keyword of the first `[CHART:<type>]` placeholder in `text`.
pub fn extract_chart_keyword(text: &str) -> Option<&str> {
    CHART_PLACEHOLDER
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|keyword| keyword.as_str())
}

/// Sample chart for a placeholder keyword; unknown keywords get the quarterly bar chart.
pub fn resolve_chart(keyword: &str) -> &'static ChartSpec {
    let key = keyword.trim().to_lowercase();
    CHART_TABLE
        .get(key.as_str())
        .or_else(|| CHART_TABLE.get(DEFAULT_CHART_KEY))
        .expect("default chart is always registered")
}

fn sales_bar_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: MONTHS.to_vec(),
            datasets: vec![Dataset {
                label: Some("Sales Data"),
                data: vec![65.0, 59.0, 80.0, 81.0, 56.0],
                background_color: Colors::PerPoint(vec![
                    "rgba(102, 126, 234, 0.7)",
                    "rgba(118, 75, 162, 0.7)",
                    "rgba(255, 99, 132, 0.7)",
                    "rgba(54, 162, 235, 0.7)",
                    "rgba(255, 206, 86, 0.7)",
                ]),
                border_color: Colors::PerPoint(vec![
                    "rgba(102, 126, 234, 1)",
                    "rgba(118, 75, 162, 1)",
                    "rgba(255, 99, 132, 1)",
                    "rgba(54, 162, 235, 1)",
                    "rgba(255, 206, 86, 1)",
                ]),
                border_width: Some(1),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions::titled("Sample Sales Data"),
    }
}

fn revenue_line_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: MONTHS.to_vec(),
            datasets: vec![Dataset {
                label: Some("Revenue"),
                data: vec![65.0, 59.0, 80.0, 81.0, 56.0],
                background_color: Colors::Single("rgba(102, 126, 234, 0.1)"),
                border_color: Colors::Single("rgba(102, 126, 234, 1)"),
                border_width: None,
                tension: Some(0.3),
                fill: Some(true),
            }],
        },
        options: ChartOptions::titled("Monthly Revenue Trend"),
    }
}

fn product_pie_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: vec!["Product A", "Product B", "Product C", "Product D"],
            datasets: vec![Dataset {
                label: None,
                data: vec![30.0, 25.0, 20.0, 25.0],
                background_color: Colors::PerPoint(vec![
                    "rgba(102, 126, 234, 0.7)",
                    "rgba(118, 75, 162, 0.7)",
                    "rgba(255, 99, 132, 0.7)",
                    "rgba(54, 162, 235, 0.7)",
                ]),
                border_color: Colors::PerPoint(vec![
                    "rgba(102, 126, 234, 1)",
                    "rgba(118, 75, 162, 1)",
                    "rgba(255, 99, 132, 1)",
                    "rgba(54, 162, 235, 1)",
                ]),
                border_width: Some(1),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions::titled("Product Distribution"),
    }
}

fn quarterly_bar_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: vec!["Q1", "Q2", "Q3", "Q4"],
            datasets: vec![Dataset {
                label: Some("Quarterly Data"),
                data: vec![25.0, 30.0, 35.0, 40.0],
                background_color: Colors::Single("rgba(102, 126, 234, 0.7)"),
                border_color: Colors::Single("rgba(102, 126, 234, 1)"),
                border_width: Some(1),
                tension: None,
                fill: None,
            }],
        },
        options: ChartOptions::titled("Quarterly Performance"),
    }
}

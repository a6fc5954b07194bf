//! Chart Data
//!
//! Size-vs-time line chart description: one x value per measured size and
//! one series per pivot strategy. Rendering is left to whatever consumes the
//! JSON report.

use crate::report::ReportRow;
use pivotbench_core::PivotStrategy;
use serde::{Deserialize, Serialize};

/// Chart title
pub const CHART_TITLE: &str = "Performance Comparison of QuickSort Algorithms";
/// X-axis label
pub const X_LABEL: &str = "Array Size";
/// Y-axis label
pub const Y_LABEL: &str = "Execution Time (seconds)";

/// Point marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// `o`
    Circle,
    /// `s`
    Square,
}

impl Marker {
    /// Marker used for a strategy's series
    pub fn for_strategy(strategy: PivotStrategy) -> Self {
        match strategy {
            PivotStrategy::Randomized => Marker::Circle,
            PivotStrategy::Deterministic => Marker::Square,
        }
    }

    /// Single-character symbol (matplotlib-style)
    pub fn symbol(self) -> char {
        match self {
            Marker::Circle => 'o',
            Marker::Square => 's',
        }
    }
}

/// One line on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label
    pub label: String,
    /// Strategy the series plots
    pub strategy: PivotStrategy,
    /// Point marker
    pub marker: Marker,
    /// Mean seconds, parallel with `ChartData::x_values`
    pub values: Vec<f64>,
}

/// Size-vs-time chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Input sizes in sweep order
    pub x_values: Vec<usize>,
    /// One series per strategy
    pub series: Vec<ChartSeries>,
    /// Show a legend
    pub legend: bool,
    /// Show grid lines
    pub grid: bool,
}

impl ChartData {
    /// Build the chart from report rows, keeping row order
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let series = PivotStrategy::ALL
            .iter()
            .map(|&strategy| ChartSeries {
                label: strategy.label().to_string(),
                strategy,
                marker: Marker::for_strategy(strategy),
                values: rows.iter().map(|r| r.variant(strategy).mean_s).collect(),
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_values: rows.iter().map(|r| r.input_size).collect(),
            series,
            legend: true,
            grid: true,
        }
    }

    /// Series for one strategy
    pub fn series_for(&self, strategy: PivotStrategy) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.strategy == strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::row;

    #[test]
    fn test_series_follow_rows() {
        let rows = vec![row(100, &[0.5], &[1.5]), row(50, &[0.25], &[0.75])];
        let chart = ChartData::from_rows(&rows);

        assert_eq!(chart.x_values, vec![100, 50]);
        let randomized = chart.series_for(PivotStrategy::Randomized).unwrap();
        assert_eq!(randomized.values, vec![0.5, 0.25]);
        assert_eq!(randomized.marker.symbol(), 'o');
        assert_eq!(randomized.label, "Randomized QuickSort");

        let deterministic = chart.series_for(PivotStrategy::Deterministic).unwrap();
        assert_eq!(deterministic.values, vec![1.5, 0.75]);
        assert_eq!(deterministic.marker.symbol(), 's');
    }

    #[test]
    fn test_labels() {
        let chart = ChartData::from_rows(&[]);
        assert_eq!(chart.title, CHART_TITLE);
        assert_eq!(chart.x_label, "Array Size");
        assert_eq!(chart.y_label, "Execution Time (seconds)");
        assert!(chart.x_values.is_empty());
        assert!(chart.series.iter().all(|s| s.values.is_empty()));
    }
}

#![warn(missing_docs)]
//! PivotBench Report - Reporting and Chart Data
//!
//! Generates various output formats:
//! - JSON (machine-readable, includes chart data)
//! - CSV (spreadsheet-compatible)
//!
//! The human-readable table is rendered by the CLI.

mod chart;
mod csv;
mod json;
mod report;

pub use chart::{CHART_TITLE, ChartData, ChartSeries, Marker, X_LABEL, Y_LABEL};
pub use csv::{CSV_HEADER, generate_csv_report};
pub use json::{generate_json_report, parse_json_report};
pub use report::{
    Report, ReportConfig, ReportMeta, ReportRow, ReportSummary, SCHEMA_VERSION, SystemInfo,
    VariantMetrics,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width console table
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format durations for human display
pub fn format_duration(seconds: f64) -> String {
    let nanos = seconds * 1e9;
    if nanos < 1_000.0 {
        format!("{:.2} ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2} us", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", seconds)
    }
}

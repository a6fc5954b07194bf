//! Output Formatting
//!
//! Human-readable output for a sweep report:
//! - The results table (size, randomized mean, deterministic mean; seconds
//!   with 6 decimals)
//! - Per-size detail block with dispersion and the deterministic/randomized
//!   ratio
//! - Run summary

use pivotbench_core::PivotStrategy;
use pivotbench_report::{Report, format_duration};
use std::fmt::Write;

/// Width of the size column
const SIZE_WIDTH: usize = 15;
/// Width of each timing column
const TIME_WIDTH: usize = 25;
/// Length of the rule under the table header
const RULE_WIDTH: usize = 65;

/// Format the results table
///
/// ```text
/// Array Size     Randomized QuickSort     Deterministic QuickSort
/// =================================================================
/// 10000          0.012345                 0.010987
/// ```
///
/// Cells are left-aligned and padded, so lines carry trailing spaces.
pub fn format_table(report: &Report) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{:<SIZE_WIDTH$}{:<TIME_WIDTH$}{:<TIME_WIDTH$}",
        "Array Size",
        PivotStrategy::Randomized.label(),
        PivotStrategy::Deterministic.label(),
    );
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');

    for row in &report.rows {
        let _ = writeln!(
            output,
            "{:<SIZE_WIDTH$}{:<TIME_WIDTH$.6}{:<TIME_WIDTH$.6}",
            row.input_size, row.randomized.mean_s, row.deterministic.mean_s,
        );
    }

    output
}

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format_table(report));

    if !report.rows.is_empty() {
        output.push_str("\nDetails\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for row in &report.rows {
            let _ = writeln!(output, "  n = {}", row.input_size);
            for strategy in PivotStrategy::ALL {
                let m = row.variant(strategy);
                let _ = writeln!(
                    output,
                    "      {:<24} mean: {}  median: {}  stddev: {}  min: {}  max: {}",
                    strategy.label(),
                    format_duration(m.mean_s),
                    format_duration(m.median_s),
                    format_duration(m.std_dev_s),
                    format_duration(m.min_s),
                    format_duration(m.max_s),
                );
            }
            match (row.speedup, row.effect) {
                (Some(speedup), Some(effect)) => {
                    let _ = writeln!(
                        output,
                        "      deterministic / randomized: {:.2}x ({} effect)",
                        speedup, effect
                    );
                }
                (Some(speedup), None) => {
                    let _ = writeln!(output, "      deterministic / randomized: {:.2}x", speedup);
                }
                _ => {
                    output.push_str("      deterministic / randomized: -\n");
                }
            }
        }
    }

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    let _ = writeln!(
        output,
        "  Sizes: {}  Trials: {}  Deterministic slower: {}/{}",
        report.summary.sizes_measured,
        report.summary.total_trials,
        report.summary.deterministic_slower,
        report.summary.sizes_measured,
    );
    let _ = writeln!(
        output,
        "  Duration: {:.2} ms",
        report.summary.total_duration_ms
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivotbench_core::BenchmarkConfig;
    use pivotbench_report::{ReportRow, VariantMetrics};
    use pivotbench_stats::{EffectInterpretation, compute_summary};

    fn report(rows: Vec<(usize, f64, f64)>) -> Report {
        let rows = rows
            .into_iter()
            .map(|(size, r, d)| ReportRow {
                input_size: size,
                randomized: VariantMetrics::new(
                    PivotStrategy::Randomized,
                    r,
                    &compute_summary(&[r]),
                    vec![r],
                ),
                deterministic: VariantMetrics::new(
                    PivotStrategy::Deterministic,
                    d,
                    &compute_summary(&[d]),
                    vec![d],
                ),
                speedup: (r > 0.0).then(|| d / r),
                effect: Some(EffectInterpretation::Negligible),
            })
            .collect();
        Report::new(
            super::super::metadata::build_report_meta(&BenchmarkConfig::default()),
            rows,
            42.0,
        )
    }

    #[test]
    fn test_table_layout() {
        let table = format_table(&report(vec![
            (10000, 0.0123456789, 0.01),
            (500000, 1.5, 2.25),
        ]));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            format!(
                "{:<15}{:<25}{:<25}",
                "Array Size", "Randomized QuickSort", "Deterministic QuickSort"
            )
        );
        assert_eq!(lines[1], "=".repeat(65));
        assert_eq!(
            lines[2],
            format!("{:<15}{:<25}{:<25}", "10000", "0.012346", "0.010000")
        );
        assert_eq!(
            lines[3],
            format!("{:<15}{:<25}{:<25}", "500000", "1.500000", "2.250000")
        );
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = format_table(&report(vec![]));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_human_output_sections() {
        let output = format_human_output(&report(vec![(100, 0.001, 0.003), (200, 0.0, 0.001)]));

        assert!(output.contains("Details"));
        assert!(output.contains("  n = 100"));
        assert!(output.contains("deterministic / randomized: 3.00x (negligible effect)"));
        assert!(output.contains("deterministic / randomized: -"));
        assert!(output.contains("Deterministic slower: 2/2"));
        assert!(output.contains("Duration: 42.00 ms"));
    }
}

//! CSV Output

use crate::report::Report;
use std::fmt::Write;

/// Column header of the CSV report
pub const CSV_HEADER: &str = "size,randomized_mean_s,deterministic_mean_s,randomized_std_dev_s,deterministic_std_dev_s,speedup";

/// Generate a CSV report, one line per measured size.
///
/// An undefined speedup is written as an empty field.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(CSV_HEADER);
    output.push('\n');

    for row in &report.rows {
        let speedup = row
            .speedup
            .map(|s| format!("{:.4}", s))
            .unwrap_or_default();
        // Writing to a String cannot fail
        let _ = writeln!(
            output,
            "{},{:.9},{:.9},{:.9},{:.9},{}",
            row.input_size,
            row.randomized.mean_s,
            row.deterministic.mean_s,
            row.randomized.std_dev_s,
            row.deterministic.std_dev_s,
            speedup
        );
    }

    output
}

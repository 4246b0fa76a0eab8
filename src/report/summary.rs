use std::fmt::Write;

use super::CategoryReport;

const HEADER: &str = "Done. Generated:";

/// Human-readable list of generated files, one category per line.
#[must_use]
pub fn format_summary(reports: &[CategoryReport]) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');
    for report in reports {
        let _ = writeln!(output, "  {}", report.file_names().join(", "));
    }
    output
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

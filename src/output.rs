//! CLI output formatting.
//!
//! Each outcome has a pure `format_*` function (returns a `String`, no I/O,
//! unit testable) and a thin `print_*` wrapper that writes to the right
//! stream: reports go to stdout, errors to stderr.

use crate::assemble::AssemblyReport;
use std::fmt::Display;

/// One-line success summary: `Generated <path> (<N> frames)`.
pub fn format_report(report: &AssemblyReport) -> String {
    format!(
        "Generated {} ({} frames)",
        report.output_path.display(),
        report.frame_count
    )
}

/// Machine-readable report, pretty-printed JSON.
pub fn format_report_json(report: &AssemblyReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Uniform failure line: `Error: <message>`.
pub fn format_error(err: &impl Display) -> String {
    format!("Error: {err}")
}

pub fn print_report(report: &AssemblyReport) {
    println!("{}", format_report(report));
}

pub fn print_error(err: &impl Display) {
    eprintln!("{}", format_error(err));
}

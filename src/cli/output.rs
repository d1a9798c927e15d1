//! Output formatting for CLI

use crate::models::{TallyReport, Totals};
use crate::services::calculator::Calculator;

/// Plain summary sentence
#[must_use]
pub fn format_text(totals: &Totals) -> String {
    totals.to_string()
}

/// Build the machine-readable report for a finished run
#[must_use]
pub fn build_report(calculator: &Calculator, totals: &Totals) -> TallyReport {
    TallyReport {
        root: calculator.path().to_string(),
        strategy: calculator.strategy().to_string(),
        basis: calculator.options().basis.to_string(),
        file_count: totals.file_count(),
        total_bytes: totals.total_bytes(),
    }
}

/// Format a report as JSON
#[must_use]
pub fn format_json(report: &TallyReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

//! Report shaping: status filters, result lines, summary table, JSON output.

use crate::classify::Status;
use crate::error::CheckError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a `--format` value.
    pub fn parse(s: &str) -> Result<Self, CheckError> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CheckError::Config(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Which status categories the report keeps.
#[derive(Debug, Clone, Copy)]
pub struct ReportFilter {
    pub show_ok: bool,
    pub show_mismatch: bool,
    pub show_removed: bool,
    pub show_new: bool,
}

impl ReportFilter {
    /// Build from the four exclusion flags.
    pub fn from_excludes(ok: bool, mismatch: bool, removed: bool, new: bool) -> Self {
        Self {
            show_ok: !ok,
            show_mismatch: !mismatch,
            show_removed: !removed,
            show_new: !new,
        }
    }

    /// True when the given status should be reported.
    pub fn includes(&self, status: Status) -> bool {
        match status {
            Status::Ok => self.show_ok,
            Status::Mismatch => self.show_mismatch,
            Status::Removed => self.show_removed,
            Status::New => self.show_new,
        }
    }

    /// True when every category is suppressed: the run is a configured no-op.
    pub fn suppresses_everything(&self) -> bool {
        !self.show_ok && !self.show_mismatch && !self.show_removed && !self.show_new
    }
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self::from_excludes(false, false, false, false)
    }
}

/// One reported classification.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub hash: String,
    pub path: PathBuf,
    pub status: Status,
}

impl ReportEntry {
    /// Render the stdout line: `<hash>  <path>: <STATUS>`.
    pub fn render(&self) -> String {
        format!("{}  {}: {}", self.hash, self.path.display(), self.status)
    }
}

/// Per-status counts of reported lines.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CheckSummary {
    pub ok: usize,
    pub mismatch: usize,
    pub new: usize,
    pub removed: usize,
}

impl CheckSummary {
    /// Count one reported status.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Ok => self.ok += 1,
            Status::Mismatch => self.mismatch += 1,
            Status::New => self.new += 1,
            Status::Removed => self.removed += 1,
        }
    }

    /// Total reported lines.
    pub fn total(&self) -> usize {
        self.ok + self.mismatch + self.new + self.removed
    }
}

/// Full report of a check run: buffered results (JSON mode) and counts.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<ReportEntry>,
    pub summary: CheckSummary,
}

/// Format a section heading with bold/underline.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format the summary as a human-readable table with a styled heading.
pub fn format_summary_text(summary: &CheckSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Check Summary")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Status", "Files"]);
    table.add_row(vec!["OK".to_string(), summary.ok.to_string()]);
    table.add_row(vec!["MISMATCH".to_string(), summary.mismatch.to_string()]);
    table.add_row(vec!["NEW".to_string(), summary.new.to_string()]);
    table.add_row(vec!["REMOVED".to_string(), summary.removed.to_string()]);
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("Total: {} files reported.\n", summary.total()));
    out
}

/// Render the full report as pretty JSON for `--format json`.
pub fn format_report_json(report: &CheckReport) -> Result<String, CheckError> {
    Ok(serde_json::to_string_pretty(report)?)
}

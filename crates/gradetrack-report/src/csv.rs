//! CSV summary export.
//!
//! One row per student with name, id, assessment count, and weighted average.
//! This is a one-way export: individual assessments are not written, and the
//! read-back path only returns lines for display.

use std::path::Path;

use anyhow::{Context, Result};

use gradetrack_core::model::{Student, StudentSummary};
use gradetrack_core::roster::Roster;
use gradetrack_core::statistics::round_half_away;

/// Header row of every export.
pub const HEADER: &str = "Name,StudentID,NumAssessments,WeightedAverage";

/// Quote a field if it contains a delimiter, quote, or line break.
fn csv_escape(s: &str) -> String {
    if s.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a summary as one data row, average to two decimals.
pub fn summary_row(s: &StudentSummary) -> String {
    format!(
        "{},{},{},{:.2}",
        csv_escape(&s.name),
        csv_escape(&s.student_id),
        s.assessment_count,
        round_half_away(s.weighted_average, 2)
    )
}

/// The export row for a single student.
pub fn student_row(student: &Student) -> String {
    summary_row(&student.summary())
}

/// Header plus one row per student, in roster order.
pub fn render_csv(roster: &Roster) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for student in roster.students() {
        out.push_str(&student_row(student));
        out.push('\n');
    }
    out
}

/// Write the export, replacing any existing file.
pub fn write_csv(roster: &Roster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_csv(roster))
        .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = roster.len(), "grades exported");
    Ok(())
}

/// Read a previous export back as raw lines.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_csv_lines(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read CSV export from {}", path.display()))?;
    Ok(Some(content.lines().map(str::to_string).collect()))
}

//! The `gradetrack report` command.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;

use gradetrack_core::error::GradebookError;
use gradetrack_report::text::render_student_report;

use super::Session;

/// Output format for a student report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn execute(session: &Session, student_id: String, format: ReportFormat) -> Result<()> {
    let book = session.load()?;
    let student = book
        .roster
        .find(&student_id)
        .ok_or(GradebookError::StudentNotFound { id: student_id })?;

    match format {
        ReportFormat::Json => {
            let value = json!({
                "student": student,
                "summary": student.summary(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ReportFormat::Text => {
            print!("{}", render_student_report(student));
        }
    }

    Ok(())
}

//! Class report with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Gradebook, StudentSummary};
use crate::statistics::round_half_away;

/// A snapshot of every student's standing at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Name of the gradebook the report was built from.
    pub gradebook: String,
    /// One row per student, in roster order.
    pub students: Vec<StudentSummary>,
    /// Mean of the student averages; absent for an empty roster.
    pub class_mean: Option<f64>,
}

impl ClassReport {
    pub fn from_gradebook(book: &Gradebook) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            gradebook: book.name.clone(),
            students: book.roster.summaries(),
            class_mean: book.roster.class_mean(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ClassReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.gradebook));

        if self.students.is_empty() {
            md.push_str("No students found.\n");
            return md;
        }

        md.push_str("| Name | ID | Assessments | Average | Grade |\n");
        md.push_str("|------|----|-------------|---------|-------|\n");
        for s in &self.students {
            md.push_str(&format!(
                "| {} | {} | {} | {:.2}% | {} |\n",
                s.name,
                s.student_id,
                s.assessment_count,
                round_half_away(s.weighted_average, 2),
                s.letter_grade
            ));
        }

        if let Some(mean) = self.class_mean {
            md.push_str(&format!(
                "\n**Class Average:** {:.2}%\n",
                round_half_away(mean, 2)
            ));
        }

        md
    }
}

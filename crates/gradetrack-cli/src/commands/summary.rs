//! The `gradetrack summary` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;

use gradetrack_core::report::ClassReport;
use gradetrack_core::roster::ClassSummary;
use gradetrack_core::statistics::round_half_away;
use gradetrack_report::text::render_class_summary;

use super::Session;

/// Output format for the class summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Table,
    Text,
    Json,
    #[value(alias = "md")]
    Markdown,
}

pub fn execute(session: &Session, format: SummaryFormat, output: Option<PathBuf>) -> Result<()> {
    let book = session.load()?;
    let report = ClassReport::from_gradebook(&book);

    if let Some(path) = &output {
        report.save_json(path)?;
        eprintln!("Class report saved to: {}", path.display());
    }

    match format {
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        SummaryFormat::Markdown => {
            print!("{}", report.to_markdown());
        }
        SummaryFormat::Text | SummaryFormat::Table => {
            // An empty roster has no class mean to show.
            let Ok(summary) = book.roster.class_summary() else {
                println!("No students found.");
                return Ok(());
            };
            if format == SummaryFormat::Text {
                print!("{}", render_class_summary(&summary));
            } else {
                print_table(&book.name, &summary);
            }
        }
    }

    Ok(())
}

fn print_table(name: &str, summary: &ClassSummary) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Name", "ID", "Assessments", "Average", "Grade"]);

    for s in &summary.students {
        table.add_row(vec![
            Cell::new(&s.name),
            Cell::new(&s.student_id),
            Cell::new(s.assessment_count),
            Cell::new(format!("{:.2}%", round_half_away(s.weighted_average, 2))),
            Cell::new(s.letter_grade),
        ]);
    }

    println!("{name}");
    println!("{table}");
    println!(
        "Class Average: {:.2}%",
        round_half_away(summary.class_mean, 2)
    );
}

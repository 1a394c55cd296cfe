//! The `gradetrack add-assessment` command.

use anyhow::Result;
use clap::ValueEnum;

use gradetrack_core::model::Assessment;

use super::Session;

/// Assessment type as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Assignment,
    Exam,
}

#[allow(clippy::too_many_arguments)]
pub fn execute(
    session: &Session,
    student_id: String,
    kind: Kind,
    name: String,
    score: f64,
    max_score: f64,
    weight: Option<f64>,
) -> Result<()> {
    let name = name.trim().to_string();
    let assessment = match kind {
        Kind::Assignment => {
            anyhow::ensure!(weight.is_none(), "--weight only applies to exams");
            Assessment::assignment(name, score, max_score)
        }
        Kind::Exam => {
            let weight = weight.unwrap_or(session.config.default_exam_weight);
            Assessment::exam(name, score, max_score, weight)
        }
    };
    assessment.validate(session.config.allow_extra_credit)?;
    let label = assessment.kind.label();

    let mut book = session.load()?;
    let student = book.roster.record_assessment(&student_id, assessment)?;
    let added = format!("{label} added for {}", student.name);
    session.save(&book)?;

    println!("{added}!");
    Ok(())
}

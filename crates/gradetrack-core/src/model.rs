//! Core data model types for gradetrack.
//!
//! Assessments, students, and the letter-grade ladder that the rest of the
//! system builds on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradebookError;
use crate::roster::Roster;
use crate::statistics::{round_half_away, weighted_mean};
use crate::traits::GradedItem;

/// Which kind of assessment a record is, plus any kind-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssessmentKind {
    /// Homework or project work. Always carries weight 1.0.
    Assignment,
    /// An exam or quiz whose percentage is multiplied by `weight`.
    Exam { weight: f64 },
}

impl AssessmentKind {
    /// Label used when rendering ("Assignment" or "Exam").
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentKind::Assignment => "Assignment",
            AssessmentKind::Exam { .. } => "Exam",
        }
    }

    /// Multiplier applied to the percentage when averaging.
    pub fn effective_weight(&self) -> f64 {
        match self {
            AssessmentKind::Assignment => 1.0,
            AssessmentKind::Exam { weight } => *weight,
        }
    }
}

/// A single scored piece of work belonging to one student.
///
/// Immutable once built. Constructors do not range-check their inputs; use
/// [`Assessment::validate`] when the caller has not already done so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Human-readable name (e.g. "Midterm Exam").
    pub name: String,
    /// Points earned.
    pub score: f64,
    /// Points available.
    pub max_score: f64,
    /// Assignment or exam.
    #[serde(flatten)]
    pub kind: AssessmentKind,
}

impl Assessment {
    pub fn assignment(name: impl Into<String>, score: f64, max_score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            max_score,
            kind: AssessmentKind::Assignment,
        }
    }

    pub fn exam(name: impl Into<String>, score: f64, max_score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score,
            max_score,
            kind: AssessmentKind::Exam { weight },
        }
    }

    /// See [`AssessmentKind::effective_weight`].
    pub fn effective_weight(&self) -> f64 {
        self.kind.effective_weight()
    }

    /// Check the caller-side preconditions on score, maximum, name, and weight.
    ///
    /// With `allow_extra_credit` a score above the maximum is accepted.
    pub fn validate(&self, allow_extra_credit: bool) -> Result<(), GradebookError> {
        if self.name.trim().is_empty() {
            return Err(GradebookError::validation("name", "must not be empty"));
        }
        if !self.score.is_finite() {
            return Err(GradebookError::validation("score", "must be a number"));
        }
        if !self.max_score.is_finite() {
            return Err(GradebookError::validation("max_score", "must be a number"));
        }
        if self.max_score <= 0.0 {
            return Err(GradebookError::validation(
                "max_score",
                "must be greater than zero",
            ));
        }
        if self.score < 0.0 {
            return Err(GradebookError::validation("score", "must not be negative"));
        }
        if !allow_extra_credit && self.score > self.max_score {
            return Err(GradebookError::validation(
                "score",
                format!(
                    "{} exceeds the maximum of {}",
                    self.score, self.max_score
                ),
            ));
        }
        if let AssessmentKind::Exam { weight } = self.kind {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GradebookError::validation(
                    "weight",
                    "must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}

impl GradedItem for Assessment {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {:.1} / {:.1} ({:.1}%)",
            self.kind.label(),
            self.name,
            round_half_away(self.score, 1),
            round_half_away(self.max_score, 1),
            round_half_away(self.percentage(), 1)
        )?;
        if let AssessmentKind::Exam { weight } = self.kind {
            write!(f, " [Weight: {:.1}x]", round_half_away(weight, 1))?;
        }
        Ok(())
    }
}

/// Discrete grade derived from a numeric average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Map an average onto the ladder. Thresholds are inclusive and the input
    /// is not clamped, so 150 is an A and -5 is an F.
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 90.0 => LetterGrade::A,
            a if a >= 80.0 => LetterGrade::B,
            a if a >= 70.0 => LetterGrade::C,
            a if a >= 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(s)
    }
}

/// A student and their assessments, in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Full name.
    pub name: String,
    /// Roster-unique id. Uniqueness is enforced by [`Roster`], not here.
    pub student_id: String,
    assessments: Vec<Assessment>,
}

impl Student {
    pub fn new(name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            assessments: Vec::new(),
        }
    }

    /// Append an assessment. No range checks are applied here.
    pub fn add_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    /// Case-insensitive id comparison.
    pub fn has_id(&self, id: &str) -> bool {
        self.student_id.to_lowercase() == id.to_lowercase()
    }

    /// Weighted mean of assessment percentages.
    ///
    /// Each percentage is computed on its own before weighting, so a 5-point
    /// quiz and a 100-point exam count by percentage, not raw points.
    /// Returns `0.0` with no assessments, and also when all weights are zero.
    pub fn weighted_average(&self) -> f64 {
        weighted_mean(
            self.assessments
                .iter()
                .map(|a| (a.percentage(), a.effective_weight())),
        )
    }

    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_average(self.weighted_average())
    }

    /// Per-student summary row, as persisted and shown in class listings.
    pub fn summary(&self) -> StudentSummary {
        let weighted_average = self.weighted_average();
        StudentSummary {
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            assessment_count: self.assessments.len(),
            weighted_average,
            letter_grade: LetterGrade::from_average(weighted_average),
        }
    }
}

/// Lossy per-student summary. Individual assessments are not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub student_id: String,
    pub assessment_count: usize,
    pub weighted_average: f64,
    pub letter_grade: LetterGrade,
}

/// A named roster, the unit loaded from and saved to a gradebook file.
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    pub name: String,
    pub roster: Roster,
}

impl Gradebook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Roster::new(),
        }
    }

    /// A three-student class with two homeworks, a midterm, and a final each.
    pub fn demo() -> Result<Self, GradebookError> {
        let mut book = Gradebook::new("Demo Class");
        let rows: [(&str, &str, [f64; 4]); 3] = [
            ("Alice Johnson", "S001", [88.0, 95.0, 74.0, 82.0]),
            ("Bob Smith", "S002", [70.0, 65.0, 60.0, 55.0]),
            ("Carol White", "S003", [100.0, 98.0, 95.0, 97.0]),
        ];

        for (name, id, [hw1, hw2, midterm, final_exam]) in rows {
            let mut student = Student::new(name, id);
            student.add_assessment(Assessment::assignment("Homework 1", hw1, 100.0));
            student.add_assessment(Assessment::assignment("Homework 2", hw2, 100.0));
            student.add_assessment(Assessment::exam("Midterm Exam", midterm, 100.0, 1.5));
            student.add_assessment(Assessment::exam("Final Exam", final_exam, 100.0, 2.0));
            book.roster.insert(student)?;
        }

        Ok(book)
    }
}

//! TOML gradebook parser.
//!
//! Loads gradebooks from TOML files, writes them back, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Assessment, AssessmentKind, Gradebook, Student};
use crate::traits::GradedItem;

/// Intermediate TOML structure for gradebook files.
#[derive(Debug, Serialize, Deserialize)]
struct TomlGradebookFile {
    gradebook: TomlGradebookHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlGradebookHeader {
    #[serde(default = "default_name")]
    name: String,
}

fn default_name() -> String {
    "Gradebook".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlStudent {
    name: String,
    id: String,
    #[serde(default)]
    assessments: Vec<TomlAssessment>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlAssessment {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    score: f64,
    max_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
}

impl TomlAssessment {
    fn into_assessment(self, student_id: &str) -> Result<Assessment> {
        match self.kind.to_lowercase().as_str() {
            "assignment" => {
                if self.weight.is_some() {
                    anyhow::bail!(
                        "student {student_id}: assignment '{}' has a weight; only exams are weighted",
                        self.name
                    );
                }
                Ok(Assessment::assignment(self.name, self.score, self.max_score))
            }
            "exam" => {
                let weight = self.weight.with_context(|| {
                    format!("student {student_id}: exam '{}' is missing a weight", self.name)
                })?;
                Ok(Assessment::exam(self.name, self.score, self.max_score, weight))
            }
            other => anyhow::bail!(
                "student {student_id}: unknown assessment type '{other}' (expected assignment or exam)"
            ),
        }
    }

    fn from_assessment(a: &Assessment) -> Self {
        let weight = match a.kind {
            AssessmentKind::Assignment => None,
            AssessmentKind::Exam { weight } => Some(weight),
        };
        Self {
            kind: a.kind.label().to_lowercase(),
            name: a.name.clone(),
            score: a.score,
            max_score: a.max_score,
            weight,
        }
    }
}

/// Parse a gradebook TOML file.
pub fn parse_gradebook(path: &Path) -> Result<Gradebook> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read gradebook file: {}", path.display()))?;

    parse_gradebook_str(&content, path)
}

/// Parse a TOML string into a `Gradebook` (useful for testing).
///
/// Students go through [`Roster::insert`](crate::roster::Roster::insert), so a
/// file with two students sharing an id (in any case) is rejected.
pub fn parse_gradebook_str(content: &str, source_path: &Path) -> Result<Gradebook> {
    let parsed: TomlGradebookFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut book = Gradebook::new(parsed.gradebook.name);

    for s in parsed.students {
        let mut student = Student::new(s.name, s.id);
        for a in s.assessments {
            student.add_assessment(a.into_assessment(&student.student_id)?);
        }
        book.roster
            .insert(student)
            .with_context(|| format!("in {}", source_path.display()))?;
    }

    Ok(book)
}

/// Render a gradebook in the same TOML layout [`parse_gradebook_str`] reads.
pub fn gradebook_to_toml(book: &Gradebook) -> Result<String> {
    let file = TomlGradebookFile {
        gradebook: TomlGradebookHeader {
            name: book.name.clone(),
        },
        students: book
            .roster
            .students()
            .iter()
            .map(|s| TomlStudent {
                name: s.name.clone(),
                id: s.student_id.clone(),
                assessments: s
                    .assessments()
                    .iter()
                    .map(TomlAssessment::from_assessment)
                    .collect(),
            })
            .collect(),
    };
    toml::to_string_pretty(&file).context("failed to serialize gradebook")
}

/// Write a gradebook to a TOML file, replacing any existing content.
pub fn save_gradebook(book: &Gradebook, path: &Path) -> Result<()> {
    let content = gradebook_to_toml(book)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write gradebook to {}", path.display()))?;
    tracing::debug!(path = %path.display(), students = book.roster.len(), "gradebook saved");
    Ok(())
}

/// A warning from gradebook validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student the warning is about.
    pub student_id: String,
    /// Warning message.
    pub message: String,
}

/// Validate a gradebook for entries that parse but would grade oddly.
pub fn validate_gradebook(book: &Gradebook, allow_extra_credit: bool) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for student in book.roster.students() {
        let warn = |message: String| ValidationWarning {
            student_id: student.student_id.clone(),
            message,
        };

        if student.student_id.trim().is_empty() {
            warnings.push(warn("student ID is empty".into()));
        }
        if student.name.trim().is_empty() {
            warnings.push(warn("student name is empty".into()));
        }

        for a in student.assessments() {
            if let Err(e) = a.validate(allow_extra_credit) {
                warnings.push(warn(format!("'{}': {e}", a.name())));
            }
        }

        let total_weight: f64 = student
            .assessments()
            .iter()
            .map(Assessment::effective_weight)
            .sum();
        if !student.assessments().is_empty() && total_weight == 0.0 {
            warnings.push(warn(
                "assessment weights sum to zero, weighted average will be 0".into(),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[gradebook]
name = "Period 3"

[[students]]
name = "Alice Johnson"
id = "S001"

[[students.assessments]]
type = "assignment"
name = "Homework 1"
score = 88.0
max_score = 100.0

[[students.assessments]]
type = "exam"
name = "Midterm Exam"
score = 74.0
max_score = 100.0
weight = 1.5

[[students]]
name = "Bob Smith"
id = "S002"
"#;

    #[test]
    fn parse_valid_toml() {
        let book = parse_gradebook_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(book.name, "Period 3");
        assert_eq!(book.roster.len(), 2);

        let alice = book.roster.find("S001").unwrap();
        assert_eq!(alice.assessments().len(), 2);
        assert_eq!(
            alice.assessments()[1].kind,
            AssessmentKind::Exam { weight: 1.5 }
        );
        assert!(book.roster.find("s002").unwrap().assessments().is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[gradebook]
"#;
        let book = parse_gradebook_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(book.name, "Gradebook");
        assert!(book.roster.is_empty());
    }

    #[test]
    fn parse_rejects_exam_without_weight() {
        let toml = r#"
[gradebook]
name = "x"

[[students]]
name = "A"
id = "1"

[[students.assessments]]
type = "exam"
name = "Final"
score = 1.0
max_score = 2.0
"#;
        let err = parse_gradebook_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("missing a weight"));
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let toml = r#"
[gradebook]
name = "x"

[[students]]
name = "A"
id = "1"

[[students.assessments]]
type = "lab"
name = "Lab 1"
score = 1.0
max_score = 2.0
"#;
        let err = parse_gradebook_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown assessment type"));
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let toml = r#"
[gradebook]
name = "Dupes"

[[students]]
name = "First"
id = "S001"

[[students]]
name = "Second"
id = "s001"
"#;
        let err = parse_gradebook_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("already exists"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_gradebook_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gradebook.toml");

        let book = Gradebook::demo().unwrap();
        save_gradebook(&book, &path).unwrap();
        let loaded = parse_gradebook(&path).unwrap();

        assert_eq!(loaded.name, book.name);
        assert_eq!(loaded.roster, book.roster);
    }

    #[test]
    fn validate_clean_gradebook() {
        let book = Gradebook::demo().unwrap();
        assert!(validate_gradebook(&book, false).is_empty());
    }

    #[test]
    fn validate_flags_problems() {
        let mut book = Gradebook::new("Problems");
        let s = book.roster.add_student("Over", "S1").unwrap();
        s.add_assessment(Assessment::assignment("Extra", 12.0, 10.0));
        s.add_assessment(Assessment::assignment("Blank", 0.0, 0.0));
        let z = book.roster.add_student("Zero", "S2").unwrap();
        z.add_assessment(Assessment::exam("Practice", 5.0, 10.0, 0.0));

        let warnings = validate_gradebook(&book, false);
        assert!(warnings.iter().any(|w| w.message.contains("exceeds the maximum")));
        assert!(warnings
            .iter()
            .any(|w| w.message == "'Blank': invalid max_score: must be greater than zero"));
        assert!(warnings
            .iter()
            .any(|w| w.student_id == "S2" && w.message.contains("sum to zero")));

        let lenient = validate_gradebook(&book, true);
        assert!(!lenient.iter().any(|w| w.message.contains("exceeds the maximum")));
    }
}

//! The session roster and class-wide aggregation.

use serde::{Deserialize, Serialize};

use crate::error::GradebookError;
use crate::model::{Assessment, Student, StudentSummary};
use crate::statistics::mean;

/// Every student tracked in one gradebook, in insertion order.
///
/// Student ids are unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append a student with no assessments.
    ///
    /// Fails with [`GradebookError::DuplicateStudentId`] if the id is taken,
    /// leaving the roster unchanged.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Result<&mut Student, GradebookError> {
        self.insert(Student::new(name, student_id))?;
        let last = self.students.len() - 1;
        Ok(&mut self.students[last])
    }

    /// Append an already-built student, enforcing id uniqueness.
    pub fn insert(&mut self, student: Student) -> Result<(), GradebookError> {
        if self.find(&student.student_id).is_some() {
            return Err(GradebookError::DuplicateStudentId {
                id: student.student_id,
            });
        }
        tracing::debug!(id = %student.student_id, name = %student.name, "student added");
        self.students.push(student);
        Ok(())
    }

    /// Look up a student by id, ignoring case.
    pub fn find(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.has_id(student_id))
    }

    pub fn find_mut(&mut self, student_id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.has_id(student_id))
    }

    /// Append an assessment to the student with this id.
    pub fn record_assessment(
        &mut self,
        student_id: &str,
        assessment: Assessment,
    ) -> Result<&Student, GradebookError> {
        let student =
            self.find_mut(student_id)
                .ok_or_else(|| GradebookError::StudentNotFound {
                    id: student_id.to_string(),
                })?;
        tracing::debug!(
            id = %student.student_id,
            assessment = %assessment.name,
            kind = assessment.kind.label(),
            "assessment recorded"
        );
        student.add_assessment(assessment);
        Ok(&*student)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Summary row for every student, in roster order.
    pub fn summaries(&self) -> Vec<StudentSummary> {
        self.students.iter().map(Student::summary).collect()
    }

    /// Mean of the per-student weighted averages, each student counting once.
    ///
    /// `None` for an empty roster.
    pub fn class_mean(&self) -> Option<f64> {
        let averages: Vec<f64> = self
            .students
            .iter()
            .map(Student::weighted_average)
            .collect();
        mean(&averages)
    }

    /// Summary rows plus the class mean. Fails on an empty roster.
    pub fn class_summary(&self) -> Result<ClassSummary, GradebookError> {
        let students = self.summaries();
        let averages: Vec<f64> = students.iter().map(|s| s.weighted_average).collect();
        let class_mean = mean(&averages).ok_or(GradebookError::EmptyRoster)?;
        Ok(ClassSummary {
            students,
            class_mean,
        })
    }
}

/// The per-student rows and class mean shown in a class listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub students: Vec<StudentSummary>,
    pub class_mean: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LetterGrade;

    fn student_with_average(name: &str, id: &str, pct: f64) -> Student {
        let mut s = Student::new(name, id);
        s.add_assessment(Assessment::assignment("Only", pct, 100.0));
        s
    }

    #[test]
    fn add_student_rejects_duplicate_id_any_case() {
        let mut roster = Roster::new();
        roster.add_student("Alice", "S001").unwrap();

        let err = roster.add_student("Alicia", "s001").unwrap_err();
        assert_eq!(
            err,
            GradebookError::DuplicateStudentId { id: "s001".into() }
        );
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].name, "Alice");
    }

    #[test]
    fn insertion_order_preserved() {
        let mut roster = Roster::new();
        for (name, id) in [("C", "3"), ("A", "1"), ("B", "2")] {
            roster.add_student(name, id).unwrap();
        }
        let ids: Vec<&str> = roster
            .students()
            .iter()
            .map(|s| s.student_id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn record_assessment_appends_in_order() {
        let mut roster = Roster::new();
        roster.add_student("Alice", "S001").unwrap();
        roster
            .record_assessment("s001", Assessment::assignment("HW1", 8.0, 10.0))
            .unwrap();
        let student = roster
            .record_assessment("S001", Assessment::exam("Midterm", 40.0, 50.0, 1.5))
            .unwrap();

        let names: Vec<&str> = student.assessments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["HW1", "Midterm"]);
    }

    #[test]
    fn record_assessment_unknown_student() {
        let mut roster = Roster::new();
        let err = roster
            .record_assessment("nope", Assessment::assignment("HW", 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, GradebookError::StudentNotFound { .. }));
    }

    #[test]
    fn class_mean_is_unweighted_by_student() {
        let mut roster = Roster::new();
        roster.insert(student_with_average("A", "1", 83.27)).unwrap();
        roster.insert(student_with_average("B", "2", 62.5)).unwrap();

        // A third student with many assessments still counts once.
        let mut c = Student::new("C", "3");
        for _ in 0..10 {
            c.add_assessment(Assessment::assignment("HW", 97.6, 100.0));
        }
        roster.insert(c).unwrap();

        let m = roster.class_mean().unwrap();
        assert!((m - (83.27 + 62.5 + 97.6) / 3.0).abs() < 1e-9);
        assert_eq!(format!("{m:.2}"), "81.12");
    }

    #[test]
    fn empty_roster_has_no_class_mean() {
        let roster = Roster::new();
        assert!(roster.class_mean().is_none());
        assert_eq!(roster.class_summary(), Err(GradebookError::EmptyRoster));
    }

    #[test]
    fn class_summary_rows() {
        let mut roster = Roster::new();
        roster.insert(student_with_average("A", "1", 95.0)).unwrap();
        roster.insert(student_with_average("B", "2", 55.0)).unwrap();

        let summary = roster.class_summary().unwrap();
        assert_eq!(summary.students.len(), 2);
        assert_eq!(summary.students[0].letter_grade, LetterGrade::A);
        assert_eq!(summary.students[1].letter_grade, LetterGrade::F);
        assert!((summary.class_mean - 75.0).abs() < 1e-9);
    }
}

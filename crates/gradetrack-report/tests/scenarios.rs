//! End-to-end grading scenarios.
//!
//! Builds rosters through the core API, then checks averages, grades, class
//! means, and the rendered CSV/text output together.

use gradetrack_core::error::GradebookError;
use gradetrack_core::model::{Assessment, LetterGrade, Student};
use gradetrack_core::roster::Roster;
use gradetrack_core::traits::GradedItem;
use gradetrack_report::csv::{render_csv, student_row, HEADER};
use gradetrack_report::text::{render_class_summary, render_student_report};

fn alice() -> Student {
    let mut s = Student::new("Alice", "S001");
    s.add_assessment(Assessment::assignment("Homework 1", 88.0, 100.0));
    s.add_assessment(Assessment::assignment("Homework 2", 95.0, 100.0));
    s.add_assessment(Assessment::exam("Midterm Exam", 74.0, 100.0, 1.5));
    s.add_assessment(Assessment::exam("Final Exam", 82.0, 100.0, 2.0));
    s
}

#[test]
fn alice_scenario() {
    let s = alice();

    let percentages: Vec<f64> = s.assessments().iter().map(|a| a.percentage()).collect();
    assert_eq!(percentages, vec![88.0, 95.0, 74.0, 82.0]);

    let weights: Vec<f64> = s.assessments().iter().map(|a| a.effective_weight()).collect();
    assert_eq!(weights, vec![1.0, 1.0, 1.5, 2.0]);

    let avg = s.weighted_average();
    assert!((avg - 458.0 / 5.5).abs() < 1e-9);
    assert_eq!(s.letter_grade(), LetterGrade::B);

    let report = render_student_report(&s);
    assert!(report.ends_with("  Weighted Average: 83.27% | Letter Grade: B\n"));
    assert_eq!(student_row(&s), "Alice,S001,4,83.27");
}

#[test]
fn two_assignments_csv_row() {
    let mut s = Student::new("Jordan", "S020");
    s.add_assessment(Assessment::assignment("HW1", 88.0, 100.0));
    s.add_assessment(Assessment::assignment("HW2", 95.0, 100.0));
    assert_eq!(student_row(&s), "Jordan,S020,2,91.50");
}

#[test]
fn equal_weights_give_plain_mean() {
    let mut s = Student::new("Uniform", "U1");
    let scores = [(45.0, 50.0), (7.0, 10.0), (180.0, 200.0), (3.0, 4.0)];
    for (i, (score, max)) in scores.iter().enumerate() {
        if i % 2 == 0 {
            s.add_assessment(Assessment::assignment(format!("HW{i}"), *score, *max));
        } else {
            s.add_assessment(Assessment::exam(format!("Exam{i}"), *score, *max, 1.0));
        }
    }
    let plain: f64 = scores.iter().map(|(sc, mx)| sc / mx * 100.0).sum::<f64>() / 4.0;
    assert!((s.weighted_average() - plain).abs() < 1e-9);
}

#[test]
fn class_mean_of_student_averages() {
    let mut roster = Roster::new();
    for (name, id, pct) in [("A", "1", 83.27), ("B", "2", 62.5), ("C", "3", 97.6)] {
        let student = roster.add_student(name, id).unwrap();
        student.add_assessment(Assessment::assignment("Only", pct, 100.0));
    }

    let summary = roster.class_summary().unwrap();
    assert!((summary.class_mean - 81.123_333).abs() < 1e-4);
    assert!(render_class_summary(&summary).contains("Class Average: 81.12%"));
}

#[test]
fn duplicate_id_leaves_roster_unchanged() {
    let mut roster = Roster::new();
    roster.add_student("First", "S001").unwrap();

    let err = roster.add_student("Second", "s001").unwrap_err();
    assert!(matches!(err, GradebookError::DuplicateStudentId { .. }));
    assert_eq!(roster.len(), 1);

    let csv = render_csv(&roster);
    assert_eq!(csv, format!("{HEADER}\nFirst,S001,0,0.00\n"));
}

#[test]
fn zero_max_score_counts_as_zero_percent() {
    let mut s = Student::new("Z", "Z1");
    s.add_assessment(Assessment::assignment("Ungraded", 5.0, 0.0));
    s.add_assessment(Assessment::assignment("Graded", 80.0, 100.0));
    assert_eq!(s.assessments()[0].percentage(), 0.0);
    assert!((s.weighted_average() - 40.0).abs() < 1e-9);
}

#[test]
fn quarter_point_scores_round_ties_up() {
    let mut s = Student::new("Quinn", "Q1");
    s.add_assessment(Assessment::assignment("HW1", 88.25, 100.0));
    s.add_assessment(Assessment::assignment("HW2", 90.0, 100.0));

    // (88.25 + 90) / 2 = 89.125, an exact tie at two decimals
    assert_eq!(student_row(&s), "Quinn,Q1,2,89.13");

    let report = render_student_report(&s);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[1], "  [Assignment] HW1: 88.3 / 100.0 (88.3%)");
    assert_eq!(lines[3], "  Weighted Average: 89.13% | Letter Grade: B");

    let mut roster = Roster::new();
    roster.insert(s).unwrap();
    let summary = roster.class_summary().unwrap();
    assert!(render_class_summary(&summary).contains("Class Average: 89.13%"));
}

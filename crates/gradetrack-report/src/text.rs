//! Plain-text student reports and class listings.

use gradetrack_core::model::{Student, StudentSummary};
use gradetrack_core::roster::ClassSummary;
use gradetrack_core::statistics::round_half_away;

/// Render one student's assessments followed by their average and grade.
pub fn render_student_report(student: &Student) -> String {
    let mut out = format!(
        "--- Report for {} (ID: {}) ---\n",
        student.name, student.student_id
    );

    if student.assessments().is_empty() {
        out.push_str("  No assessments recorded.\n");
        return out;
    }

    for a in student.assessments() {
        out.push_str(&format!("  {a}\n"));
    }

    let summary = student.summary();
    out.push_str(&format!(
        "  Weighted Average: {:.2}% | Letter Grade: {}\n",
        round_half_away(summary.weighted_average, 2),
        summary.letter_grade
    ));
    out
}

/// One fixed-width line of a class listing.
pub fn render_summary_line(s: &StudentSummary) -> String {
    format!(
        "  {:<20} | ID: {:<8} | Avg: {:>6.2}% | Grade: {}",
        s.name,
        s.student_id,
        round_half_away(s.weighted_average, 2),
        s.letter_grade
    )
}

/// Every student line, a rule, then the class average.
pub fn render_class_summary(summary: &ClassSummary) -> String {
    let mut out = String::new();
    for s in &summary.students {
        out.push_str(&render_summary_line(s));
        out.push('\n');
    }
    out.push_str("  ----------------------------------------\n");
    out.push_str(&format!(
        "  Class Average: {:.2}%\n",
        round_half_away(summary.class_mean, 2)
    ));
    out
}

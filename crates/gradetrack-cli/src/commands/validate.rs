//! The `gradetrack validate` command.

use anyhow::Result;

use gradetrack_core::parser::validate_gradebook;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let book = session.load()?;
    println!("Gradebook: {} ({} students)", book.name, book.roster.len());

    let warnings = validate_gradebook(&book, session.config.allow_extra_credit);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.student_id, w.message);
    }

    if warnings.is_empty() {
        println!("Gradebook valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

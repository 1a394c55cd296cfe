//! The `gradetrack add-student` command.

use anyhow::Result;

use super::Session;

pub fn execute(session: &Session, name: String, id: String) -> Result<()> {
    let name = name.trim().to_string();
    let id = id.trim().to_string();
    anyhow::ensure!(!name.is_empty(), "student name must not be empty");
    anyhow::ensure!(!id.is_empty(), "student ID must not be empty");

    let mut book = session.load_or_new()?;
    book.roster.add_student(name.as_str(), id.as_str())?;
    session.save(&book)?;

    println!("Student '{name}' added successfully!");
    Ok(())
}

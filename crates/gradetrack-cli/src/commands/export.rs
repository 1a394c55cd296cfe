//! The `gradetrack export` command.

use std::path::PathBuf;

use anyhow::Result;

use gradetrack_report::csv::write_csv;

use super::Session;

pub fn execute(session: &Session, output: Option<PathBuf>) -> Result<()> {
    let book = session.load()?;
    let path = output.unwrap_or_else(|| session.config.export_path.clone());

    write_csv(&book.roster, &path)?;
    println!("Data saved to {}", path.display());

    Ok(())
}

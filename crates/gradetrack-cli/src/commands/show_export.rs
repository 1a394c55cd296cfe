//! The `gradetrack show-export` command.

use std::path::PathBuf;

use anyhow::Result;

use gradetrack_report::csv::read_csv_lines;

use super::Session;

pub fn execute(session: &Session, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| session.config.export_path.clone());

    let Some(lines) = read_csv_lines(&path)? else {
        println!("No saved data file found ({}).", path.display());
        return Ok(());
    };

    println!("--- Saved Grade Report ({}) ---", path.display());
    for line in &lines {
        println!("  {line}");
    }

    Ok(())
}

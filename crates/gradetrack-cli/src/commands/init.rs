//! The `gradetrack init` command.

use anyhow::Result;

use gradetrack_core::model::Gradebook;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    // Create gradetrack.toml
    if std::path::Path::new("gradetrack.toml").exists() {
        println!("gradetrack.toml already exists, skipping.");
    } else {
        std::fs::write("gradetrack.toml", SAMPLE_CONFIG)?;
        println!("Created gradetrack.toml");
    }

    // Seed a demo gradebook
    let path = &session.gradebook_path;
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        session.save(&Gradebook::demo()?)?;
        println!(
            "Created {} (demo data: 3 students with assessments)",
            path.display()
        );
    }

    println!("\nNext steps:");
    println!("  1. Run: gradetrack summary");
    println!("  2. Run: gradetrack add-student --name \"Dana Lee\" --id S004");
    println!("  3. Run: gradetrack export");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradetrack configuration

gradebook_path = "gradebook.toml"
export_path = "grades.csv"

# Accept scores above the maximum (extra credit).
allow_extra_credit = false

# Weight used for an exam recorded without --weight.
default_exam_weight = 1.0
"#;

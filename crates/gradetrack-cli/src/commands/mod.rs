pub mod add_assessment;
pub mod add_student;
pub mod export;
pub mod init;
pub mod report;
pub mod show_export;
pub mod summary;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradetrack_core::model::Gradebook;
use gradetrack_core::parser;

use crate::config::{load_config_from, GradetrackConfig};

/// Resolved config and gradebook location shared by every command.
pub struct Session {
    pub config: GradetrackConfig,
    pub gradebook_path: PathBuf,
}

impl Session {
    pub fn open(config_path: Option<PathBuf>, gradebook: Option<PathBuf>) -> Result<Self> {
        let config = load_config_from(config_path.as_deref())?;
        let gradebook_path = gradebook.unwrap_or_else(|| config.gradebook_path.clone());
        Ok(Self {
            config,
            gradebook_path,
        })
    }

    /// Load the gradebook, failing if the file does not exist.
    pub fn load(&self) -> Result<Gradebook> {
        if !self.gradebook_path.exists() {
            anyhow::bail!(
                "gradebook not found: {} (run `gradetrack init` or `gradetrack add-student` first)",
                self.gradebook_path.display()
            );
        }
        parser::parse_gradebook(&self.gradebook_path)
    }

    /// Load the gradebook, or start an empty one if the file does not exist yet.
    pub fn load_or_new(&self) -> Result<Gradebook> {
        if self.gradebook_path.exists() {
            parser::parse_gradebook(&self.gradebook_path)
        } else {
            tracing::info!(path = %self.gradebook_path.display(), "starting a new gradebook");
            Ok(Gradebook::new("Gradebook"))
        }
    }

    pub fn save(&self, book: &Gradebook) -> Result<()> {
        parser::save_gradebook(book, &self.gradebook_path)
    }
}

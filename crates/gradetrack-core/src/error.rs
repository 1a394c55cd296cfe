//! Gradebook error types.
//!
//! These are the recoverable failures the core reports to its caller. None of
//! them are fatal: the CLI reports them and the roster is left unchanged.

use thiserror::Error;

/// Errors produced by roster and assessment operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// A student with the same id (compared case-insensitively) is already on the roster.
    #[error("a student with ID '{id}' already exists")]
    DuplicateStudentId { id: String },

    /// No student on the roster has this id.
    #[error("no student with ID '{id}'")]
    StudentNotFound { id: String },

    /// An assessment or student failed an input check.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The operation needs at least one student.
    #[error("roster is empty")]
    EmptyRoster,
}

impl GradebookError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        GradebookError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

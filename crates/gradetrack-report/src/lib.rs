//! gradetrack-report — text and CSV rendering.
//!
//! Renderers take already-computed records from `gradetrack-core` and only
//! format them.

pub mod csv;
pub mod text;

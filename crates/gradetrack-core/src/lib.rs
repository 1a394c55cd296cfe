//! gradetrack-core — Grading model, weighted averages, and roster aggregation.
//!
//! This crate defines the assessment and student types, the weighted-average
//! and letter-grade rules, and the class-level summaries built on them.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod roster;
pub mod statistics;
pub mod traits;

//! # cgpa-core
//!
//! Core library for the CGPA calculator: the A–F grade scale, course
//! validation, credit-weighted aggregation and CGPA classification.

pub mod aggregator;
pub mod classification;
pub mod constants;
pub mod entry;
pub mod grade;
pub mod options;
pub mod roster;

// Re-exports
pub use aggregator::{aggregate, compute, validate, Aggregate, AggregateDisplay, CgpaError};
pub use classification::{classify, color_tier, Classification, ColorTier};
pub use constants::exit_codes;
pub use entry::{CandidateEntry, CourseEntry, EntryField};
pub use grade::{Grade, UnknownGrade, GRADE_SCALE};
pub use options::Options;
pub use roster::{Roster, Row, RowId};

//! CGPA aggregation.
//!
//! `compute` is the single entry point used by presentation code: it
//! validates every candidate first and only then folds the weighted sums.
//! A single bad row rejects the whole calculation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classification::{classify, color_tier, Classification, ColorTier};
use crate::entry::{CandidateEntry, CourseEntry, EntryField};
use crate::options::Options;

/// Error type for CGPA calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CgpaError {
    /// No course entries were supplied.
    #[error("no courses to calculate")]
    EmptyInput,

    /// An entry failed validation. `index` is zero-based.
    #[error("course {}: invalid {field}", .index + 1)]
    InvalidEntry { index: usize, field: EntryField },
}

/// Totals and the derived CGPA for a set of courses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total_grade_points: f64,
    pub total_credits: f64,
    pub cgpa: f64,
    pub course_count: usize,
}

impl Aggregate {
    /// Descriptive class of the CGPA.
    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(self.cgpa)
    }

    /// Colour tier of the CGPA.
    #[must_use]
    pub fn color_tier(&self) -> ColorTier {
        color_tier(self.cgpa)
    }

    /// Rounded display strings for the totals.
    #[must_use]
    pub fn display(&self, opts: &Options) -> AggregateDisplay {
        AggregateDisplay {
            cgpa: format!("{:.*}", opts.cgpa_decimals, self.cgpa),
            total_grade_points: format!("{:.*}", opts.points_decimals, self.total_grade_points),
            total_credits: format!("{:.*}", opts.points_decimals, self.total_credits),
        }
    }
}

/// Display-rounded aggregate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateDisplay {
    pub cgpa: String,
    pub total_grade_points: String,
    pub total_credits: String,
}

/// Validate every candidate, stopping at the first invalid one.
pub fn validate(entries: &[CandidateEntry]) -> Result<Vec<CourseEntry>, CgpaError> {
    if entries.is_empty() {
        debug!("calculation rejected: no courses");
        return Err(CgpaError::EmptyInput);
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.validate().map_err(|field| {
                debug!(index, %field, "calculation rejected: invalid course");
                CgpaError::InvalidEntry { index, field }
            })
        })
        .collect()
}

/// Fold validated courses into an `Aggregate`.
///
/// Sums are accumulated in slice order. An empty slice yields a zero CGPA.
/// When the sums overflow, the CGPA is taken from credits scaled by the
/// largest credit, so it stays on the grade scale.
#[must_use]
pub fn aggregate(courses: &[CourseEntry]) -> Aggregate {
    let mut total_grade_points = 0.0;
    let mut total_credits = 0.0;

    for course in courses {
        debug!(name = %course.name, grade = %course.grade, credits = course.credits, "adding course");
        total_grade_points += course.grade_points();
        total_credits += course.credits;
    }

    let cgpa = if total_grade_points.is_finite() && total_credits.is_finite() {
        if total_credits > 0.0 {
            total_grade_points / total_credits
        } else {
            0.0
        }
    } else {
        scaled_cgpa(courses)
    };

    Aggregate {
        total_grade_points,
        total_credits,
        cgpa,
        course_count: courses.len(),
    }
}

fn scaled_cgpa(courses: &[CourseEntry]) -> f64 {
    let largest = courses.iter().map(|c| c.credits).fold(0.0, f64::max);
    let (points, credits) = courses.iter().fold((0.0, 0.0), |(points, credits), c| {
        let weight = c.credits / largest;
        (points + c.grade.points() * weight, credits + weight)
    });
    debug!(largest, "totals overflowed, using scaled credits");
    points / credits
}

/// Validate and aggregate candidate entries.
pub fn compute(entries: &[CandidateEntry]) -> Result<Aggregate, CgpaError> {
    let courses = validate(entries)?;
    let result = aggregate(&courses);
    info!(
        courses = result.course_count,
        credits = result.total_credits,
        cgpa = result.cgpa,
        "cgpa computed"
    );
    Ok(result)
}

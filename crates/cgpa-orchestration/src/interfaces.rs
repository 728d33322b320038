//! Orchestration interfaces.

use cgpa_core::aggregator::{Aggregate, CgpaError};
use cgpa_core::entry::CourseEntry;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a successful calculation.
    fn present_result(&self, report: &CalculationReport, details: bool);

    /// Present a rejected calculation.
    fn present_error(&self, error: &CgpaError);
}

/// Outcome of a successful calculation run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    /// Validated courses, in input order.
    pub courses: Vec<CourseEntry>,
    /// Totals and CGPA.
    pub aggregate: Aggregate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_core::aggregator::aggregate;
    use cgpa_core::grade::Grade;

    #[test]
    fn calculation_report() {
        let courses = vec![CourseEntry {
            name: "Economics".into(),
            grade: Grade::B,
            credits: 3.0,
        }];
        let report = CalculationReport {
            aggregate: aggregate(&courses),
            courses,
        };
        assert_eq!(report.aggregate.cgpa, 4.0);
        assert_eq!(report.courses.len(), 1);
    }
}

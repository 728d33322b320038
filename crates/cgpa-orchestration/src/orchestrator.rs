//! Calculation runs.

use tracing::debug;

use cgpa_core::aggregator::{aggregate, validate, CgpaError};
use cgpa_core::entry::CandidateEntry;

use crate::interfaces::{CalculationReport, ResultPresenter};

/// Validate and aggregate a set of entries.
pub fn execute_calculation(entries: &[CandidateEntry]) -> Result<CalculationReport, CgpaError> {
    debug!(entries = entries.len(), "starting calculation");
    let courses = validate(entries)?;
    let aggregate = aggregate(&courses);
    Ok(CalculationReport { courses, aggregate })
}

/// Run a calculation and hand the outcome to a presenter.
///
/// The outcome is returned as well so callers can pick an exit status.
pub fn calculate_and_present(
    entries: &[CandidateEntry],
    presenter: &dyn ResultPresenter,
    details: bool,
) -> Result<CalculationReport, CgpaError> {
    let outcome = execute_calculation(entries);
    match &outcome {
        Ok(report) => presenter.present_result(report, details),
        Err(error) => presenter.present_error(error),
    }
    outcome
}

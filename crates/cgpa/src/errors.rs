//! Error handling and exit codes.

use cgpa_cli::ui::print_error;
use cgpa_core::aggregator::CgpaError;
use cgpa_core::constants::exit_codes;

/// Exit code for a rejected calculation.
pub fn calculation_exit_code(err: &CgpaError) -> i32 {
    match err {
        CgpaError::EmptyInput => exit_codes::ERROR_EMPTY_INPUT,
        CgpaError::InvalidEntry { .. } => exit_codes::ERROR_INVALID_ENTRY,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CgpaError>()
        .map_or(exit_codes::ERROR_GENERIC, calculation_exit_code)
}

/// Report an application error and return the exit code.
///
/// Calculation errors have already been shown by the presenter.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<CgpaError>().is_none() {
        print_error(&format!("{err:#}"));
    }
    exit_code(err)
}

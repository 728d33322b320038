//! CLI result presenters.

use tracing::error;

use cgpa_core::aggregator::CgpaError;
use cgpa_core::options::Options;
use cgpa_orchestration::interfaces::{CalculationReport, ResultPresenter};

use crate::messages::detailed_message;
use crate::output::{format_error_json, format_report, format_report_json};
use crate::ui::{is_color_disabled, print_error};

/// Plain-text presenter.
pub struct CLIResultPresenter {
    opts: Options,
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(opts: Options, verbose: bool, quiet: bool) -> Self {
        Self {
            opts,
            verbose,
            quiet,
        }
    }

    /// The text `present_result` writes to stdout.
    #[must_use]
    pub fn render_result(&self, report: &CalculationReport, details: bool, color: bool) -> String {
        if self.quiet {
            return format!("{}\n", report.aggregate.display(&self.opts).cgpa);
        }
        format_report(report, &self.opts, details || self.verbose, color)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &CalculationReport, details: bool) {
        print!("{}", self.render_result(report, details, !is_color_disabled()));
    }

    fn present_error(&self, error: &CgpaError) {
        print_error(&detailed_message(error));
    }
}

/// JSON presenter. Errors are written to stdout as JSON objects too.
pub struct JsonResultPresenter {
    opts: Options,
}

impl JsonResultPresenter {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// The JSON document `present_result` writes to stdout.
    pub fn render_result(
        &self,
        report: &CalculationReport,
        details: bool,
    ) -> Result<String, serde_json::Error> {
        format_report_json(report, &self.opts, details)
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, report: &CalculationReport, details: bool) {
        match self.render_result(report, details) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize report: {e}"),
        }
    }

    fn present_error(&self, err: &CgpaError) {
        match format_error_json(err) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize error: {e}"),
        }
    }
}

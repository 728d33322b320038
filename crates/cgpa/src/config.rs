//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use cgpa_cli::output::OutputFormat;
use cgpa_core::options::Options;

/// CGPA calculator: credit-weighted grade point average of your courses.
#[derive(Parser, Debug)]
#[command(name = "cgpa", version, about)]
pub struct AppConfig {
    /// Course as NAME,GRADE,CREDITS (repeatable).
    #[arg(short, long = "course", value_name = "NAME,GRADE,CREDITS")]
    pub courses: Vec<String>,

    /// JSON file with a list of {name, grade, credits} courses.
    #[arg(short, long, env = "CGPA_FILE")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "CGPA_FORMAT")]
    pub format: OutputFormat,

    /// Decimals shown for the CGPA [default: 2].
    #[arg(long, value_name = "N")]
    pub decimals: Option<usize>,

    /// Show a per-course breakdown.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the CGPA).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Edit courses interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Show information about the grade scale and classification.
    #[arg(long)]
    pub about: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Display options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            cgpa_decimals: self.decimals.unwrap_or(defaults.cgpa_decimals),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("cgpa").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn repeated_courses() {
        let config = parse(&["-c", "Maths,A,3", "--course", "Art,B,2"]);
        assert_eq!(config.courses, vec!["Maths,A,3", "Art,B,2"]);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn json_format() {
        let config = parse(&["--format", "json"]);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn decimals_default_and_override() {
        assert_eq!(parse(&[]).options().cgpa_decimals, 2);
        assert_eq!(parse(&["--decimals", "3"]).options().cgpa_decimals, 3);
        assert_eq!(parse(&["--decimals", "0"]).options().cgpa_decimals, 0);
        assert_eq!(parse(&["--decimals", "0"]).options().points_decimals, 1);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = AppConfig::try_parse_from(["cgpa", "-q", "-v"]);
        assert!(result.is_err());
    }
}

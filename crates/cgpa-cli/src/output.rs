//! CLI output formatting.

use std::fmt::Write;

use serde::Serialize;

use cgpa_core::aggregator::CgpaError;
use cgpa_core::classification::ColorTier;
use cgpa_core::entry::{CourseEntry, EntryField};
use cgpa_core::grade::Grade;
use cgpa_core::options::Options;
use cgpa_orchestration::interfaces::CalculationReport;

use crate::messages::user_message;
use crate::ui::paint;

/// Output format for calculation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format the per-course breakdown table.
#[must_use]
pub fn format_courses(courses: &[CourseEntry], opts: &Options) -> String {
    let name_width = courses
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Course".len());
    let prec = opts.points_decimals;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:<5}  {:>8}  {:>8}",
        "#", "Course", "Grade", "Credits", "Points"
    );
    for (i, course) in courses.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:<5}  {:>8.prec$}  {:>8.prec$}",
            i + 1,
            course.name,
            course.grade.letter(),
            course.credits,
            course.grade_points(),
        );
    }
    out
}

/// Format a full text report.
#[must_use]
pub fn format_report(report: &CalculationReport, opts: &Options, verbose: bool, color: bool) -> String {
    let agg = &report.aggregate;
    let shown = agg.display(opts);
    let tier = agg.color_tier();

    let mut out = String::new();
    if verbose {
        out.push_str(&format_courses(&report.courses, opts));
        out.push('\n');
    }
    let _ = writeln!(out, "Courses: {}", agg.course_count);
    let _ = writeln!(out, "Total credits: {}", shown.total_credits);
    let _ = writeln!(out, "Total grade points: {}", shown.total_grade_points);
    let _ = writeln!(out, "CGPA: {}", paint(&shown.cgpa, tier, color));
    let _ = writeln!(
        out,
        "Classification: {}",
        paint(agg.classification().label(), tier, color)
    );
    out
}

#[derive(Serialize)]
struct JsonCourse<'a> {
    name: &'a str,
    grade: Grade,
    credits: f64,
    grade_points: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cgpa: f64,
    cgpa_display: String,
    total_grade_points: f64,
    total_grade_points_display: String,
    total_credits: f64,
    total_credits_display: String,
    course_count: usize,
    classification: &'static str,
    tier: ColorTier,
    tier_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    courses: Option<Vec<JsonCourse<'a>>>,
}

#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

#[derive(Serialize)]
struct JsonErrorBody {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<EntryField>,
    message: &'static str,
}

/// Format a report as pretty JSON.
pub fn format_report_json(
    report: &CalculationReport,
    opts: &Options,
    verbose: bool,
) -> serde_json::Result<String> {
    let agg = &report.aggregate;
    let shown = agg.display(opts);
    let tier = agg.color_tier();
    let courses: Option<Vec<JsonCourse<'_>>> = verbose.then(|| {
        report
            .courses
            .iter()
            .map(|c| JsonCourse {
                name: &c.name,
                grade: c.grade,
                credits: c.credits,
                grade_points: c.grade_points(),
            })
            .collect()
    });

    serde_json::to_string_pretty(&JsonReport {
        cgpa: agg.cgpa,
        cgpa_display: shown.cgpa,
        total_grade_points: agg.total_grade_points,
        total_grade_points_display: shown.total_grade_points,
        total_credits: agg.total_credits,
        total_credits_display: shown.total_credits,
        course_count: agg.course_count,
        classification: agg.classification().label(),
        tier,
        tier_color: tier.hex_color(),
        courses,
    })
}

/// Format a rejected calculation as pretty JSON.
pub fn format_error_json(error: &CgpaError) -> serde_json::Result<String> {
    let body = match error {
        CgpaError::EmptyInput => JsonErrorBody {
            kind: "empty_input",
            index: None,
            field: None,
            message: user_message(error),
        },
        CgpaError::InvalidEntry { index, field } => JsonErrorBody {
            kind: "invalid_entry",
            index: Some(*index),
            field: Some(*field),
            message: user_message(error),
        },
    };
    serde_json::to_string_pretty(&JsonError { error: body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_core::entry::CandidateEntry;
    use cgpa_orchestration::orchestrator::execute_calculation;

    fn sample_report() -> CalculationReport {
        execute_calculation(&[
            CandidateEntry::new("Maths", "A", "3"),
            CandidateEntry::new("Physics", "B", "4"),
            CandidateEntry::new("Chemistry", "C", "2"),
        ])
        .unwrap()
    }

    #[test]
    fn report_text() {
        let text = format_report(&sample_report(), &Options::default(), false, false);
        assert_eq!(
            text,
            "Courses: 3\n\
             Total credits: 9.0\n\
             Total grade points: 37.0\n\
             CGPA: 4.11\n\
             Classification: B+ (Very Good)\n"
        );
    }

    #[test]
    fn report_text_verbose_has_table() {
        let text = format_report(&sample_report(), &Options::default(), true, false);
        assert!(text.starts_with("  #  Course"));
        assert!(text.contains("Chemistry  C"));
        assert!(text.contains("15.0"));
    }

    #[test]
    fn courses_table_rows() {
        let report = sample_report();
        let table = format_courses(&report.courses, &Options::default());
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn report_json_fields() {
        let json = format_report_json(&sample_report(), &Options::default(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cgpa_display"], "4.11");
        assert_eq!(value["total_grade_points"], 37.0);
        assert_eq!(value["total_credits_display"], "9.0");
        assert_eq!(value["course_count"], 3);
        assert_eq!(value["classification"], "B+ (Very Good)");
        assert_eq!(value["tier"], "excellent");
        assert_eq!(value["tier_color"], "#2ec4b6");
        assert!(value.get("courses").is_none());
    }

    #[test]
    fn report_json_verbose_courses() {
        let json = format_report_json(&sample_report(), &Options::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["courses"][1]["name"], "Physics");
        assert_eq!(value["courses"][1]["grade"], "B");
        assert_eq!(value["courses"][1]["grade_points"], 16.0);
    }

    #[test]
    fn error_json() {
        let json = format_error_json(&CgpaError::InvalidEntry {
            index: 2,
            field: EntryField::Name,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["kind"], "invalid_entry");
        assert_eq!(value["error"]["index"], 2);
        assert_eq!(value["error"]["field"], "name");

        let json = format_error_json(&CgpaError::EmptyInput).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["kind"], "empty_input");
        assert!(value["error"].get("field").is_none());
    }
}

//! Shared fixtures for the workspace-level integration tests.

use std::path::PathBuf;

use serde::Deserialize;

use cgpa_core::entry::CandidateEntry;

/// Golden cases file contents.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One golden calculation.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub label: String,
    pub courses: Vec<CandidateEntry>,
    #[serde(default)]
    pub expected: Option<GoldenExpected>,
    #[serde(default)]
    pub error: Option<GoldenError>,
}

/// Expected values for an accepted calculation.
#[derive(Debug, Deserialize)]
pub struct GoldenExpected {
    pub total_grade_points: f64,
    pub total_credits: f64,
    pub cgpa_display: String,
    pub classification: String,
    pub tier: String,
}

/// Expected rejection.
#[derive(Debug, Deserialize)]
pub struct GoldenError {
    pub kind: String,
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Path of the golden cases file.
#[must_use]
pub fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/cgpa_golden.json")
}

/// Load the golden cases.
pub fn load_golden() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(golden_path())?;
    Ok(serde_json::from_str(&text)?)
}

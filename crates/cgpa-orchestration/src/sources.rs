//! Course input sources: command-line course specs and JSON course files.
//!
//! Sources only check shape. Field values are left as typed and go through
//! the usual validation when the calculation runs.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use cgpa_core::entry::CandidateEntry;

/// Error reading course input.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The course file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The course file is not valid course JSON.
    #[error("invalid course file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `NAME,GRADE,CREDITS` spec did not have three parts.
    #[error("invalid course spec {0:?}: expected NAME,GRADE,CREDITS")]
    CourseSpec(String),
}

/// Parse a `NAME,GRADE,CREDITS` spec.
///
/// Splits on the last two commas, so names may contain commas.
pub fn parse_course_spec(spec: &str) -> Result<CandidateEntry, SourceError> {
    let mut parts = spec.rsplitn(3, ',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(credits), Some(grade), Some(name)) => Ok(CandidateEntry::new(
            name.trim(),
            grade.trim(),
            credits.trim(),
        )),
        _ => Err(SourceError::CourseSpec(spec.to_string())),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CourseFile {
    List(Vec<CandidateEntry>),
    Wrapped { courses: Vec<CandidateEntry> },
}

/// Parse course file contents: either a bare array of courses or an object
/// with a `courses` array.
pub fn parse_course_json(text: &str) -> Result<Vec<CandidateEntry>, serde_json::Error> {
    Ok(match serde_json::from_str(text)? {
        CourseFile::List(courses) | CourseFile::Wrapped { courses } => courses,
    })
}

/// Load courses from a JSON file.
pub fn load_course_file(path: &Path) -> Result<Vec<CandidateEntry>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let courses = parse_course_json(&text).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), courses = courses.len(), "loaded course file");
    Ok(courses)
}

/// Gather entries from every source: file courses first, then specs.
pub fn collect_entries(
    file: Option<&Path>,
    specs: &[String],
) -> Result<Vec<CandidateEntry>, SourceError> {
    let mut entries = match file {
        Some(path) => load_course_file(path)?,
        None => Vec::new(),
    };
    for spec in specs {
        entries.push(parse_course_spec(spec)?);
    }
    Ok(entries)
}

//! Course entries, in raw and validated form.
//!
//! A `CandidateEntry` holds the fields exactly as a user typed them. It only
//! becomes a `CourseEntry` once every field has been checked, so nothing
//! downstream of validation ever sees a blank name or a non-positive credit
//! weight.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::grade::Grade;

/// The field of a course entry that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Name,
    Grade,
    Credits,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryField::Name => "name",
            EntryField::Grade => "grade",
            EntryField::Credits => "credits",
        })
    }
}

/// A course row as entered, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default, deserialize_with = "credits_text")]
    pub credits: String,
}

impl CandidateEntry {
    /// Build a candidate from raw field text.
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        credits: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            credits: credits.into(),
        }
    }

    /// Check fields in name, grade, credits order and return the first
    /// failing one.
    pub fn validate(&self) -> Result<CourseEntry, EntryField> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EntryField::Name);
        }

        let grade: Grade = self.grade.parse().map_err(|_| EntryField::Grade)?;

        let credits = parse_credits(&self.credits).ok_or(EntryField::Credits)?;

        Ok(CourseEntry {
            name: name.to_string(),
            grade,
            credits,
        })
    }
}

impl From<&CourseEntry> for CandidateEntry {
    fn from(course: &CourseEntry) -> Self {
        Self {
            name: course.name.clone(),
            grade: course.grade.letter().to_string(),
            credits: course.credits.to_string(),
        }
    }
}

/// A course that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub name: String,
    pub grade: Grade,
    pub credits: f64,
}

impl CourseEntry {
    /// Weighted grade points contributed by this course.
    #[must_use]
    pub fn grade_points(&self) -> f64 {
        self.grade.points() * self.credits
    }
}

/// Parse credit units: a finite number strictly greater than zero.
#[must_use]
pub fn parse_credits(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

// Course files may carry credits as a JSON number or as a string.
fn credits_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCredits {
        Number(f64),
        Text(String),
    }

    Ok(match RawCredits::deserialize(deserializer)? {
        RawCredits::Number(n) => n.to_string(),
        RawCredits::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_ok() {
        let course = CandidateEntry::new("  Mathematics 101 ", "b", "4")
            .validate()
            .unwrap();
        assert_eq!(course.name, "Mathematics 101");
        assert_eq!(course.grade, Grade::B);
        assert_eq!(course.credits, 4.0);
        assert_eq!(course.grade_points(), 16.0);
    }

    #[test]
    fn blank_name_rejected_first() {
        let err = CandidateEntry::new("   ", "Z", "-1").validate().unwrap_err();
        assert_eq!(err, EntryField::Name);
    }

    #[test]
    fn unknown_grade_rejected_before_credits() {
        let err = CandidateEntry::new("Physics", "Z", "-1").validate().unwrap_err();
        assert_eq!(err, EntryField::Grade);
    }

    #[test]
    fn bad_credits_rejected() {
        for credits in ["", "0", "-2", "abc", "NaN", "inf", "-inf", "0.0"] {
            let err = CandidateEntry::new("Physics", "A", credits)
                .validate()
                .unwrap_err();
            assert_eq!(err, EntryField::Credits, "credits {credits:?}");
        }
    }

    #[test]
    fn fractional_credits_accepted() {
        assert_eq!(parse_credits(" 2.5 "), Some(2.5));
        assert_eq!(parse_credits("0.01"), Some(0.01));
    }

    #[test]
    fn deserialize_numeric_and_text_credits() {
        let json = r#"[
            {"name": "Algebra", "grade": "A", "credits": 3},
            {"name": "Biology", "grade": "C", "credits": "2.5"},
            {"name": "Chemistry", "grade": "B", "credits": 1.5}
        ]"#;
        let entries: Vec<CandidateEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].credits, "3");
        assert_eq!(entries[1].credits, "2.5");
        assert_eq!(entries[2].credits, "1.5");
    }

    #[test]
    fn deserialize_missing_fields_default_to_blank() {
        let entries: Vec<CandidateEntry> = serde_json::from_str(r#"[{"grade": "A"}]"#).unwrap();
        assert_eq!(entries[0].name, "");
        assert_eq!(entries[0].validate().unwrap_err(), EntryField::Name);
    }

    #[test]
    fn candidate_from_course() {
        let course = CourseEntry {
            name: "History".into(),
            grade: Grade::D,
            credits: 2.0,
        };
        let candidate = CandidateEntry::from(&course);
        assert_eq!(candidate.validate().unwrap(), course);
    }
}

//! User-facing message text.

use std::fmt::Write;

use cgpa_core::aggregator::CgpaError;
use cgpa_core::entry::EntryField;
use cgpa_core::grade::GRADE_SCALE;

/// Message shown to the user for a rejected calculation.
#[must_use]
pub fn user_message(error: &CgpaError) -> &'static str {
    match error {
        CgpaError::EmptyInput => "Please add at least one course to calculate CGPA.",
        CgpaError::InvalidEntry { field, .. } => match field {
            EntryField::Name => "Please enter a course name for all courses.",
            EntryField::Grade => "Please select a valid grade (A-F) for all courses.",
            EntryField::Credits => {
                "Please enter valid credit units (greater than 0) for all courses."
            }
        },
    }
}

/// Message plus the offending course number, when there is one.
#[must_use]
pub fn detailed_message(error: &CgpaError) -> String {
    match error {
        CgpaError::EmptyInput => user_message(error).to_string(),
        CgpaError::InvalidEntry { index, .. } => {
            format!("{} (course {})", user_message(error), index + 1)
        }
    }
}

/// Text for the about screen.
#[must_use]
pub fn about_text() -> String {
    let mut text = String::from(
        "CGPA Calculator\n\n\
         Enter each course with its letter grade and credit units. The CGPA is\n\
         the credit-weighted average of the grade points:\n\n\
         \x20 CGPA = sum(grade points x credit units) / sum(credit units)\n\n\
         Grade scale:\n",
    );
    for (grade, points) in GRADE_SCALE {
        let _ = writeln!(text, "  {grade} = {points:.1} points");
    }
    text.push_str(
        "\nClassification:\n\
         \x20 4.50 and above  A (Excellent)\n\
         \x20 3.50 - 4.49     B+ (Very Good)\n\
         \x20 2.50 - 3.49     B (Good)\n\
         \x20 1.50 - 2.49     C (Average)\n\
         \x20 1.00 - 1.49     D (Pass)\n\
         \x20 below 1.00      F (Fail)\n",
    );
    text
}

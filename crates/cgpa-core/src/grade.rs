//! Letter grades and the fixed grade-point scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{POINTS_A, POINTS_B, POINTS_C, POINTS_D, POINTS_E, POINTS_F};

/// A letter grade on the A–F scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Every grade paired with its point value, best first.
pub const GRADE_SCALE: [(Grade, f64); 6] = [
    (Grade::A, POINTS_A),
    (Grade::B, POINTS_B),
    (Grade::C, POINTS_C),
    (Grade::D, POINTS_D),
    (Grade::E, POINTS_E),
    (Grade::F, POINTS_F),
];

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    /// Grade points for this letter.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Grade::A => POINTS_A,
            Grade::B => POINTS_B,
            Grade::C => POINTS_C,
            Grade::D => POINTS_D,
            Grade::E => POINTS_E,
            Grade::F => POINTS_F,
        }
    }

    /// The letter itself.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Returned when text is not one of the six letters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grade: {0:?}")]
pub struct UnknownGrade(pub String);

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Grade::A),
            "B" | "b" => Ok(Grade::B),
            "C" | "c" => Ok(Grade::C),
            "D" | "d" => Ok(Grade::D),
            "E" | "e" => Ok(Grade::E),
            "F" | "f" => Ok(Grade::F),
            other => Err(UnknownGrade(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_match_scale() {
        for (grade, points) in GRADE_SCALE {
            assert_eq!(grade.points(), points);
        }
        assert_eq!(Grade::A.points(), 5.0);
        assert_eq!(Grade::F.points(), 0.0);
    }

    #[test]
    fn parse_letters() {
        assert_eq!("A".parse::<Grade>(), Ok(Grade::A));
        assert_eq!(" c ".parse::<Grade>(), Ok(Grade::C));
        assert_eq!("f".parse::<Grade>(), Ok(Grade::F));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("G".parse::<Grade>(), Err(UnknownGrade("G".into())));
        assert!("".parse::<Grade>().is_err());
        assert!("A+".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>(), Ok(grade));
        }
    }
}

//! Display options.

use crate::constants::{DEFAULT_CGPA_DECIMALS, DEFAULT_POINTS_DECIMALS};

/// How aggregate values are rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Decimals shown for the CGPA.
    pub cgpa_decimals: usize,
    /// Decimals shown for grade-point and credit totals.
    pub points_decimals: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cgpa_decimals: DEFAULT_CGPA_DECIMALS,
            points_decimals: DEFAULT_POINTS_DECIMALS,
        }
    }
}

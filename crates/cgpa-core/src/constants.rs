//! Grade scale values, display defaults and exit codes.

/// Grade points for A.
pub const POINTS_A: f64 = 5.0;
/// Grade points for B.
pub const POINTS_B: f64 = 4.0;
/// Grade points for C.
pub const POINTS_C: f64 = 3.0;
/// Grade points for D.
pub const POINTS_D: f64 = 2.0;
/// Grade points for E.
pub const POINTS_E: f64 = 1.0;
/// Grade points for F.
pub const POINTS_F: f64 = 0.0;

/// Highest CGPA reachable on this scale.
pub const MAX_CGPA: f64 = POINTS_A;

/// Default number of decimals when displaying a CGPA.
pub const DEFAULT_CGPA_DECIMALS: usize = 2;

/// Default number of decimals when displaying point and credit totals.
pub const DEFAULT_POINTS_DECIMALS: usize = 1;

/// Credit units pre-filled into a freshly added course row.
pub const DEFAULT_ROW_CREDITS: &str = "3";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, malformed input source).
    pub const ERROR_GENERIC: i32 = 1;
    /// A course entry failed validation.
    pub const ERROR_INVALID_ENTRY: i32 = 2;
    /// No courses were supplied.
    pub const ERROR_EMPTY_INPUT: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_descending() {
        let scale = [POINTS_A, POINTS_B, POINTS_C, POINTS_D, POINTS_E, POINTS_F];
        for pair in scale.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_ENTRY,
            exit_codes::ERROR_EMPTY_INPUT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

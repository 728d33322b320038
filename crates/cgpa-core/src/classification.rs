//! Descriptive classification and colour tiers for a CGPA.
//!
//! The two scales use different thresholds: classification steps at
//! 1.0/1.5/2.5/3.5/4.5 while the colour tier steps at 2.0/3.0/4.0.
//! Both are total over `f64`; NaN lands in the lowest bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptive class of a CGPA. Variants are ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Fail,
    Pass,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl Classification {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Excellent => "A (Excellent)",
            Classification::VeryGood => "B+ (Very Good)",
            Classification::Good => "B (Good)",
            Classification::Average => "C (Average)",
            Classification::Pass => "D (Pass)",
            Classification::Fail => "F (Fail)",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a CGPA.
#[must_use]
pub fn classify(cgpa: f64) -> Classification {
    if cgpa >= 4.5 {
        Classification::Excellent
    } else if cgpa >= 3.5 {
        Classification::VeryGood
    } else if cgpa >= 2.5 {
        Classification::Good
    } else if cgpa >= 1.5 {
        Classification::Average
    } else if cgpa >= 1.0 {
        Classification::Pass
    } else {
        Classification::Fail
    }
}

/// Presentation tier of a CGPA. Variants are ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl ColorTier {
    /// Style-class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorTier::Excellent => "excellent",
            ColorTier::Good => "good",
            ColorTier::Average => "average",
            ColorTier::Poor => "poor",
        }
    }

    /// Hex colour used when rendering this tier.
    #[must_use]
    pub const fn hex_color(self) -> &'static str {
        match self {
            ColorTier::Excellent => "#2ec4b6",
            ColorTier::Good => "#4cc9f0",
            ColorTier::Average => "#ff9f1c",
            ColorTier::Poor => "#e71d36",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the colour tier for a CGPA.
#[must_use]
pub fn color_tier(cgpa: f64) -> ColorTier {
    if cgpa >= 4.0 {
        ColorTier::Excellent
    } else if cgpa >= 3.0 {
        ColorTier::Good
    } else if cgpa >= 2.0 {
        ColorTier::Average
    } else {
        ColorTier::Poor
    }
}

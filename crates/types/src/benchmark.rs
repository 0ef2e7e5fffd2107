//! Benchmark and comparison result types

use serde::{Deserialize, Serialize};

/// A named real-world reference energy, in joules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub name: &'static str,
    pub joules: f64,
}

/// Visual coding bucket for a comparison ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagnitudeClass {
    /// Ratio of 1000x or more
    #[serde(rename = "high")]
    High,
    /// Ratio in [1, 1000)
    #[serde(rename = "medium")]
    Medium,
    /// Ratio below 1
    #[serde(rename = "low")]
    Low,
}

impl MagnitudeClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            MagnitudeClass::High => "high",
            MagnitudeClass::Medium => "medium",
            MagnitudeClass::Low => "low",
        }
    }
}

/// One row of the comparison table, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Benchmark name, e.g. "Lightning bolt (average)"
    pub name: &'static str,
    /// Human-readable ratio, e.g. "89.88 million times"
    pub ratio_text: String,
    /// Bucket used for color coding
    pub magnitude: MagnitudeClass,
}

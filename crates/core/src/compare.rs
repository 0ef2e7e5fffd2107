//! Comparison engine: how does the current energy stack up against
//! real-world reference energies?

use crate::constants::C_SQUARED;
use emc2_types::{Benchmark, Comparison, MagnitudeClass};
use log::debug;

/// Fixed reference table, in joules. Display order is significant and
/// matches the declaration order here.
pub const BENCHMARKS: [Benchmark; 9] = [
    Benchmark {
        name: "Hiroshima atomic bomb (15 kT)",
        joules: 6.276e13,
    },
    Benchmark {
        name: "Tsar Bomba (50 MT)",
        joules: 2.092e17,
    },
    Benchmark {
        name: "Annual US electricity use",
        joules: 1.44e19,
    },
    Benchmark {
        name: "1 liter of gasoline",
        joules: 3.2e7,
    },
    Benchmark {
        name: "Daily food intake (adult)",
        joules: 1.0e7,
    },
    Benchmark {
        name: "AA battery (alkaline)",
        joules: 1.08e4,
    },
    Benchmark {
        name: "Smartphone battery (full charge)",
        joules: 1.8e4,
    },
    Benchmark {
        name: "Lightning bolt (average)",
        joules: 1e9,
    },
    Benchmark {
        name: "Human heartbeat (per beat)",
        joules: 0.5,
    },
];

/// Compare an energy against every benchmark, in table order.
///
/// A NaN or non-positive energy is silently replaced with the energy
/// equivalent of 1 kg (c² joules). That fallback is deliberate policy,
/// not an error path: the comparison list always shows something useful
/// even while the primary result reads "Invalid".
pub fn compare(current_energy_joules: f64) -> Vec<Comparison> {
    let energy = if current_energy_joules.is_nan() || current_energy_joules <= 0.0 {
        debug!(
            "non-positive energy {current_energy_joules}, comparing against the 1 kg equivalent"
        );
        C_SQUARED
    } else {
        current_energy_joules
    };

    BENCHMARKS
        .iter()
        .map(|benchmark| {
            let ratio = energy / benchmark.joules;
            Comparison {
                name: benchmark.name,
                ratio_text: ratio_text(ratio),
                magnitude: magnitude_class(ratio),
            }
        })
        .collect()
}

/// Render a ratio as display text, scaled into named magnitude words
/// above 1000x and into percentages below 1x
pub fn ratio_text(ratio: f64) -> String {
    if ratio >= 1e12 {
        format!("{:.2} trillion times", ratio / 1e12)
    } else if ratio >= 1e9 {
        format!("{:.2} billion times", ratio / 1e9)
    } else if ratio >= 1e6 {
        format!("{:.2} million times", ratio / 1e6)
    } else if ratio >= 1e3 {
        format!("{:.2} thousand times", ratio / 1e3)
    } else if ratio >= 1.0 {
        format!("{:.2} times", ratio)
    } else if ratio >= 1e-3 {
        format!("{:.2}%", ratio * 100.0)
    } else {
        format!("{:.4}%", ratio * 100.0)
    }
}

/// Bucket a ratio for color coding
pub fn magnitude_class(ratio: f64) -> MagnitudeClass {
    if ratio >= 1000.0 {
        MagnitudeClass::High
    } else if ratio >= 1.0 {
        MagnitudeClass::Medium
    } else {
        MagnitudeClass::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_order_is_preserved() {
        let names: Vec<&str> = compare(C_SQUARED).iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Hiroshima atomic bomb (15 kT)",
                "Tsar Bomba (50 MT)",
                "Annual US electricity use",
                "1 liter of gasoline",
                "Daily food intake (adult)",
                "AA battery (alkaline)",
                "Smartphone battery (full charge)",
                "Lightning bolt (average)",
                "Human heartbeat (per beat)",
            ]
        );
    }

    #[test]
    fn test_one_kilogram_against_lightning_is_millions() {
        let comparisons = compare(C_SQUARED);
        let lightning = comparisons
            .iter()
            .find(|c| c.name == "Lightning bolt (average)")
            .unwrap();
        // c² / 1e9 ≈ 8.99e7, which lands in the "million times" bucket
        assert_eq!(lightning.ratio_text, "89.88 million times");
        assert_eq!(lightning.magnitude, MagnitudeClass::High);
    }

    #[test]
    fn test_non_positive_energy_falls_back_to_one_kilogram() {
        let one_kg = compare(C_SQUARED);
        assert_eq!(compare(0.0), one_kg);
        assert_eq!(compare(-5.0), one_kg);
        assert_eq!(compare(f64::NAN), one_kg);
    }

    #[test]
    fn test_ratio_text_buckets() {
        assert_eq!(ratio_text(2.5e12), "2.50 trillion times");
        assert_eq!(ratio_text(3.0e9), "3.00 billion times");
        assert_eq!(ratio_text(4.5e6), "4.50 million times");
        assert_eq!(ratio_text(1432.0), "1.43 thousand times");
        assert_eq!(ratio_text(2.0), "2.00 times");
        assert_eq!(ratio_text(0.5), "50.00%");
        assert_eq!(ratio_text(9.26e-5), "0.0093%");
    }

    #[test]
    fn test_magnitude_classes() {
        assert_eq!(magnitude_class(1000.0), MagnitudeClass::High);
        assert_eq!(magnitude_class(999.9), MagnitudeClass::Medium);
        assert_eq!(magnitude_class(1.0), MagnitudeClass::Medium);
        assert_eq!(magnitude_class(0.99), MagnitudeClass::Low);
    }

    #[test]
    fn test_small_energy_shows_percentages() {
        let comparisons = compare(1.0);
        let battery = comparisons
            .iter()
            .find(|c| c.name == "AA battery (alkaline)")
            .unwrap();
        // 1 J / 1.08e4 J is far below the 1e-3 cutoff, so 4 decimals
        assert_eq!(battery.ratio_text, "0.0093%");
        assert_eq!(battery.magnitude, MagnitudeClass::Low);

        let heartbeat = comparisons
            .iter()
            .find(|c| c.name == "Human heartbeat (per beat)")
            .unwrap();
        assert_eq!(heartbeat.ratio_text, "2.00 times");
        assert_eq!(heartbeat.magnitude, MagnitudeClass::Medium);
    }
}

//! Conversion engine: E = mc² in both directions.
//!
//! All functions here are pure and deterministic. Negative or zero input
//! is propagated arithmetically rather than rejected; invalid text parses
//! to NaN and surfaces downstream as the literal "Invalid".

use crate::constants::C_SQUARED;
use emc2_types::{EnergyUnit, MassUnit};

/// Convert a mass in the given unit to energy in joules
pub fn mass_to_energy(value: f64, unit: MassUnit) -> f64 {
    value * unit.kilograms() * C_SQUARED
}

/// Convert an energy in the given unit to mass in kilograms
pub fn energy_to_mass(value: f64, unit: EnergyUnit) -> f64 {
    value * unit.joules() / C_SQUARED
}

/// Express an energy in joules in the given display unit
pub fn energy_in(joules: f64, unit: EnergyUnit) -> f64 {
    joules / unit.joules()
}

/// Express a mass in kilograms in the given display unit
pub fn mass_in(kilograms: f64, unit: MassUnit) -> f64 {
    kilograms / unit.kilograms()
}

/// Parse a numeric input field.
///
/// Returns NaN when the text is empty or does not parse as a real number;
/// the formatter renders NaN as "Invalid" instead of failing.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_kilogram_equivalent() {
        assert_eq!(mass_to_energy(1.0, MassUnit::Kilogram), C_SQUARED);
    }

    #[test]
    fn test_round_trip_through_joules() {
        for unit in MassUnit::ALL {
            for mass in [0.001, 1.0, 42.0, 7.5e6] {
                let joules = mass_to_energy(mass, unit);
                let back = energy_to_mass(joules, EnergyUnit::Joule);
                let expected = mass * unit.kilograms();
                assert!(
                    (back - expected).abs() <= expected * 1e-12,
                    "round trip failed for {mass} {unit}: {back} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_unit_multipliers_applied() {
        let gram = mass_to_energy(1000.0, MassUnit::Gram);
        let kilogram = mass_to_energy(1.0, MassUnit::Kilogram);
        assert_eq!(gram, kilogram);

        let kt = energy_to_mass(1.0, EnergyUnit::KilotonTnt);
        assert_eq!(kt, 4.184e12 / C_SQUARED);
    }

    #[test]
    fn test_negative_and_zero_propagate() {
        assert_eq!(mass_to_energy(0.0, MassUnit::Kilogram), 0.0);
        assert!(mass_to_energy(-2.0, MassUnit::Kilogram) < 0.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5"), 1.5);
        assert_eq!(parse_amount("  -3e2 "), -300.0);
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("abc").is_nan());
    }

    #[test]
    fn test_display_unit_scaling() {
        assert_eq!(energy_in(3.6e6, EnergyUnit::KilowattHour), 1.0);
        assert_eq!(mass_in(0.453592, MassUnit::Pound), 1.0);
    }
}

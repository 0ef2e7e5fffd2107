//! Full recalculation: input text to displayable outputs.
//!
//! One call here is what a field edit, unit switch, or mode toggle
//! triggers in the presentation layer.

use crate::{compare, convert, format};
use emc2_types::{Comparison, ConversionMode, ConverterState};

/// Everything a single recalculation produces for the frontend
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Formatted result with its display unit, e.g. "89.875518 × 10¹⁵ J"
    pub result_text: String,
    /// Mass in kilograms, drives the particle visualization
    pub mass_kg: f64,
    /// Energy in joules, drives the comparison table
    pub energy_joules: f64,
    /// Comparison table rows, in fixed benchmark order
    pub comparisons: Vec<Comparison>,
}

/// Evaluate the authoritative input field for the current mode.
///
/// Invalid input yields an "Invalid" result text while the comparison
/// table falls back to the 1 kg equivalent; the two paths deliberately
/// disagree, matching the documented behavior.
pub fn evaluate(state: &ConverterState, input: &str) -> Evaluation {
    let amount = convert::parse_amount(input);

    let (result_text, mass_kg, energy_joules) = match state.mode {
        ConversionMode::MassToEnergy => {
            let mass_kg = amount * state.mass_unit.kilograms();
            let energy_joules = convert::mass_to_energy(amount, state.mass_unit);
            let shown = convert::energy_in(energy_joules, state.energy_unit);
            let text = format!(
                "{} {}",
                format::format_scaled(shown),
                state.energy_unit.display_name()
            );
            (text, mass_kg, energy_joules)
        }
        ConversionMode::EnergyToMass => {
            let energy_joules = amount * state.energy_unit.joules();
            let mass_kg = convert::energy_to_mass(amount, state.energy_unit);
            let shown = convert::mass_in(mass_kg, state.mass_unit);
            let text = format!(
                "{} {}",
                format::format_scaled(shown),
                state.mass_unit.symbol()
            );
            (text, mass_kg, energy_joules)
        }
    };

    Evaluation {
        result_text,
        mass_kg,
        energy_joules,
        comparisons: compare::compare(energy_joules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::C_SQUARED;
    use emc2_types::{EnergyUnit, MassUnit};

    #[test]
    fn test_one_kilogram_to_joules() {
        let state = ConverterState::new();
        let eval = evaluate(&state, "1");
        assert_eq!(eval.mass_kg, 1.0);
        assert_eq!(eval.energy_joules, C_SQUARED);
        assert_eq!(eval.result_text, "89875.517874 × 10¹² J");
    }

    #[test]
    fn test_kiloton_result_uses_long_unit_name() {
        let state = ConverterState {
            energy_unit: EnergyUnit::KilotonTnt,
            ..ConverterState::new()
        };
        let eval = evaluate(&state, "1");
        assert!(
            eval.result_text.ends_with("kilotons TNT"),
            "got {}",
            eval.result_text
        );
    }

    #[test]
    fn test_energy_to_mass_direction() {
        let state = ConverterState {
            mode: ConversionMode::EnergyToMass,
            ..ConverterState::new()
        };
        let eval = evaluate(&state, &format!("{C_SQUARED}"));
        assert!((eval.mass_kg - 1.0).abs() < 1e-12);
        assert_eq!(eval.result_text, "1.000000 kg");
    }

    #[test]
    fn test_invalid_input_shows_invalid_but_compares_anyway() {
        let state = ConverterState::new();
        let eval = evaluate(&state, "not a number");
        assert_eq!(eval.result_text, "Invalid J");
        // Comparisons silently fall back to the 1 kg equivalent
        assert_eq!(eval.comparisons, compare::compare(C_SQUARED));
    }

    #[test]
    fn test_mass_unit_scaling_in_energy_mode() {
        let state = ConverterState {
            mode: ConversionMode::EnergyToMass,
            mass_unit: MassUnit::Gram,
            ..ConverterState::new()
        };
        let eval = evaluate(&state, &format!("{C_SQUARED}"));
        // 1 kg shown in grams
        assert_eq!(eval.result_text, "1.000000 × 10³ g");
    }
}

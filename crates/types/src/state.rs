//! Converter selection state

use crate::mode::ConversionMode;
use crate::units::{EnergyUnit, MassUnit};
use serde::{Deserialize, Serialize};

/// The full selection state of the converter.
///
/// Owned by the presentation layer and passed by reference into the
/// evaluation calls; the computational core never holds it as a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConverterState {
    /// Active conversion direction
    #[serde(default)]
    pub mode: ConversionMode,
    /// Unit the mass field is entered/displayed in
    #[serde(default)]
    pub mass_unit: MassUnit,
    /// Unit the energy field is entered/displayed in
    #[serde(default)]
    pub energy_unit: EnergyUnit,
}

impl ConverterState {
    /// Starting state: mass to energy, kilograms, joules
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ConverterState::new();
        assert_eq!(state.mode, ConversionMode::MassToEnergy);
        assert_eq!(state.mass_unit, MassUnit::Kilogram);
        assert_eq!(state.energy_unit, EnergyUnit::Joule);
    }
}

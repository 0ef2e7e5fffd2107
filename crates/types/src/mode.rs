//! Conversion direction selection

use serde::{Deserialize, Serialize};

/// Which direction the converter is running in.
///
/// The mode determines which input field is authoritative and which
/// quantity is produced as the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConversionMode {
    #[serde(rename = "mass_to_energy")]
    #[default]
    MassToEnergy,
    #[serde(rename = "energy_to_mass")]
    EnergyToMass,
}

impl ConversionMode {
    /// The other direction
    pub const fn opposite(self) -> Self {
        match self {
            ConversionMode::MassToEnergy => ConversionMode::EnergyToMass,
            ConversionMode::EnergyToMass => ConversionMode::MassToEnergy,
        }
    }

    /// Headline shown above the result for this direction
    pub const fn result_title(self) -> &'static str {
        match self {
            ConversionMode::MassToEnergy => "Energy Equivalent",
            ConversionMode::EnergyToMass => "Mass Equivalent",
        }
    }
}

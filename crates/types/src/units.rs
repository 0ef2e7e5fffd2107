//! Unit registries for mass and energy.
//!
//! The multiplier tables are fixed at compile time and never recomputed:
//! each unit knows its conversion factor into the base unit (kilograms for
//! mass, joules for energy).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a unit symbol is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("unknown mass unit '{0}' (expected kg, g, or lbs)")]
    UnknownMassUnit(String),
    #[error("unknown energy unit '{0}' (expected J, kT, or kWh)")]
    UnknownEnergyUnit(String),
}

/// Mass units selectable in the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MassUnit {
    #[serde(rename = "kg")]
    #[default]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "lbs")]
    Pound,
}

impl MassUnit {
    /// All mass units, in selector order
    pub const ALL: [MassUnit; 3] = [MassUnit::Kilogram, MassUnit::Gram, MassUnit::Pound];

    /// Kilograms per one of this unit
    pub const fn kilograms(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Pound => 0.453592,
        }
    }

    /// Short symbol used in selectors and result text
    pub const fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lbs",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kg" => Ok(MassUnit::Kilogram),
            "g" => Ok(MassUnit::Gram),
            "lbs" => Ok(MassUnit::Pound),
            other => Err(UnitParseError::UnknownMassUnit(other.to_string())),
        }
    }
}

/// Energy units selectable in the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnergyUnit {
    #[serde(rename = "J")]
    #[default]
    Joule,
    #[serde(rename = "kT")]
    KilotonTnt,
    #[serde(rename = "kWh")]
    KilowattHour,
}

impl EnergyUnit {
    /// All energy units, in selector order
    pub const ALL: [EnergyUnit; 3] = [
        EnergyUnit::Joule,
        EnergyUnit::KilotonTnt,
        EnergyUnit::KilowattHour,
    ];

    /// Joules per one of this unit
    pub const fn joules(self) -> f64 {
        match self {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::KilotonTnt => 4.184e12,
            EnergyUnit::KilowattHour => 3.6e6,
        }
    }

    /// Short symbol used in selectors
    pub const fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::KilotonTnt => "kT",
            EnergyUnit::KilowattHour => "kWh",
        }
    }

    /// Label appended to the result text; kilotons get the long form
    pub const fn display_name(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::KilotonTnt => "kilotons TNT",
            EnergyUnit::KilowattHour => "kWh",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EnergyUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "J" | "j" => Ok(EnergyUnit::Joule),
            "kT" | "kt" => Ok(EnergyUnit::KilotonTnt),
            "kWh" | "kwh" => Ok(EnergyUnit::KilowattHour),
            other => Err(UnitParseError::UnknownEnergyUnit(other.to_string())),
        }
    }
}

//! Application configuration

use anyhow::Result;
use emc2_types::{ConversionMode, ConverterState, EnergyUnit, MassUnit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_fact_interval_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Conversion direction at startup
    #[serde(default)]
    pub mode: ConversionMode,
    /// Mass unit at startup
    #[serde(default)]
    pub mass_unit: MassUnit,
    /// Energy unit at startup
    #[serde(default)]
    pub energy_unit: EnergyUnit,
    /// Seconds between fact rotations
    #[serde(default = "default_fact_interval_secs")]
    pub fact_interval_secs: u64,
    /// Whether to draw the particle field under the result
    #[serde(default = "default_true")]
    pub show_particles: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ConversionMode::default(),
            mass_unit: MassUnit::default(),
            energy_unit: EnergyUnit::default(),
            fact_interval_secs: default_fact_interval_secs(),
            show_particles: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists yet
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github", "emc2-explorer")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Initial converter state described by this config
    pub fn initial_state(&self) -> ConverterState {
        ConverterState {
            mode: self.mode,
            mass_unit: self.mass_unit,
            energy_unit: self.energy_unit,
        }
    }
}

//! Interactive application loop.
//!
//! All state mutation happens here, on the one thread draining the event
//! channel. The stdin reader thread and the fact timer only send events.

use crate::events::AppEvent;
use crate::sources::FactRotator;
use crate::ui::{ParticleField, TerminalRenderer};
use crate::AppConfig;
use anyhow::{bail, Result};
use crossbeam::channel::{Receiver, Sender};
use emc2_core::{evaluate, RenderSink};
use emc2_types::{ConversionMode, ConverterState, EnergyUnit, MassUnit};
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

/// A parsed user command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// New input value; recalculates everything
    Value(String),
    /// Flip the conversion direction
    ToggleMode,
    SetMode(ConversionMode),
    SetMassUnit(MassUnit),
    SetEnergyUnit(EnergyUnit),
    /// Show a fact now and restart the rotation timer
    Fact,
    /// Persist the current mode and unit selections
    Save,
    Help,
    Quit,
}

/// Parse one input line into a command.
///
/// Anything that parses as a number is treated as a new input value, so
/// typing "1.5" recalculates just like editing the field would.
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();

    if trimmed.parse::<f64>().is_ok() {
        return Ok(Command::Value(trimmed.to_string()));
    }

    let mut words = trimmed.split_whitespace();
    match (words.next(), words.next()) {
        (Some("mode"), None) => Ok(Command::ToggleMode),
        (Some("mode"), Some("mass")) => Ok(Command::SetMode(ConversionMode::MassToEnergy)),
        (Some("mode"), Some("energy")) => Ok(Command::SetMode(ConversionMode::EnergyToMass)),
        (Some("unit"), Some(symbol)) => {
            if let Ok(unit) = MassUnit::from_str(symbol) {
                Ok(Command::SetMassUnit(unit))
            } else if let Ok(unit) = EnergyUnit::from_str(symbol) {
                Ok(Command::SetEnergyUnit(unit))
            } else {
                bail!("unknown unit '{symbol}' (expected kg, g, lbs, J, kT, or kWh)")
            }
        }
        (Some("fact"), None) => Ok(Command::Fact),
        (Some("save"), None) => Ok(Command::Save),
        (Some("help"), None) | (Some("?"), None) => Ok(Command::Help),
        (Some("quit"), None) | (Some("exit"), None) | (Some("q"), None) => Ok(Command::Quit),
        _ => bail!("unknown command '{trimmed}', try 'help'"),
    }
}

/// The interactive converter application
pub struct App {
    state: ConverterState,
    input_text: String,
    renderer: TerminalRenderer,
    field: ParticleField,
    rotator: FactRotator,
    events: Receiver<AppEvent>,
    fact_tx: Sender<AppEvent>,
    config: AppConfig,
    /// Explicit config file from the CLI; None means the default location
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        config: AppConfig,
        config_path: Option<PathBuf>,
        initial_value: String,
        renderer: TerminalRenderer,
        rotator: FactRotator,
        events: Receiver<AppEvent>,
        fact_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            state: config.initial_state(),
            input_text: initial_value,
            renderer,
            field: ParticleField::new(),
            rotator,
            events,
            fact_tx,
            config,
            config_path,
        }
    }

    /// Run until stdin closes or the user quits
    pub fn run(&mut self) -> Result<()> {
        self.renderer.show_banner();
        self.renderer.set_mode(self.state.mode);
        self.recalculate();
        self.rotator.start(self.fact_tx.clone());

        loop {
            match self.events.recv() {
                Ok(AppEvent::Line(line)) => {
                    if self.handle_line(&line) {
                        break;
                    }
                }
                Ok(AppEvent::Fact(fact)) => self.renderer.on_fact(fact),
                Ok(AppEvent::Eof) | Err(_) => break,
            }
        }

        self.rotator.stop();
        info!("shutting down");
        Ok(())
    }

    /// Returns true when the user asked to quit
    fn handle_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        match parse_command(line) {
            Ok(command) => self.apply(command),
            Err(e) => {
                println!("{e}");
                false
            }
        }
    }

    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Value(text) => {
                self.input_text = text;
                self.recalculate();
            }
            Command::ToggleMode => self.set_mode(self.state.mode.opposite()),
            Command::SetMode(mode) => self.set_mode(mode),
            Command::SetMassUnit(unit) => {
                info!("mass unit set to {unit}");
                self.state.mass_unit = unit;
                self.recalculate();
            }
            Command::SetEnergyUnit(unit) => {
                info!("energy unit set to {unit}");
                self.state.energy_unit = unit;
                self.recalculate();
            }
            Command::Fact => self.rotator.start(self.fact_tx.clone()),
            Command::Save => self.save_settings(),
            Command::Help => self.renderer.show_help(),
            Command::Quit => return true,
        }
        false
    }

    fn set_mode(&mut self, mode: ConversionMode) {
        info!("conversion mode set to {mode:?}");
        self.state.mode = mode;
        self.renderer.set_mode(mode);
        self.recalculate();
    }

    /// Write the current mode and unit selections back to the config file
    fn save_settings(&mut self) {
        self.config.mode = self.state.mode;
        self.config.mass_unit = self.state.mass_unit;
        self.config.energy_unit = self.state.energy_unit;

        let result = match &self.config_path {
            Some(path) => self.config.save_to_path(path),
            None => self.config.save(),
        };
        match result {
            Ok(()) => println!("settings saved"),
            Err(e) => println!("could not save settings: {e}"),
        }
    }

    /// Re-run the whole pipeline: convert, format, visualize, compare
    fn recalculate(&mut self) {
        let eval = evaluate(&self.state, &self.input_text);
        self.renderer.on_result(&eval.result_text);
        if self.config.show_particles {
            self.field.respawn(eval.mass_kg, eval.energy_joules);
            print!("{}", self.field.render_grid(60, 6));
        }
        self.renderer.on_comparison(&eval.comparisons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_become_value_commands() {
        assert_eq!(
            parse_command("1.5").unwrap(),
            Command::Value("1.5".to_string())
        );
        assert_eq!(
            parse_command("  -3e2 ").unwrap(),
            Command::Value("-3e2".to_string())
        );
    }

    #[test]
    fn test_mode_commands() {
        assert_eq!(parse_command("mode").unwrap(), Command::ToggleMode);
        assert_eq!(
            parse_command("mode mass").unwrap(),
            Command::SetMode(ConversionMode::MassToEnergy)
        );
        assert_eq!(
            parse_command("mode energy").unwrap(),
            Command::SetMode(ConversionMode::EnergyToMass)
        );
    }

    #[test]
    fn test_unit_commands_route_by_kind() {
        assert_eq!(
            parse_command("unit g").unwrap(),
            Command::SetMassUnit(MassUnit::Gram)
        );
        assert_eq!(
            parse_command("unit kWh").unwrap(),
            Command::SetEnergyUnit(EnergyUnit::KilowattHour)
        );
        assert!(parse_command("unit parsec").is_err());
    }

    #[test]
    fn test_misc_commands() {
        assert_eq!(parse_command("fact").unwrap(), Command::Fact);
        assert_eq!(parse_command("save").unwrap(), Command::Save);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert!(parse_command("launch").is_err());
    }
}

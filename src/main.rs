use anyhow::Result;
use clap::Parser;
use crossbeam::channel::unbounded;
use emc2_explorer::app::App;
use emc2_explorer::config::AppConfig;
use emc2_explorer::events::AppEvent;
use emc2_explorer::sources::FactRotator;
use emc2_explorer::ui::TerminalRenderer;
use emc2_types::{ConversionMode, EnergyUnit, MassUnit};
use log::info;
use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// emc2-explorer - An interactive mass-energy equivalence explorer
#[derive(Parser, Debug, Clone)]
#[command(name = "emc2-explorer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial input value, e.g. 1.5
    #[arg(value_name = "VALUE")]
    value: Option<String>,

    /// Conversion direction at startup: mass (to energy) or energy (to mass)
    #[arg(short = 'm', long = "mode", value_parser = parse_mode)]
    mode: Option<ConversionMode>,

    /// Mass unit: kg, g, or lbs
    #[arg(long = "mass-unit", value_parser = parse_mass_unit)]
    mass_unit: Option<MassUnit>,

    /// Energy unit: J, kT, or kWh
    #[arg(long = "energy-unit", value_parser = parse_energy_unit)]
    energy_unit: Option<EnergyUnit>,

    /// Seconds between rotating facts
    #[arg(long = "fact-interval", value_name = "SECS")]
    fact_interval: Option<u64>,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Skip the decorative particle field
    #[arg(long = "no-particles")]
    no_particles: bool,

    /// Config file to load instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn parse_mode(s: &str) -> Result<ConversionMode, String> {
    match s {
        "mass" | "mass_to_energy" => Ok(ConversionMode::MassToEnergy),
        "energy" | "energy_to_mass" => Ok(ConversionMode::EnergyToMass),
        other => Err(format!("expected 'mass' or 'energy', got: {other}")),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, String> {
    MassUnit::from_str(s).map_err(|e| e.to_string())
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, String> {
    EnergyUnit::from_str(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Allow RUST_LOG to override the CLI verbosity
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting emc2-explorer v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    // CLI flags win over the config file
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(unit) = cli.mass_unit {
        config.mass_unit = unit;
    }
    if let Some(unit) = cli.energy_unit {
        config.energy_unit = unit;
    }
    if let Some(secs) = cli.fact_interval {
        config.fact_interval_secs = secs;
    }
    if cli.no_particles {
        config.show_particles = false;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (tx, rx) = unbounded();
    spawn_stdin_reader(tx.clone());

    let rotator = FactRotator::new(
        runtime.handle().clone(),
        Duration::from_secs(config.fact_interval_secs.max(1)),
    );
    let renderer = TerminalRenderer::new(!cli.no_color);

    let mut app = App::new(
        config,
        cli.config.clone(),
        cli.value.unwrap_or_default(),
        renderer,
        rotator,
        rx,
        tx,
    );
    app.run()
}

/// Forward stdin lines to the event loop; sends Eof when stdin closes
fn spawn_stdin_reader(tx: crossbeam::channel::Sender<AppEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(AppEvent::Eof);
    });
}

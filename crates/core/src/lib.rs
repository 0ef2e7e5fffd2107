//! emc2-core: Computational core of the emc2-explorer converter.
//!
//! This crate contains the conversion engine (E = mc² both ways), the
//! scaled number formatter, the benchmark comparison engine, the fact
//! catalog, and the render-sink trait that keeps the core free of any
//! UI framework dependency.

pub mod compare;
pub mod constants;
pub mod convert;
pub mod facts;
pub mod format;
mod render;
mod session;

pub use compare::{compare, magnitude_class, ratio_text, BENCHMARKS};
pub use constants::{C_SQUARED, SPEED_OF_LIGHT};
pub use convert::{energy_in, energy_to_mass, mass_in, mass_to_energy, parse_amount};
pub use facts::{random_fact, FUN_FACTS};
pub use format::format_scaled;
pub use render::{BoxedRenderSink, RenderSink};
pub use session::{evaluate, Evaluation};

// Re-export types used in the public signatures for convenience
pub use emc2_types::{Comparison, ConversionMode, ConverterState, MagnitudeClass};

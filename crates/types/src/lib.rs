//! emc2-types: Shared data types for the emc2-explorer converter.
//!
//! This crate contains pure data types (units, conversion mode, converter
//! state, benchmark/comparison types) shared across the emc2-explorer
//! crates. These types have no UI or runtime dependencies, making them
//! suitable as a foundation layer.

pub mod benchmark;
pub mod mode;
pub mod state;
pub mod units;

// Re-export commonly used types at the crate root for convenience
pub use benchmark::{Benchmark, Comparison, MagnitudeClass};
pub use mode::ConversionMode;
pub use state::ConverterState;
pub use units::{EnergyUnit, MassUnit, UnitParseError};

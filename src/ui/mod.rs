//! Terminal presentation layer

pub mod particles;
pub mod terminal;

pub use particles::{particle_count, wave_height, Particle, ParticleField};
pub use terminal::TerminalRenderer;

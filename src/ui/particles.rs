//! Decorative particle-field visualization.
//!
//! The field is purely cosmetic, but its parameters are deterministic
//! functions of the computed quantities: particle count scales with the
//! mass in kilograms and the energy wave height with log10 of the energy.

use rand::Rng;

/// Fewest particles ever drawn
pub const MIN_PARTICLES: usize = 5;
/// Most particles ever drawn
pub const MAX_PARTICLES: usize = 200;
/// Cap on the energy wave height, in display rows of the original layout
pub const MAX_WAVE_HEIGHT: f64 = 180.0;

/// One decorative particle. Positions are percentages of the field;
/// size, hue, and animation timing vary randomly within fixed bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hue: f64,
    pub saturation: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            size: 4.0 + rng.gen::<f64>() * 6.0,
            // Yellow-ish glow with a little variation
            hue: 50.0 + rng.gen::<f64>() * 20.0,
            saturation: 80.0 + rng.gen::<f64>() * 20.0,
            duration: 3.0 + rng.gen::<f64>() * 4.0,
            delay: rng.gen::<f64>() * 2.0,
        }
    }
}

/// How many particles a given mass earns, clamped to [5, 200]
pub fn particle_count(mass_kg: f64) -> usize {
    if !mass_kg.is_finite() {
        return MIN_PARTICLES;
    }
    let scaled = (mass_kg * 1000.0).floor();
    scaled.clamp(MIN_PARTICLES as f64, MAX_PARTICLES as f64) as usize
}

/// Energy wave height from the energy in joules.
///
/// Flat until ~100 kJ, grows gently through the mid band, then ramps at
/// 10x per decade above 1e10 J up to the cap.
pub fn wave_height(energy_joules: f64) -> f64 {
    let log_energy = f64::max(1.0, energy_joules).log10();
    if log_energy > 10.0 {
        f64::min(MAX_WAVE_HEIGHT, (log_energy - 10.0) * 10.0)
    } else if log_energy > 5.0 {
        (log_energy - 5.0) * 2.0
    } else {
        0.0
    }
}

/// The particle field backing the animation region
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    wave: f64,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the field for a new mass/energy pair
    pub fn respawn(&mut self, mass_kg: f64, energy_joules: f64) {
        let mut rng = rand::thread_rng();
        let count = particle_count(mass_kg);
        self.particles = (0..count).map(|_| Particle::random(&mut rng)).collect();
        self.wave = wave_height(energy_joules);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn wave(&self) -> f64 {
        self.wave
    }

    /// Render the field as a character grid.
    ///
    /// Particle size picks the glyph; the bottom rows fill in proportion
    /// to the wave height.
    pub fn render_grid(&self, width: usize, height: usize) -> String {
        let mut grid = vec![vec![' '; width]; height];

        for particle in &self.particles {
            let col = ((particle.x / 100.0) * width as f64) as usize;
            let row = ((particle.y / 100.0) * height as f64) as usize;
            let glyph = if particle.size >= 8.0 {
                'O'
            } else if particle.size >= 6.0 {
                'o'
            } else {
                '.'
            };
            if row < height && col < width {
                grid[row][col] = glyph;
            }
        }

        // Fill the wave from the bottom up
        let wave_rows = ((self.wave / MAX_WAVE_HEIGHT) * height as f64).round() as usize;
        for row in grid.iter_mut().rev().take(wave_rows.min(height)) {
            for cell in row.iter_mut() {
                if *cell == ' ' {
                    *cell = '~';
                }
            }
        }

        let mut out = String::with_capacity((width + 1) * height);
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

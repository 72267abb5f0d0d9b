//! Fractal gradient noise engine.
//!
//! Sums several octaves of 2D gradient ("Perlin") noise, each sampled from
//! its own [`GradientLattice`], into a single value in `[0, 1]`.
//!
//! # Algorithm
//!
//! For octave `i` the input is scaled by `base_frequency * lacunarity^i`,
//! sampled from lattice `i` by bilinear interpolation of the four
//! corner-gradient dot products, and weighted by `persistence^i`. The
//! interpolation weights pass through the quintic fade curve
//! `6t⁵ - 15t⁴ + 10t³`, whose first and second derivatives vanish at the
//! cell edges, so no grid-aligned creases appear.
//!
//! The octave sum is mapped into `[0, 1]` via `(1 + total) / 2` and clamped,
//! since superposed octaves can exceed the single-octave bound of `±√2/2`.
//!
//! # References
//!
//! - Perlin, K. (1985). An image synthesizer. SIGGRAPH Computer Graphics, 19(3).
//! - Perlin, K. (2002). Improving noise. ACM Transactions on Graphics, 21(3), 681-682.

use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::NoiseConfig;
use crate::error::{DomainAxis, NoiseError, Result};
use crate::lattice::GradientLattice;

/// Multi-octave gradient noise sampler.
///
/// Immutable after construction: [`sample`](Self::sample) takes `&self`
/// and touches no shared mutable state, so one engine can be sampled from
/// many threads at once.
#[derive(Clone, Debug)]
pub struct NoiseEngine {
    /// Parameters the engine was built from.
    config: NoiseConfig,

    /// One independent lattice per octave.
    lattices: Vec<GradientLattice>,
}

impl NoiseEngine {
    /// Build an engine from a validated configuration.
    ///
    /// A single random stream is seeded from `config.seed` and every octave
    /// lattice is drawn from it in turn, so octaves get independent fields
    /// while the whole engine stays reproducible from one seed. The stream
    /// is dropped before returning.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] if `config` fails
    /// [`NoiseConfig::validate`].
    pub fn new(config: NoiseConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let lattices = (0..config.octaves)
            .map(|_| GradientLattice::from_rng(&mut rng, config.grid_size))
            .collect();

        debug!(
            "Built noise engine: seed={}, octaves={}, grid={}x{}, base_frequency={}, lacunarity={}, persistence={}",
            config.seed,
            config.octaves,
            config.grid_size,
            config.grid_size,
            config.base_frequency,
            config.lacunarity,
            config.persistence
        );

        Ok(Self { config, lattices })
    }

    /// Positional constructor mirroring [`NoiseConfig`]'s fields.
    ///
    /// # Errors
    ///
    /// Same as [`NoiseEngine::new`].
    pub fn construct(
        seed: u64,
        octaves: u32,
        lacunarity: f64,
        base_frequency: f64,
        persistence: f64,
        grid_size: usize,
    ) -> Result<Self> {
        Self::new(NoiseConfig {
            seed,
            octaves,
            lacunarity,
            base_frequency,
            persistence,
            grid_size,
        })
    }

    /// Configuration the engine was built from.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Number of octaves, always equal to `lattices().len()`.
    pub fn octave_count(&self) -> usize {
        self.lattices.len()
    }

    /// Per-octave lattices, lowest frequency first.
    pub fn lattices(&self) -> &[GradientLattice] {
        &self.lattices
    }

    /// Sample the fractal noise field at a domain coordinate.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal domain coordinate in `[0, 1]`
    /// * `y` - Vertical domain coordinate in `[0, 1]`
    ///
    /// # Returns
    ///
    /// Noise intensity in `[0, 1]`. Identical inputs on identically
    /// configured engines always give bit-identical results.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::OutOfDomain`] if either coordinate lies outside
    /// `[0, 1]` or is NaN. Inputs are never clamped.
    pub fn sample(&self, x: f64, y: f64) -> Result<f64> {
        if let Some(axis) = DomainAxis::classify(x, y) {
            return Err(NoiseError::OutOfDomain { x, y, axis });
        }

        let mut total = 0.0_f64;
        for (index, lattice) in (0_u32..).zip(&self.lattices) {
            let frequency = self.config.octave_frequency(index);
            let amplitude = self.config.octave_amplitude(index);
            total += gradient_noise_2d(lattice, x * frequency, y * frequency) * amplitude;
        }

        Ok(((1.0 + total) / 2.0).clamp(0.0, 1.0))
    }
}

/// Single-octave gradient noise at frequency-scaled coordinates.
///
/// Any finite input is accepted: cell indices are wrapped into the lattice
/// before conversion to integers. Output lies within `±√2/2` and is not
/// clamped here.
pub(crate) fn gradient_noise_2d(lattice: &GradientLattice, x: f64, y: f64) -> f64 {
    // Map into lattice-cell space
    let scale = (lattice.size() - 1) as f64;
    let sx = x * scale;
    let sy = y * scale;

    let cell_x = sx.floor();
    let cell_y = sy.floor();

    // Fractional offsets are taken before any wraparound
    let fx = sx - cell_x;
    let fy = sy - cell_y;

    let n = lattice.size() as f64;
    let x0 = cell_x.rem_euclid(n) as i64;
    let y0 = cell_y.rem_euclid(n) as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Corner influences: gradient · (point - corner)
    let n00 = corner_dot(lattice, x0, y0, fx, fy);
    let n10 = corner_dot(lattice, x1, y0, fx - 1.0, fy);
    let n01 = corner_dot(lattice, x0, y1, fx, fy - 1.0);
    let n11 = corner_dot(lattice, x1, y1, fx - 1.0, fy - 1.0);

    let u = fade(fx);
    let v = fade(fy);

    let top = lerp(n00, n10, u);
    let bottom = lerp(n01, n11, u);
    lerp(top, bottom, v)
}

#[inline]
fn corner_dot(lattice: &GradientLattice, cx: i64, cy: i64, dx: f64, dy: f64) -> f64 {
    lattice.gradient(cy, cx).dot(&Vector2::new(dx, dy))
}

/// Quintic fade curve `6t⁵ - 15t⁴ + 10t³` (C2 at 0 and 1).
#[inline]
pub(crate) fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, p: f64) -> f64 {
    (1.0 - p) * a + p * b
}

//! Noise engine configuration.
//!
//! [`NoiseConfig`] carries every construction parameter of the fractal
//! engine. It is plain data: serializable, cheap to copy, and validated
//! once when the engine is built.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// Largest lattice-cell coordinate any octave may reach (2^52).
///
/// Past this an `f64` cell coordinate has no fractional bits left, so the
/// interpolation offsets collapse to zero.
pub const MAX_LATTICE_SPAN: f64 = 4_503_599_627_370_496.0;

/// Construction parameters for a [`NoiseEngine`](crate::NoiseEngine).
///
/// Missing fields in a deserialized document fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Seed for the gradient lattice random stream.
    pub seed: u64,

    /// Number of octaves summed into the output (>= 1).
    pub octaves: u32,

    /// Frequency multiplier applied per successive octave (> 0).
    ///
    /// Values above 1.0 add progressively finer detail.
    pub lacunarity: f64,

    /// Frequency of the first octave (> 0).
    pub base_frequency: f64,

    /// Amplitude multiplier applied per successive octave, in `(0, 1]`.
    ///
    /// Also known as gain.
    pub persistence: f64,

    /// Side length of each octave's gradient lattice (>= 2).
    pub grid_size: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 100,
            octaves: 1,
            lacunarity: 1.0,
            base_frequency: 0.1,
            persistence: 1.0,
            grid_size: 20,
        }
    }
}

impl NoiseConfig {
    /// Set the lattice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the octave count.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set the per-octave frequency multiplier.
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Set the first octave's frequency.
    pub fn with_base_frequency(mut self, base_frequency: f64) -> Self {
        self.base_frequency = base_frequency;
        self
    }

    /// Set the per-octave amplitude multiplier.
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the lattice side length.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Check that sampling is well-defined for these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] naming the first
    /// parameter that fails:
    /// - `octaves` below 1
    /// - `grid_size` below 2 (interpolation needs a neighbour cell)
    /// - `lacunarity` or `base_frequency` not finite and positive
    /// - `persistence` outside `(0, 1]`
    /// - `base_frequency` or `lacunarity` driving any octave past
    ///   [`MAX_LATTICE_SPAN`] lattice cells across the unit domain.
    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(NoiseError::invalid(
                "octaves",
                format!("must be at least 1, got {}", self.octaves),
            ));
        }
        if self.grid_size < 2 {
            return Err(NoiseError::invalid(
                "grid_size",
                format!("must be at least 2, got {}", self.grid_size),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(NoiseError::invalid(
                "lacunarity",
                format!("must be finite and positive, got {}", self.lacunarity),
            ));
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(NoiseError::invalid(
                "base_frequency",
                format!("must be finite and positive, got {}", self.base_frequency),
            ));
        }
        // NaN fails both comparisons
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(NoiseError::invalid(
                "persistence",
                format!("must lie in (0, 1], got {}", self.persistence),
            ));
        }

        // Frequencies form a geometric series, so the extreme is at an end
        let cells = (self.grid_size - 1) as f64;
        let top_octave = self.octaves - 1;
        let span = self
            .octave_frequency(0)
            .max(self.octave_frequency(top_octave))
            * cells;
        if !(span.is_finite() && span <= MAX_LATTICE_SPAN) {
            let parameter = if self.base_frequency * cells > MAX_LATTICE_SPAN {
                "base_frequency"
            } else {
                "lacunarity"
            };
            return Err(NoiseError::invalid(
                parameter,
                format!(
                    "drives octave {top_octave} to {span} lattice cells, above the limit of {MAX_LATTICE_SPAN}"
                ),
            ));
        }
        Ok(())
    }

    /// Frequency of octave `index`: `base_frequency * lacunarity^index`.
    #[inline]
    pub fn octave_frequency(&self, index: u32) -> f64 {
        self.base_frequency * self.lacunarity.powi(index as i32)
    }

    /// Amplitude of octave `index`: `persistence^index`.
    #[inline]
    pub fn octave_amplitude(&self, index: u32) -> f64 {
        self.persistence.powi(index as i32)
    }
}

//! Seed-reproducible fractal gradient noise.
//!
//! Builds per-octave lattices of random unit gradients and blends them into
//! a continuous 2D scalar field ("Perlin noise") sampled over the unit
//! square. Output is normalized to `[0, 1]` and ready for greyscale
//! quantization.
//!
//! ## Components
//!
//! - [`GradientLattice`]: seeded grid of unit gradients with wraparound lookup
//! - [`NoiseEngine`]: multi-octave sampler over one lattice per octave
//! - [`raster`]: pixel-grid driver producing sample fields and RGBA buffers

// Configuration and errors
pub mod config;
pub mod error;

// Noise core
pub mod engine;
pub mod lattice;

// Sampling driver
pub mod raster;

pub use config::{NoiseConfig, MAX_LATTICE_SPAN};
pub use engine::NoiseEngine;
pub use error::{DomainAxis, NoiseError, Result};
pub use lattice::{GradientLattice, GradientVector};
pub use raster::{pixel_to_domain, quantize, render_rgba, sample_field};

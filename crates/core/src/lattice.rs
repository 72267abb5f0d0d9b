//! Seeded gradient lattice.
//!
//! A square grid of unit-length gradient vectors, one per lattice point,
//! stored row-major. The lattice is fully populated at construction and
//! read-only afterwards, so it can be shared freely between sampling
//! threads.
//!
//! # Generation
//!
//! For each of the `N×N` cells in row-major order one angle θ is drawn
//! uniformly from `[0, 2π)` and the gradient `(cos θ, sin θ)` stored.
//! The stream is ChaCha8, whose output is fixed for a given seed across
//! releases, so identical seed and size reproduce identical gradients in
//! every build.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Unit-length 2D gradient direction.
pub type GradientVector = Vector2<f64>;

/// Square grid of random unit gradients with wraparound lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientLattice {
    /// Side length `N`.
    size: usize,

    /// `N×N` gradients, index = `row * N + col`.
    cells: Vec<GradientVector>,
}

impl GradientLattice {
    /// Build a lattice from a fresh random stream seeded with `seed`.
    ///
    /// `size` must be at least 2; [`NoiseConfig::validate`](crate::NoiseConfig::validate)
    /// enforces this for engine construction.
    #[must_use]
    pub fn new(seed: u64, size: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(&mut rng, size)
    }

    /// Build a lattice by drawing `size * size` angles from `rng`.
    ///
    /// The generator is only borrowed; the lattice keeps no reference to it.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let cells = (0..size * size)
            .map(|_| Self::random_gradient(rng))
            .collect();
        Self { size, cells }
    }

    fn random_gradient<R: Rng + ?Sized>(rng: &mut R) -> GradientVector {
        // random::<f64>() is uniform in [0, 1)
        let angle = rng.random::<f64>() * TAU;
        Vector2::new(angle.cos(), angle.sin())
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All gradients in row-major order.
    #[inline]
    pub fn gradients(&self) -> &[GradientVector] {
        &self.cells
    }

    /// Gradient at `(row mod N, col mod N)`.
    ///
    /// Uses Euclidean remainder so negative indices wrap to the far edge
    /// instead of going out of bounds.
    #[inline]
    pub fn gradient(&self, row: i64, col: i64) -> &GradientVector {
        let n = self.size as i64;
        let r = row.rem_euclid(n) as usize;
        let c = col.rem_euclid(n) as usize;
        &self.cells[r * self.size + c]
    }
}

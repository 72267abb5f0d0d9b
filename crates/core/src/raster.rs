//! Raster sampling driver.
//!
//! Maps integer pixel coordinates onto the engine's unit domain and samples
//! one value per pixel. Rows are sampled in parallel with rayon; the engine
//! is read-only, so the result is identical to a sequential sweep.

use rayon::prelude::*;
use tracing::debug;

use crate::engine::NoiseEngine;
use crate::error::{NoiseError, Result};

/// Bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Map pixel `(px, py)` of a `width × height` image into the unit domain.
///
/// Returns `(px / width, py / height)`, which lies in `[0, 1)` for every
/// pixel inside the image.
#[inline]
pub fn pixel_to_domain(px: u32, py: u32, width: u32, height: u32) -> (f64, f64) {
    (
        f64::from(px) / f64::from(width),
        f64::from(py) / f64::from(height),
    )
}

/// Quantize a `[0, 1]` sample to an 8-bit intensity: `round(value * 255)`.
#[inline]
pub fn quantize(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Sample the engine once per pixel.
///
/// # Returns
///
/// Vector of samples in row-major order (`py * width + px`), each in `[0, 1]`.
/// Empty when either dimension is zero.
///
/// # Errors
///
/// Propagates the first [`NoiseError`] raised by
/// [`NoiseEngine::sample`]. The domain mapping keeps every coordinate in
/// range, so this only happens if that contract is broken.
pub fn sample_field(engine: &NoiseEngine, width: u32, height: u32) -> Result<Vec<f64>> {
    let row_len = width as usize;
    let mut field = vec![0.0; row_len * height as usize];
    if field.is_empty() {
        return Ok(field);
    }

    field
        .par_chunks_mut(row_len)
        .enumerate()
        .try_for_each(|(py, row)| {
            for (px, out) in row.iter_mut().enumerate() {
                let (x, y) = pixel_to_domain(px as u32, py as u32, width, height);
                *out = engine.sample(x, y)?;
            }
            Ok::<(), NoiseError>(())
        })?;

    debug!("Sampled {}x{} noise field", width, height);
    Ok(field)
}

/// Render the engine into an RGBA8 buffer.
///
/// Each pixel's quantized sample is written to the red, green and blue
/// channels with full alpha. The buffer is `width * height * 4` bytes in
/// row-major order, ready for a PNG encoder.
///
/// # Errors
///
/// Same as [`sample_field`].
pub fn render_rgba(engine: &NoiseEngine, width: u32, height: u32) -> Result<Vec<u8>> {
    let field = sample_field(engine, width, height)?;

    let mut pixels = vec![0_u8; field.len() * RGBA_CHANNELS];
    pixels
        .par_chunks_mut(RGBA_CHANNELS)
        .zip(field.par_iter())
        .for_each(|(pixel, &value)| {
            let grey = quantize(value);
            pixel.copy_from_slice(&[grey, grey, grey, u8::MAX]);
        });

    Ok(pixels)
}

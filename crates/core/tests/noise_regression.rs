//! End-to-end sampling regression.
//!
//! Renders the reference 4×4 scenario (seed 100, one octave, base frequency
//! 0.1, 20×20 lattice) and checks it against recorded values, independent
//! constructions, an explicit re-derivation of the interpolation formula,
//! and the 8-bit quantization used for image output.

use approx::assert_abs_diff_eq;
use ctor::ctor;
use tracing_subscriber::EnvFilter;
use znoise_core::{
    pixel_to_domain, quantize, render_rgba, sample_field, GradientLattice, NoiseConfig,
    NoiseEngine,
};

const WIDTH: u32 = 4;
const HEIGHT: u32 = 4;

/// Recorded samples of the reference scenario, row-major.
const RECORDED_GRID: [f64; 16] = [
    0.5,
    0.4239837358756039,
    0.509068333699302,
    0.4980370885828396,
    0.49474278224079643,
    0.4356436916389417,
    0.4331821018794652,
    0.6110323482771409,
    0.5082310646832597,
    0.5278905112863815,
    0.49032711739897705,
    0.6713709661594067,
    0.4656094343042289,
    0.4390840042292966,
    0.5090488840578651,
    0.5411003620937018,
];

/// Recorded 8-bit intensities of the reference scenario, row-major.
const RECORDED_GREY: [u8; 16] = [
    128, 108, 130, 127, //
    126, 111, 110, 156, //
    130, 135, 125, 171, //
    119, 112, 130, 138,
];

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reference_engine() -> NoiseEngine {
    NoiseEngine::construct(100, 1, 1.0, 0.1, 1.0, 20).expect("reference configuration is valid")
}

/// Sequential per-pixel sweep, independent of the parallel driver.
fn sweep(engine: &NoiseEngine) -> Vec<f64> {
    let mut values = Vec::with_capacity((WIDTH * HEIGHT) as usize);
    for py in 0..HEIGHT {
        for px in 0..WIDTH {
            let (x, y) = pixel_to_domain(px, py, WIDTH, HEIGHT);
            values.push(engine.sample(x, y).expect("pixel maps into domain"));
        }
    }
    values
}

/// Direct single-lattice evaluation followed by `(1 + v) / 2` normalization.
fn derive(lattice: &GradientLattice, frequency: f64, x: f64, y: f64) -> f64 {
    let n = lattice.size() as i64;
    let scale = (n - 1) as f64;
    let (sx, sy) = (x * frequency * scale, y * frequency * scale);
    let (x0, y0) = (sx.floor() as i64, sy.floor() as i64);
    let (fx, fy) = (sx - sx.floor(), sy - sy.floor());

    let influence = |cx: i64, cy: i64, dx: f64, dy: f64| {
        let g = lattice.gradients()[(cy.rem_euclid(n) * n + cx.rem_euclid(n)) as usize];
        g.x * dx + g.y * dy
    };
    let fade = |t: f64| 6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3);
    let lerp = |a: f64, b: f64, p: f64| (1.0 - p) * a + p * b;

    let (u, v) = (fade(fx), fade(fy));
    let top = lerp(
        influence(x0, y0, fx, fy),
        influence(x0 + 1, y0, fx - 1.0, fy),
        u,
    );
    let bottom = lerp(
        influence(x0, y0 + 1, fx, fy - 1.0),
        influence(x0 + 1, y0 + 1, fx - 1.0, fy - 1.0),
        u,
    );
    ((1.0 + lerp(top, bottom, v)) / 2.0).clamp(0.0, 1.0)
}

#[test]
fn reference_grid_matches_recorded_values() {
    let values = sweep(&reference_engine());
    for (i, (&actual, &expected)) in values.iter().zip(&RECORDED_GRID).enumerate() {
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
        assert_eq!(quantize(actual), RECORDED_GREY[i], "pixel {i}: {actual}");
    }

    let pixels = render_rgba(&reference_engine(), WIDTH, HEIGHT).expect("in-domain render");
    let grey: Vec<u8> = pixels.chunks(4).map(|pixel| pixel[0]).collect();
    assert_eq!(grey, RECORDED_GREY);
}

#[test]
fn reference_grid_is_reproducible() {
    let first = sweep(&reference_engine());
    let second = sweep(&reference_engine());

    assert_eq!(first.len(), 16);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.to_bits(), b.to_bits(), "{a} vs {b}");
    }

    // Origin is a lattice point: zero influence maps to mid-grey
    assert_eq!(first[0], 0.5);
    assert!(first.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn reference_grid_matches_derivation() {
    let engine = reference_engine();
    let lattice = GradientLattice::new(100, 20);
    assert_eq!(&engine.lattices()[0], &lattice);

    let values = sweep(&engine);
    for py in 0..HEIGHT {
        for px in 0..WIDTH {
            let (x, y) = pixel_to_domain(px, py, WIDTH, HEIGHT);
            let expected = derive(&lattice, 0.1, x, y);
            let actual = values[(py * WIDTH + px) as usize];
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn parallel_driver_matches_sequential_sweep() {
    let engine = reference_engine();
    let field = sample_field(&engine, WIDTH, HEIGHT).expect("in-domain render");
    let values = sweep(&engine);

    for (a, b) in field.iter().zip(&values) {
        assert_eq!(a.to_bits(), b.to_bits());
    }

    let pixels = render_rgba(&engine, WIDTH, HEIGHT).expect("in-domain render");
    for (pixel, &value) in pixels.chunks(4).zip(&values) {
        let grey = (value * 255.0).round() as u8;
        assert_eq!(quantize(value), grey);
        assert_eq!(pixel, [grey, grey, grey, 255]);
    }
}

#[test]
fn reference_config_is_the_default() {
    let engine = NoiseEngine::new(NoiseConfig::default()).expect("default is valid");
    let reference = reference_engine();
    assert_eq!(engine.config(), reference.config());
    assert_eq!(sweep(&engine), sweep(&reference));
}

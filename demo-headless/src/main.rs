use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use image::{ImageFormat, RgbaImage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use znoise_core::{render_rgba, NoiseConfig, NoiseEngine};

/// Render seeded fractal Perlin noise to a greyscale PNG
#[derive(Parser, Debug)]
#[command(name = "znoise")]
#[command(about = "Render seeded fractal Perlin noise to a greyscale PNG", long_about = None)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// JSON noise configuration; flags below override its fields
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lattice seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of octaves
    #[arg(long)]
    octaves: Option<u32>,

    /// Frequency multiplier per octave
    #[arg(long)]
    lacunarity: Option<f64>,

    /// Frequency of the first octave
    #[arg(long)]
    base_frequency: Option<f64>,

    /// Amplitude multiplier per octave, in (0, 1]
    #[arg(long)]
    persistence: Option<f64>,

    /// Gradient lattice side length
    #[arg(long)]
    grid_size: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolve the noise configuration: file (or defaults), then flag overrides.
    fn noise_config(&self) -> Result<NoiseConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => NoiseConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(octaves) = self.octaves {
            config.octaves = octaves;
        }
        if let Some(lacunarity) = self.lacunarity {
            config.lacunarity = lacunarity;
        }
        if let Some(base_frequency) = self.base_frequency {
            config.base_frequency = base_frequency;
        }
        if let Some(persistence) = self.persistence {
            config.persistence = persistence;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<NoiseConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.noise_config()?;
    info!(
        "Noise: seed={}, octaves={}, lacunarity={}, base_frequency={}, persistence={}, grid={}",
        config.seed,
        config.octaves,
        config.lacunarity,
        config.base_frequency,
        config.persistence,
        config.grid_size
    );

    let start = Instant::now();
    let engine = NoiseEngine::new(config)?;
    let pixels = render_rgba(&engine, args.width, args.height)?;

    let img = RgbaImage::from_raw(args.width, args.height, pixels)
        .ok_or("Pixel buffer does not match image dimensions")?;
    img.save_with_format(&args.output, ImageFormat::Png)?;

    info!(
        "Wrote {}x{} image to {} in {:.2}ms",
        args.width,
        args.height,
        args.output.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

//! Renders one fractal view through the progressive engine and writes the
//! final frame as a PPM image.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use fractal_render::core::data::render_settings::{DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS};
use fractal_render::{
    Complex, FileRenderController, PaletteKinds, PaletteOptions, PpmFilePresenter, RenderConfig,
    RenderEngine, RenderRequest, RenderSettings, Viewport, palette_factory,
};

#[derive(Parser, Debug)]
#[command(name = "fractal-render", about = "Render a Mandelbrot or Julia set to a PPM file")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Image width in pixels.
    #[arg(short = 'W', long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels.
    #[arg(short = 'H', long, default_value_t = 600)]
    height: u32,

    /// Complex-plane units per pixel.
    #[arg(short, long, default_value_t = 0.004)]
    scale: f64,

    /// Real part of the view centre.
    #[arg(long, default_value_t = -0.5)]
    center_re: f64,

    /// Imaginary part of the view centre.
    #[arg(long, default_value_t = 0.0)]
    center_im: f64,

    /// Render the Julia set for `--julia-re`/`--julia-im` instead of the Mandelbrot set.
    #[arg(long)]
    julia: bool,

    #[arg(long, default_value_t = DEFAULT_JULIA_CONSTANT.0)]
    julia_re: f64,

    #[arg(long, default_value_t = DEFAULT_JULIA_CONSTANT.1)]
    julia_im: f64,

    /// Iteration limit; points that survive it are drawn black.
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Palette: hue, power-hue or gradient.
    #[arg(short, long, default_value = "hue")]
    palette: PaletteKinds,

    /// Hue cycles across the iteration range (hue and power-hue palettes).
    #[arg(long)]
    hue_factor: Option<f64>,

    /// Power applied to iteration fractions before colouring.
    #[arg(long)]
    exponent: Option<f64>,

    /// Sampling stride of the first pass.
    #[arg(long, default_value_t = 16)]
    initial_level: u32,

    /// Grid rows per worker task.
    #[arg(long, default_value_t = 1)]
    rows_per_unit: usize,

    /// Worker threads (defaults to available parallelism).
    #[arg(short = 't', long)]
    threads: Option<NonZeroUsize>,

    /// Output file path.
    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let palette = palette_factory(
        args.palette,
        PaletteOptions {
            hue_factor: args.hue_factor,
            exponent: args.exponent,
        },
    )
    .context("invalid palette parameters")?;

    let settings = if args.julia {
        RenderSettings::julia(
            Complex::new(args.julia_re, args.julia_im),
            args.max_iterations,
            &palette,
        )
    } else {
        RenderSettings::mandelbrot(args.max_iterations, &palette)
    }
    .context("invalid render settings")?;

    let config = RenderConfig {
        initial_level: args.initial_level,
        rows_per_work_unit: args.rows_per_unit,
        pool_size: args.threads,
    };
    let engine = RenderEngine::new(config).context("failed to start render engine")?;

    info!(
        width = args.width,
        height = args.height,
        fractal = %settings.fractal_kind(),
        palette = %args.palette,
        threads = engine.pool_size(),
        "rendering"
    );

    let request = RenderRequest::new(
        Viewport::new(
            args.width,
            args.height,
            args.scale,
            Complex::new(args.center_re, args.center_im),
        ),
        Arc::new(settings),
    );

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let started = Instant::now();
    let mut controller = FileRenderController::new(engine, PpmFilePresenter::new());
    let outcome = controller.generate(request).context("render failed")?;
    info!(frames = outcome.frames_delivered(), elapsed = ?started.elapsed(), "render finished");

    if !controller.write(&args.output)? {
        anyhow::bail!("nothing to write: the viewport has no pixels");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["fractal-render"]).unwrap();

        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.palette, PaletteKinds::Hue);
        assert_eq!(args.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(!args.julia);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_accept_negative_centre_and_palette_names() {
        let args = Args::try_parse_from([
            "fractal-render",
            "--center-re",
            "-0.745",
            "--center-im",
            "0.11",
            "--palette",
            "power-hue",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.center_re, -0.745);
        assert_eq!(args.palette, PaletteKinds::PowerHue);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_reject_unknown_palette() {
        assert!(Args::try_parse_from(["fractal-render", "--palette", "plasma"]).is_err());
    }
}

//! raster-demo: render the classic rasterization demos to image files.
//!
//! Run: `raster-demo --out-dir out/` (add `--config scene.yaml` for a custom scene)

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trueno_raster::config::{DemoConfig, SceneConfig};
use trueno_raster::fractal::mandelbrot::ComplexSample;
use trueno_raster::geometry::Size;
use trueno_raster::output::{write_canvas, ImageFormat};
use trueno_raster::random::{self, RandomSampler};
use trueno_raster::scene::render_demo;
use trueno_raster::viewer::{MouseButton, ViewerState};

/// Output format override.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Ppm,
    Png,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ppm => Self::Ppm,
            Format::Png => Self::Png,
        }
    }
}

/// raster-demo: scan-conversion rasterization demos
#[derive(Parser, Debug)]
#[command(name = "raster-demo")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Render line, conic, curve and fractal demos to image files", long_about = None)]
struct Cli {
    /// Scene file (YAML); the classic demo set when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving one image per demo
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed for randomized demos (overrides the scene)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Image format (overrides the scene)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Write ASCII samples (P2/P3) instead of raw bytes
    #[arg(long)]
    ascii: bool,

    /// Render only demos of this kind (e.g. `koch`)
    #[arg(long)]
    only: Option<String>,

    /// Zoom Mandelbrot demos onto a window rectangle `left,top,right,bottom`
    /// (repeatable, applied in order)
    #[arg(long, value_parser = parse_rect)]
    zoom: Vec<[i32; 4]>,
}

fn parse_rect(s: &str) -> Result<[i32; 4], String> {
    let values: Vec<i32> = s
        .split(',')
        .map(|v| v.trim().parse::<i32>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<_, _>>()?;
    values.try_into().map_err(|v: Vec<i32>| format!("expected 4 values, got {}", v.len()))
}

fn main() {
    env_logger::init();

    if let Err(e) = run(&Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut scene = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = cli.seed {
        scene.seed = Some(seed);
    }
    if let Some(format) = cli.format {
        scene.output.format = format.into();
    }
    if cli.ascii {
        scene.output.binary = false;
    }
    scene.validate().context("invalid scene")?;

    let demos: Vec<&DemoConfig> = match &cli.only {
        Some(kind) => scene.demos_of_kind(kind).collect(),
        None => scene.demos.iter().collect(),
    };
    if demos.is_empty() {
        bail!("no demo matches {:?}", cli.only.as_deref().unwrap_or_default());
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let mut rng = match scene.seed {
        Some(seed) => random::seeded(seed),
        None => random::from_entropy(),
    };

    // Repeated kinds get a numeric suffix so files don't collide
    let mut seen: Vec<&str> = Vec::new();
    for demo in demos {
        let kind = demo.kind();
        let stem = match seen.iter().filter(|k| **k == kind).count() {
            0 => kind.to_string(),
            n => format!("{kind}_{n}"),
        };
        seen.push(kind);

        let canvas = match demo {
            DemoConfig::Mandelbrot { center, viewport, base_iteration } if !cli.zoom.is_empty() => {
                let mut viewer = ViewerState::with_view(
                    scene.canvas.size(),
                    ComplexSample::new(center[0], center[1]),
                    *viewport,
                    *base_iteration,
                )?;
                zoom(&mut viewer, &cli.zoom)?;
                viewer.canvas().clone()
            }
            _ => render_with(demo, &scene, &mut rng)?,
        };

        let path = write_canvas(
            &canvas,
            &cli.out_dir,
            &stem,
            scene.output.format,
            scene.output.binary,
        )
        .with_context(|| format!("writing {stem}"))?;
        println!("{}", path.display());
    }

    Ok(())
}

fn render_with(
    demo: &DemoConfig,
    scene: &SceneConfig,
    rng: &mut impl RandomSampler,
) -> Result<trueno_raster::canvas::PixelCanvas> {
    render_demo(demo, &scene.canvas, rng).with_context(|| format!("rendering {}", demo.kind()))
}

fn zoom(viewer: &mut ViewerState, rects: &[[i32; 4]]) -> Result<()> {
    let Size { width, height } = viewer.canvas().size();
    for &[left, top, right, bottom] in rects {
        log::info!("zoom {left},{top} -> {right},{bottom} on {width}x{height}");
        viewer.press(MouseButton::Left, left, top);
        viewer.drag(right, bottom);
        viewer.release(MouseButton::Left, right, bottom)?;
    }
    Ok(())
}

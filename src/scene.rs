//! Rendering of configured demos onto fresh canvases.

use crate::canvas::PixelCanvas;
use crate::config::{CanvasConfig, DemoConfig, SceneConfig};
use crate::curves::bezier::BezierSpline;
use crate::curves::koch::draw_koch;
use crate::error::Result;
use crate::fractal::gasket::draw_gasket;
use crate::fractal::mandelbrot::{self, ComplexSample};
use crate::fractal::tree::{grow, grow_random};
use crate::random::RandomSampler;
use crate::render::conic::{draw_circle, draw_ellipse};
use crate::render::line::{draw_line, LineAlgorithm};

/// Render one demo onto a new canvas filled with the background.
///
/// Mandelbrot demos produce a grayscale canvas; every other demo an RGB one.
/// Randomized demos draw from `rng`.
///
/// # Errors
///
/// Fails on an empty canvas, a Bezier spline with the wrong number of
/// control points, or a degenerate Mandelbrot viewport.
pub fn render_demo(
    demo: &DemoConfig,
    canvas_config: &CanvasConfig,
    rng: &mut impl RandomSampler,
) -> Result<PixelCanvas> {
    let size = canvas_config.size();
    log::debug!("rendering {} on {}x{}", demo.kind(), size.width, size.height);

    if let DemoConfig::Mandelbrot { center, viewport, base_iteration } = demo {
        let mut canvas = PixelCanvas::grayscale(size)?;
        let center = ComplexSample::new(center[0], center[1]);
        mandelbrot::render(&mut canvas, center, *viewport, *base_iteration)?;
        return Ok(canvas);
    }

    let mut canvas = PixelCanvas::filled(size, canvas_config.background)?;
    match demo {
        DemoConfig::DdaLine { lines } | DemoConfig::BresenhamLine { lines } => {
            let algorithm = if matches!(demo, DemoConfig::DdaLine { .. }) {
                LineAlgorithm::Dda
            } else {
                LineAlgorithm::Bresenham
            };
            for line in lines {
                draw_line(&mut canvas, line.start, line.end, algorithm, line.style, line.color);
            }
        }
        DemoConfig::Circle { circles } => {
            for circle in circles {
                draw_circle(&mut canvas, circle.center, circle.radius, circle.color);
            }
        }
        DemoConfig::Ellipse { ellipses } => {
            for ellipse in ellipses {
                let [rx, ry] = ellipse.radius;
                draw_ellipse(&mut canvas, ellipse.center, rx, ry, ellipse.tilt, ellipse.color);
            }
        }
        DemoConfig::Bezier { control_points, steps, color } => {
            BezierSpline::new(control_points.clone())?.draw(&mut canvas, *steps, *color);
        }
        DemoConfig::Koch { vertices: [p1, p2, p3], depth, color } => {
            draw_koch(&mut canvas, *p1, *p2, *p3, *depth, *color);
        }
        DemoConfig::Tree { start, end, decrease_rate, angle, depth, color } => {
            grow(&mut canvas, *start, *end, *decrease_rate, *angle, *depth, *color);
        }
        DemoConfig::RandomTree { start, end, depth, color } => {
            grow_random(&mut canvas, *start, *end, *depth, rng, *color);
        }
        DemoConfig::Gasket { anchors, iterations, color } => {
            draw_gasket(&mut canvas, *anchors, *iterations, rng, *color);
        }
        DemoConfig::Mandelbrot { .. } => {}
    }

    log::debug!("rendered {}", demo.kind());
    Ok(canvas)
}

/// Render every demo of a scene in order, paired with its kind.
///
/// # Errors
///
/// Validates the scene first and stops at the first failing demo.
pub fn render_scene(
    scene: &SceneConfig,
    rng: &mut impl RandomSampler,
) -> Result<Vec<(&'static str, PixelCanvas)>> {
    scene.validate()?;
    scene
        .demos
        .iter()
        .map(|demo| Ok((demo.kind(), render_demo(demo, &scene.canvas, &mut *rng)?)))
        .collect()
}

//! Scene configuration.
//!
//! A scene is a YAML document naming the canvas, the output format, an
//! optional RNG seed and the list of demos to render. Every field has a
//! default, and the default scene is the classic demo set.
//!
//! ```yaml
//! canvas:
//!   width: 500
//!   height: 500
//!   background: [255, 255, 255]
//! seed: 42
//! output:
//!   format: ppm
//!   binary: true
//! demos:
//!   - kind: circle
//!     circles:
//!       - { center: [150, 150], radius: 100, color: [255, 0, 0] }
//!   - kind: koch
//!     depth: 4
//! ```

use crate::color::Rgb;
use crate::curves::bezier::{MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};
use crate::error::{Error, Result};
use crate::fractal::mandelbrot::{Viewport, DEFAULT_BASE_ITERATION};
use crate::geometry::{Point, Size};
use crate::output::ImageFormat;
use crate::render::line::LineStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest accepted Koch subdivision.
pub const MAX_KOCH_DEPTH: u32 = 8;
/// Deepest accepted tree recursion.
pub const MAX_TREE_DEPTH: u32 = 16;

/// Canvas extent and background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_extent")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_extent")]
    pub height: u32,
    /// Fill color before drawing.
    #[serde(default = "default_background")]
    pub background: Rgb,
}

fn default_extent() -> u32 {
    500
}
fn default_background() -> Rgb {
    Rgb::WHITE
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_extent(), height: default_extent(), background: default_background() }
    }
}

impl CanvasConfig {
    /// Canvas extent.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Image output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File format.
    #[serde(default)]
    pub format: ImageFormat,
    /// Raw samples (`P5`/`P6`) rather than ASCII (`P2`/`P3`).
    #[serde(default = "default_binary")]
    pub binary: bool,
}

fn default_binary() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: ImageFormat::default(), binary: default_binary() }
    }
}

/// One styled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Line color.
    #[serde(default)]
    pub color: Rgb,
    /// Stippling pattern.
    #[serde(default)]
    pub style: LineStyle,
}

/// One circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSpec {
    /// Centre.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
    /// Outline color.
    #[serde(default)]
    pub color: Rgb,
}

/// One tilted ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseSpec {
    /// Centre.
    pub center: Point,
    /// Semi-axes `[x, y]` before rotation.
    pub radius: [i32; 2],
    /// Rotation in degrees.
    #[serde(default)]
    pub tilt: f64,
    /// Outline color.
    #[serde(default)]
    pub color: Rgb,
}

/// A single demo and its parameters, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoConfig {
    /// Lines drawn with DDA stepping.
    DdaLine {
        /// Lines to draw.
        #[serde(default = "classic_dda_lines")]
        lines: Vec<LineSpec>,
    },
    /// Lines drawn with Bresenham stepping.
    BresenhamLine {
        /// Lines to draw.
        #[serde(default = "classic_bresenham_lines")]
        lines: Vec<LineSpec>,
    },
    /// Midpoint circles.
    Circle {
        /// Circles to draw.
        #[serde(default = "classic_circles")]
        circles: Vec<CircleSpec>,
    },
    /// Rotated midpoint ellipses.
    Ellipse {
        /// Ellipses to draw.
        #[serde(default = "classic_ellipses")]
        ellipses: Vec<EllipseSpec>,
    },
    /// A Bezier spline.
    Bezier {
        /// Four to nine control points.
        #[serde(default = "classic_bezier_points")]
        control_points: Vec<Point>,
        /// Parameter subdivisions.
        #[serde(default = "default_bezier_steps")]
        steps: u32,
        /// Curve color.
        #[serde(default)]
        color: Rgb,
    },
    /// A Koch curve on a triangle.
    Koch {
        /// Triangle seeding the curve.
        #[serde(default = "classic_koch_vertices")]
        vertices: [Point; 3],
        /// Subdivision depth.
        #[serde(default = "default_koch_depth")]
        depth: u32,
        /// Curve color.
        #[serde(default)]
        color: Rgb,
    },
    /// A deterministic binary tree.
    Tree {
        /// Trunk base.
        #[serde(default = "classic_tree_root")]
        start: Point,
        /// Trunk tip.
        #[serde(default = "classic_tree_tip")]
        end: Point,
        /// Fraction of parent length kept by each child.
        #[serde(default = "default_decrease_rate")]
        decrease_rate: f64,
        /// Branch angle in degrees.
        #[serde(default = "default_tree_angle")]
        angle: f64,
        /// Recursion depth.
        #[serde(default = "default_tree_depth")]
        depth: u32,
        /// Branch color.
        #[serde(default)]
        color: Rgb,
    },
    /// A randomized binary tree.
    RandomTree {
        /// Trunk base.
        #[serde(default = "classic_tree_root")]
        start: Point,
        /// Trunk tip.
        #[serde(default = "classic_tree_tip")]
        end: Point,
        /// Recursion depth.
        #[serde(default = "default_tree_depth")]
        depth: u32,
        /// Branch color.
        #[serde(default)]
        color: Rgb,
    },
    /// Chaos-game Sierpinski gasket.
    Gasket {
        /// Triangle vertices.
        #[serde(default = "classic_gasket_anchors")]
        anchors: [Point; 3],
        /// Chaos-game steps.
        #[serde(default = "default_gasket_iterations")]
        iterations: usize,
        /// Point color.
        #[serde(default)]
        color: Rgb,
    },
    /// Mandelbrot escape-time field, rendered in grayscale.
    Mandelbrot {
        /// Window centre `[re, im]`.
        #[serde(default = "default_mandelbrot_center")]
        center: [f64; 2],
        /// Window extent.
        #[serde(default)]
        viewport: Viewport,
        /// Iteration budget before zoom correction. The corrected budget is
        /// capped at [`MAX_ITERATION_BUDGET`](crate::fractal::mandelbrot::MAX_ITERATION_BUDGET).
        #[serde(default = "default_base_iteration")]
        base_iteration: u32,
    },
}

fn line(start: (i32, i32), end: (i32, i32), color: Rgb, style: LineStyle) -> LineSpec {
    LineSpec { start: start.into(), end: end.into(), color, style }
}

fn classic_dda_lines() -> Vec<LineSpec> {
    vec![
        line((50, 50), (250, 250), Rgb::BLACK, LineStyle::Solid),
        line((400, 300), (0, 0), Rgb::RED, LineStyle::Solid),
        line((200, 100), (250, 250), Rgb::GREEN, LineStyle::Dashed),
        line((475, 475), (125, 250), Rgb::BLUE, LineStyle::Dotted),
    ]
}

fn classic_bresenham_lines() -> Vec<LineSpec> {
    vec![
        line((50, 50), (250, 250), Rgb::BLACK, LineStyle::Solid),
        line((200, 150), (450, 15), Rgb::RED, LineStyle::Solid),
        line((25, 100), (300, 250), Rgb::GREEN, LineStyle::Dashed),
        line((450, 550), (125, 250), Rgb::BLUE, LineStyle::Dotted),
    ]
}

fn classic_circles() -> Vec<CircleSpec> {
    vec![
        CircleSpec { center: Point::new(150, 150), radius: 100, color: Rgb::RED },
        CircleSpec { center: Point::new(300, 250), radius: 200, color: Rgb::GREEN },
        CircleSpec { center: Point::new(125, 225), radius: 150, color: Rgb::BLUE },
    ]
}

fn classic_ellipses() -> Vec<EllipseSpec> {
    vec![
        EllipseSpec { center: Point::new(150, 150), radius: [100, 200], tilt: 0.0, color: Rgb::RED },
        EllipseSpec { center: Point::new(300, 250), radius: [50, 150], tilt: 75.0, color: Rgb::GREEN },
        EllipseSpec { center: Point::new(125, 225), radius: [175, 150], tilt: 120.0, color: Rgb::BLUE },
    ]
}

fn classic_bezier_points() -> Vec<Point> {
    vec![
        Point::new(50, 400),
        Point::new(120, 60),
        Point::new(250, 450),
        Point::new(380, 60),
        Point::new(450, 400),
    ]
}

fn default_bezier_steps() -> u32 {
    crate::curves::bezier::DEFAULT_STEPS
}

fn classic_koch_vertices() -> [Point; 3] {
    [Point::new(100, 100), Point::new(400, 100), Point::new(250, 400)]
}

fn default_koch_depth() -> u32 {
    3
}

fn classic_tree_root() -> Point {
    Point::new(250, 400)
}

fn classic_tree_tip() -> Point {
    Point::new(250, 250)
}

fn default_decrease_rate() -> f64 {
    0.6
}

fn default_tree_angle() -> f64 {
    45.0
}

fn default_tree_depth() -> u32 {
    10
}

fn classic_gasket_anchors() -> [Point; 3] {
    [Point::new(250, 100), Point::new(100, 400), Point::new(400, 400)]
}

fn default_gasket_iterations() -> usize {
    100_000
}

fn default_mandelbrot_center() -> [f64; 2] {
    [-0.5, 0.0]
}

fn default_base_iteration() -> u32 {
    DEFAULT_BASE_ITERATION
}

impl DemoConfig {
    /// Snake-case name of the demo kind, as written in `kind:`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DdaLine { .. } => "dda_line",
            Self::BresenhamLine { .. } => "bresenham_line",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Bezier { .. } => "bezier",
            Self::Koch { .. } => "koch",
            Self::Tree { .. } => "tree",
            Self::RandomTree { .. } => "random_tree",
            Self::Gasket { .. } => "gasket",
            Self::Mandelbrot { .. } => "mandelbrot",
        }
    }

    /// The classic demo set, one of each kind.
    #[must_use]
    pub fn classic() -> Vec<Self> {
        let color = Rgb::BLACK;
        vec![
            Self::DdaLine { lines: classic_dda_lines() },
            Self::BresenhamLine { lines: classic_bresenham_lines() },
            Self::Circle { circles: classic_circles() },
            Self::Ellipse { ellipses: classic_ellipses() },
            Self::Bezier { control_points: classic_bezier_points(), steps: default_bezier_steps(), color },
            Self::Koch { vertices: classic_koch_vertices(), depth: default_koch_depth(), color },
            Self::Tree {
                start: classic_tree_root(),
                end: classic_tree_tip(),
                decrease_rate: default_decrease_rate(),
                angle: default_tree_angle(),
                depth: default_tree_depth(),
                color,
            },
            Self::RandomTree {
                start: classic_tree_root(),
                end: classic_tree_tip(),
                depth: default_tree_depth(),
                color,
            },
            Self::Gasket {
                anchors: classic_gasket_anchors(),
                iterations: default_gasket_iterations(),
                color,
            },
            Self::Mandelbrot {
                center: default_mandelbrot_center(),
                viewport: Viewport::default(),
                base_iteration: default_base_iteration(),
            },
        ]
    }

    /// Check parameter ranges against `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlPointCount`] for a Bezier spline with the
    /// wrong number of points and [`Error::InvalidParameter`] for other
    /// out-of-range values.
    pub fn validate(&self, canvas: Size) -> Result<()> {
        match self {
            Self::Bezier { control_points, .. } => {
                let count = control_points.len();
                if !(MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS).contains(&count) {
                    return Err(Error::ControlPointCount {
                        count,
                        min: MIN_CONTROL_POINTS,
                        max: MAX_CONTROL_POINTS,
                    });
                }
                if let Some(p) = control_points.iter().find(|p| !canvas.contains(**p)) {
                    return Err(invalid(format!("bezier control point {p:?} is off-canvas")));
                }
            }
            Self::Koch { depth, .. } if *depth > MAX_KOCH_DEPTH => {
                return Err(invalid(format!("koch depth {depth} exceeds {MAX_KOCH_DEPTH}")));
            }
            Self::Tree { depth, .. } | Self::RandomTree { depth, .. } if *depth > MAX_TREE_DEPTH => {
                return Err(invalid(format!("tree depth {depth} exceeds {MAX_TREE_DEPTH}")));
            }
            Self::Tree { decrease_rate, .. } if !(0.0..=1.0).contains(decrease_rate) => {
                return Err(invalid(format!("decrease rate {decrease_rate} outside [0, 1]")));
            }
            Self::Circle { circles } => {
                if let Some(c) = circles.iter().find(|c| c.radius < 0) {
                    return Err(invalid(format!("negative circle radius {}", c.radius)));
                }
            }
            Self::Ellipse { ellipses } => {
                if let Some(e) = ellipses.iter().find(|e| e.radius[0] < 0 || e.radius[1] < 0) {
                    return Err(invalid(format!("negative ellipse radius {:?}", e.radius)));
                }
            }
            Self::Mandelbrot { center, viewport, .. } => {
                viewport.validate()?;
                if !center.iter().all(|v| v.is_finite()) {
                    return Err(invalid(format!("mandelbrot centre {center:?} is not finite")));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidParameter(message)
}

/// A full scene: canvas, output options, seed and demos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Canvas extent and background.
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Seed for randomized demos; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
    /// Demos to render, in order.
    #[serde(default = "DemoConfig::classic")]
    pub demos: Vec<DemoConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            seed: None,
            output: OutputConfig::default(),
            demos: DemoConfig::classic(),
        }
    }
}

impl SceneConfig {
    /// Creates a scene with the classic demo set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::Config { line, message: e.to_string() }
        })
    }

    /// Loads a scene with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::Config { line: 0, message: e.to_string() })
    }

    /// Check the canvas and every demo.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let size = self.canvas.size();
        if size.is_empty() {
            return Err(Error::InvalidDimensions { width: size.width, height: size.height });
        }
        self.demos.iter().try_for_each(|demo| demo.validate(size))
    }

    /// Demos whose kind equals `kind`.
    pub fn demos_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DemoConfig> + 'a {
        self.demos.iter().filter(move |demo| demo.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SceneConfig::new();

        assert_eq!(config.canvas.size(), Size::new(500, 500));
        assert_eq!(config.canvas.background, Rgb::WHITE);
        assert_eq!(config.output.format, ImageFormat::Ppm);
        assert!(config.output.binary);
        assert_eq!(config.demos.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = SceneConfig::parse("seed: 7").unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.demos, DemoConfig::classic());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
canvas:
  width: 320
  height: 200
  background: [0, 0, 0]
output:
  format: png
demos:
  - kind: circle
    circles:
      - { center: [160, 100], radius: 50, color: [255, 255, 0] }
  - kind: koch
    depth: 2
  - kind: dda_line
    lines:
      - { start: [0, 0], end: [319, 199], style: dashed }
  - kind: mandelbrot
    center: [-0.75, 0.1]
    viewport: { width: 0.5, height: 0.5 }
"#;

        let config = SceneConfig::parse(yaml).unwrap();

        assert_eq!(config.canvas.size(), Size::new(320, 200));
        assert_eq!(config.canvas.background, Rgb::BLACK);
        assert_eq!(config.output.format, ImageFormat::Png);
        assert!(config.output.binary);
        assert_eq!(config.demos.len(), 4);

        assert_eq!(
            config.demos[0],
            DemoConfig::Circle {
                circles: vec![CircleSpec {
                    center: Point::new(160, 100),
                    radius: 50,
                    color: Rgb::new(255, 255, 0),
                }]
            }
        );
        let DemoConfig::Koch { vertices, depth, .. } = &config.demos[1] else {
            panic!("expected koch");
        };
        assert_eq!(*depth, 2);
        assert_eq!(*vertices, classic_koch_vertices());

        let DemoConfig::DdaLine { lines } = &config.demos[2] else {
            panic!("expected dda_line");
        };
        assert_eq!(lines[0].style, LineStyle::Dashed);
        assert_eq!(lines[0].color, Rgb::BLACK);

        let DemoConfig::Mandelbrot { viewport, base_iteration, .. } = &config.demos[3] else {
            panic!("expected mandelbrot");
        };
        assert_eq!(*viewport, Viewport::new(0.5, 0.5));
        assert_eq!(*base_iteration, DEFAULT_BASE_ITERATION);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
canvas:
  width: 100
  height: not_a_number
"#;

        let err = SceneConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { line: 4, .. }), "{err:?}");
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_unknown_kind() {
        let err = SceneConfig::parse("demos:\n  - kind: spiral\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = SceneConfig::load_or_default("/nonexistent/path");
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_config_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "seed: 99\ndemos:\n  - kind: gasket\n    iterations: 10\n").unwrap();

        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.demos.len(), 1);
        assert_eq!(config.demos[0].kind(), "gasket");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SceneConfig::default();
        let reparsed = SceneConfig::parse(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_validate_bezier_count() {
        let mut config = SceneConfig::default();
        config.demos = vec![DemoConfig::Bezier {
            control_points: vec![Point::new(1, 1); 3],
            steps: 10,
            color: Rgb::BLACK,
        }];
        assert!(matches!(config.validate(), Err(Error::ControlPointCount { count: 3, .. })));
    }

    #[test]
    fn test_validate_bezier_off_canvas() {
        let demo = DemoConfig::Bezier {
            control_points: vec![Point::new(1, 1), Point::new(2, 2), Point::new(3, 3), Point::new(600, 3)],
            steps: 10,
            color: Rgb::BLACK,
        };
        assert!(matches!(demo.validate(Size::new(500, 500)), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_limits() {
        let size = Size::new(100, 100);
        let koch = DemoConfig::Koch { vertices: classic_koch_vertices(), depth: 9, color: Rgb::BLACK };
        assert!(koch.validate(size).is_err());

        let tree = DemoConfig::RandomTree {
            start: Point::ORIGIN,
            end: Point::new(0, 10),
            depth: 17,
            color: Rgb::BLACK,
        };
        assert!(tree.validate(size).is_err());

        let mandelbrot = DemoConfig::Mandelbrot {
            center: [0.0, 0.0],
            viewport: Viewport::new(-1.0, 1.0),
            base_iteration: 10,
        };
        assert!(mandelbrot.validate(size).is_err());

        let mut config = SceneConfig::default();
        config.canvas.width = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_demos_of_kind() {
        let config = SceneConfig::default();
        assert_eq!(config.demos_of_kind("tree").count(), 1);
        assert_eq!(config.demos_of_kind("spiral").count(), 0);
    }
}

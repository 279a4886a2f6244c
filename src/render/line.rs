//! Incremental line rasterization.
//!
//! Two interchangeable algorithms trace the same visual line:
//!
//! - **DDA** steps in floating point along the major axis and rounds each
//!   sample to the nearest pixel.
//! - **Bresenham** (midpoint) stays in integers, carrying an error term that
//!   decides when the minor axis advances.
//!
//! Both produce a step sequence that a [`LineStyle`] filters by index, so
//! dashes and dots never change the geometry.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::{Point, PolylinePath};
use serde::{Deserialize, Serialize};

const SOLID_MASK: [bool; 8] = [true, true, true, true, true, true, true, true];
const DASHED_MASK: [bool; 8] = [true, true, true, true, false, false, false, false];
const DOTTED_MASK: [bool; 8] = [true, false, true, false, true, false, true, false];

/// Stippling pattern applied to the step index along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Every pixel.
    #[default]
    Solid,
    /// Four on, four off.
    Dashed,
    /// Alternating on and off.
    Dotted,
}

impl LineStyle {
    /// The repeating 8-step mask.
    #[must_use]
    pub const fn mask(self) -> &'static [bool; 8] {
        match self {
            Self::Solid => &SOLID_MASK,
            Self::Dashed => &DASHED_MASK,
            Self::Dotted => &DOTTED_MASK,
        }
    }

    /// Whether the pixel at step `index` is written.
    #[inline]
    #[must_use]
    pub const fn is_drawn(self, index: usize) -> bool {
        self.mask()[index % 8]
    }
}

/// Which incremental algorithm traces a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlgorithm {
    /// Floating-point digital differential analyzer.
    #[default]
    Dda,
    /// Integer midpoint algorithm.
    Bresenham,
}

impl LineAlgorithm {
    /// Step sequence from `start` to `end` inclusive.
    #[must_use]
    pub fn steps(self, start: Point, end: Point) -> LineSteps {
        match self {
            Self::Dda => LineSteps::Dda(DdaSteps::new(start, end)),
            Self::Bresenham => LineSteps::Bresenham(BresenhamSteps::new(start, end)),
        }
    }
}

/// Either algorithm's step iterator.
#[derive(Debug, Clone)]
pub enum LineSteps {
    /// DDA steps.
    Dda(DdaSteps),
    /// Bresenham steps.
    Bresenham(BresenhamSteps),
}

impl Iterator for LineSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Self::Dda(steps) => steps.next(),
            Self::Bresenham(steps) => steps.next(),
        }
    }
}

// ============================================================================
// DDA
// ============================================================================

/// DDA step sequence: exactly `max(|dx|, |dy|) + 1` samples.
#[derive(Debug, Clone)]
pub struct DdaSteps {
    x: f64,
    y: f64,
    increase_x: f64,
    increase_y: f64,
    remaining: u64,
}

impl DdaSteps {
    /// Start a DDA trace. A zero-length line yields its single pixel.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let step = dx.unsigned_abs().max(dy.unsigned_abs());

        let (increase_x, increase_y) = if step == 0 {
            (0.0, 0.0)
        } else {
            (dx as f64 / step as f64, dy as f64 / step as f64)
        };

        Self {
            x: f64::from(start.x),
            y: f64::from(start.y),
            increase_x,
            increase_y,
            remaining: step + 1,
        }
    }
}

impl Iterator for DdaSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = Point::from_f64(self.x, self.y);
        self.x += self.increase_x;
        self.y += self.increase_y;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaSteps {}

// ============================================================================
// Bresenham
// ============================================================================

/// Bresenham step sequence, always walking the major axis upward.
///
/// Endpoints are swapped when the major coordinate would decrease. The
/// minor-axis direction is taken from the original endpoint order so the
/// swap never flips the diagonal.
#[derive(Debug, Clone)]
pub struct BresenhamSteps {
    /// Current position along (major, minor).
    major: i64,
    minor: i64,
    major_end: i64,
    discriminant: i64,
    /// Added when the minor axis holds.
    hold_delta: i64,
    /// Added when the minor axis steps.
    step_delta: i64,
    direction: i64,
    x_major: bool,
}

impl BresenhamSteps {
    /// Start a Bresenham trace.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let (sx, sy, ex, ey) = (
            i64::from(start.x),
            i64::from(start.y),
            i64::from(end.x),
            i64::from(end.y),
        );
        let dx = (ex - sx).abs();
        let dy = (ey - sy).abs();
        let x_major = dx > dy;

        // Project onto (major, minor) so one code path serves both octant groups.
        let (s_major, s_minor, e_major, e_minor, d_major, d_minor) = if x_major {
            (sx, sy, ex, ey, dx, dy)
        } else {
            (sy, sx, ey, ex, dy, dx)
        };

        let (from, to, direction) = if s_major > e_major {
            let direction = if s_minor > e_minor { 1 } else { -1 };
            ((e_major, e_minor), (s_major, s_minor), direction)
        } else {
            let direction = if s_minor < e_minor { 1 } else { -1 };
            ((s_major, s_minor), (e_major, e_minor), direction)
        };

        Self {
            major: from.0,
            minor: from.1,
            major_end: to.0,
            discriminant: 2 * d_minor - d_major,
            hold_delta: 2 * d_minor,
            step_delta: 2 * (d_minor - d_major),
            direction,
            x_major,
        }
    }

    /// Current decision variable.
    #[must_use]
    pub const fn discriminant(&self) -> i64 {
        self.discriminant
    }
}

impl Iterator for BresenhamSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.major > self.major_end {
            return None;
        }

        // Both coordinates stay between the endpoints, so they fit in i32.
        let point = if self.x_major {
            Point::new(self.major as i32, self.minor as i32)
        } else {
            Point::new(self.minor as i32, self.major as i32)
        };

        self.major += 1;
        if self.discriminant < 0 {
            self.discriminant += self.hold_delta;
        } else {
            self.minor += self.direction;
            self.discriminant += self.step_delta;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.major_end - self.major + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamSteps {}

// ============================================================================
// Drawing
// ============================================================================

/// Write every style-selected pixel of a step sequence.
///
/// Returns the number of pixels that landed on the canvas.
pub fn draw_steps<I>(canvas: &mut PixelCanvas, steps: I, style: LineStyle, color: Rgb) -> usize
where
    I: IntoIterator<Item = Point>,
{
    steps
        .into_iter()
        .enumerate()
        .filter(|(index, _)| style.is_drawn(*index))
        .filter(|(_, point)| canvas.set_pixel(*point, color))
        .count()
}

/// Draw a line with the DDA algorithm.
pub fn draw_dda_line(canvas: &mut PixelCanvas, start: Point, end: Point, style: LineStyle, color: Rgb) {
    draw_steps(canvas, DdaSteps::new(start, end), style, color);
}

/// Draw a line with the Bresenham algorithm.
pub fn draw_bresenham_line(
    canvas: &mut PixelCanvas,
    start: Point,
    end: Point,
    style: LineStyle,
    color: Rgb,
) {
    draw_steps(canvas, BresenhamSteps::new(start, end), style, color);
}

/// Draw a line with the chosen algorithm.
pub fn draw_line(
    canvas: &mut PixelCanvas,
    start: Point,
    end: Point,
    algorithm: LineAlgorithm,
    style: LineStyle,
    color: Rgb,
) {
    draw_steps(canvas, algorithm.steps(start, end), style, color);
}

/// Draw each consecutive segment of a path. The style index restarts per segment.
pub fn draw_polyline(
    canvas: &mut PixelCanvas,
    path: &PolylinePath,
    algorithm: LineAlgorithm,
    style: LineStyle,
    color: Rgb,
) {
    for (start, end) in path.segments() {
        draw_line(canvas, start, end, algorithm, style, color);
    }
}

//! Geometric primitives for rasterization.
//!
//! All coordinates are integer pixel positions. Operations that go through
//! floating point (rotation, interpolation) round to nearest with the
//! `floor(v + 0.5)` convention used by every rasterizer in this crate.

use serde::{Deserialize, Serialize};

/// Round to nearest pixel, halves toward positive infinity.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downward).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a real-valued position to the nearest pixel.
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(round_half_up(x), round_half_up(y))
    }

    /// Offset by a wide displacement, saturating at the `i32` range.
    ///
    /// Saturated points are far off any canvas, so clipping still drops them.
    #[must_use]
    pub fn saturating_offset(self, dx: i64, dy: i64) -> Self {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Self::new(
            clamp(i64::from(self.x).saturating_add(dx)),
            clamp(i64::from(self.y).saturating_add(dy)),
        )
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Rotate this point around `pivot` by `radians`, rounded to a pixel.
    ///
    /// Positive angles turn from +x toward +y, which on a canvas whose rows
    /// grow downward is clockwise on screen.
    #[must_use]
    pub fn rotate_about(self, pivot: Self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let dx = f64::from(self.x - pivot.x);
        let dy = f64::from(self.y - pivot.y);
        Self::from_f64(
            dx * cos - dy * sin + f64::from(pivot.x),
            dx * sin + dy * cos + f64::from(pivot.y),
        )
    }

    /// Point at fraction `t` of the way to `other`, truncated toward zero.
    #[must_use]
    pub fn lerp_truncated(self, other: Self, t: f64) -> Self {
        Self::new(
            (f64::from(self.x) + f64::from(other.x - self.x) * t) as i32,
            (f64::from(self.y) + f64::from(other.y - self.y) * t) as i32,
        )
    }

    /// Point at fraction `t` of the way to `other`, rounded to nearest.
    #[must_use]
    pub fn lerp_rounded(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + round_half_up(f64::from(other.x - self.x) * t),
            self.y + round_half_up(f64::from(other.y - self.y) * t),
        )
    }

    /// Midpoint between two points, rounded to nearest.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::from_f64(
            f64::from(self.x + other.x) / 2.0,
            f64::from(self.y + other.y) / 2.0,
        )
    }
}

impl From<[i32; 2]> for Point {
    fn from(arr: [i32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Canvas extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either extent is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    #[must_use]
    pub const fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether a point lies in `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

/// Axis-aligned rectangle given by its edges, as dragged in window space.
///
/// Edges are not normalized: `left` may exceed `right` when the drag
/// went leftward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Edge where the drag started horizontally.
    pub left: i32,
    /// Edge where the drag started vertically.
    pub top: i32,
    /// Edge following the pointer horizontally.
    pub right: i32,
    /// Edge following the pointer vertically.
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Absolute horizontal extent.
    #[must_use]
    pub const fn width(&self) -> i32 {
        (self.right - self.left).abs()
    }

    /// Absolute vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        (self.bottom - self.top).abs()
    }

    /// The larger of the two extents.
    #[must_use]
    pub fn major_axis(&self) -> i32 {
        self.width().max(self.height())
    }

    /// Centre in window coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.left + self.right) / 2.0,
            f64::from(self.top + self.bottom) / 2.0,
        )
    }
}

/// Ordered sequence of points joined by straight segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolylinePath {
    points: Vec<Point>,
}

impl PolylinePath {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether the last point coincides with the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

impl From<Vec<Point>> for PolylinePath {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PolylinePath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

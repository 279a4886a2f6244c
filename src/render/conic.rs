//! Midpoint circle and ellipse rasterization.
//!
//! Both algorithms walk one octant/quadrant with an integer decision
//! variable and mirror each computed point. The ellipse additionally
//! rotates every mirrored point by its tilt; reflection and rotation do not
//! commute, so each of the four reflections is rotated on its own.
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *CACM* 20(2).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   *IEEE CG&A* 4(9).

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::{round_half_up, Point, Size};
use crate::render::line::BresenhamSteps;

/// Pixel slack between a conic's true radius and its rasterized points.
const RING_SLACK: f64 = 2.0;

/// Whether an outline whose pixels all lie between `inner` and `outer` from
/// `center` cannot touch the canvas.
///
/// True when the canvas sits wholly inside the inner radius or wholly beyond
/// the outer one. Either way the walk would only produce clipped pixels.
fn ring_misses_canvas(size: Size, center: Point, inner: f64, outer: f64) -> bool {
    if size.is_empty() {
        return true;
    }
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));
    let (right, bottom) = (f64::from(size.width - 1), f64::from(size.height - 1));

    let near_x = (-cx).max(cx - right).max(0.0);
    let near_y = (-cy).max(cy - bottom).max(0.0);
    let nearest = near_x.hypot(near_y);

    let far_x = cx.abs().max((cx - right).abs());
    let far_y = cy.abs().max((cy - bottom).abs());
    let farthest = far_x.hypot(far_y);

    nearest > outer + RING_SLACK || farthest < inner - RING_SLACK
}

// ============================================================================
// Circle
// ============================================================================

/// Midpoint circle walk, yielding the eight reflections of each octant step.
///
/// State is a handful of `i64` terms, so any non-negative `i32` radius walks
/// in constant memory.
#[derive(Debug, Clone)]
pub struct CircleSteps {
    center: Point,
    x: i64,
    y: i64,
    discriminant: i64,
    pending: [Point; 8],
    next_pending: usize,
}

impl CircleSteps {
    /// Start a circle walk. A negative radius yields nothing.
    #[must_use]
    pub fn new(center: Point, radius: i32) -> Self {
        let radius = i64::from(radius);
        let (x, y) = if radius < 0 { (1, 0) } else { (0, radius) };
        Self {
            center,
            x,
            y,
            discriminant: 1 - radius,
            pending: [center; 8],
            next_pending: 8,
        }
    }
}

impl Iterator for CircleSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next_pending < 8 {
            self.next_pending += 1;
            return Some(self.pending[self.next_pending - 1]);
        }
        if self.x > self.y {
            return None;
        }

        let (c, x, y) = (self.center, self.x, self.y);
        self.pending = [
            c.saturating_offset(x, y),
            c.saturating_offset(x, -y),
            c.saturating_offset(-x, y),
            c.saturating_offset(-x, -y),
            c.saturating_offset(y, x),
            c.saturating_offset(y, -x),
            c.saturating_offset(-y, x),
            c.saturating_offset(-y, -x),
        ];

        self.x += 1;
        if self.discriminant < 0 {
            self.discriminant += 2 * self.x + 1;
        } else {
            self.y -= 1;
            self.discriminant += 2 * (self.x - self.y) + 1;
        }

        self.next_pending = 1;
        Some(self.pending[0])
    }
}

/// Pixels of a circle outline, eight per octant step.
///
/// Points on the octant boundaries appear more than once. A negative radius
/// yields nothing; radius zero yields the centre.
#[must_use]
pub fn circle_points(center: Point, radius: i32) -> Vec<Point> {
    CircleSteps::new(center, radius).collect()
}

/// Draw a circle outline with the midpoint algorithm.
///
/// Pixels are written during the walk. Circles whose ring cannot cross the
/// canvas are skipped outright.
pub fn draw_circle(canvas: &mut PixelCanvas, center: Point, radius: i32, color: Rgb) {
    let r = f64::from(radius);
    if radius < 0 || ring_misses_canvas(canvas.size(), center, r, r) {
        return;
    }
    for point in CircleSteps::new(center, radius) {
        canvas.set_pixel(point, color);
    }
}

// ============================================================================
// Ellipse
// ============================================================================

/// Rotation applied to each mirrored ellipse point.
#[derive(Debug, Clone, Copy)]
struct Tilt {
    center: Point,
    sin: f64,
    cos: f64,
}

impl Tilt {
    fn new(center: Point, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { center, sin, cos }
    }

    fn apply(self, x: i64, y: i64) -> Point {
        let (x, y) = (x as f64, y as f64);
        self.center.saturating_offset(
            i64::from(round_half_up(x * self.cos - y * self.sin)),
            i64::from(round_half_up(x * self.sin + y * self.cos)),
        )
    }

    /// The four reflections of a quadrant point, each rotated independently.
    fn mirror(self, x: i64, y: i64) -> [Point; 4] {
        [
            self.apply(x, y),
            self.apply(x, -y),
            self.apply(-x, y),
            self.apply(-x, -y),
        ]
    }
}

/// Which part of the quadrant the ellipse walk is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// |slope| < 1, stepping along x.
    Upper,
    /// |slope| > 1, stepping along y.
    Lower,
    /// Closing run along the major axis, up to `radius_x`.
    Tail,
    Done,
}

/// Two-region midpoint walk over one quadrant, mirrored and rotated.
///
/// Squared-radius products run in `i128`, which holds them for any pair of
/// `i32` radii.
#[derive(Debug, Clone)]
struct ArcSteps {
    tilt: Tilt,
    rx: i64,
    rx2: i128,
    ry2: i128,
    x: i64,
    y: i64,
    /// Running gradient terms 2*ry²*x and 2*rx²*y
    gx: i128,
    gy: i128,
    discriminant: i128,
    region: Region,
    pending: [Point; 4],
    next_pending: usize,
}

impl ArcSteps {
    fn new(tilt: Tilt, rx: i64, ry: i64) -> Self {
        let rx2 = i128::from(rx) * i128::from(rx);
        let ry2 = i128::from(ry) * i128::from(ry);
        let discriminant =
            (ry2 as f64 - (rx2 * i128::from(ry)) as f64 + 0.25 * rx2 as f64 + 0.5) as i128;
        Self {
            tilt,
            rx,
            rx2,
            ry2,
            x: 0,
            y: ry,
            gx: 0,
            gy: 2 * rx2 * i128::from(ry),
            discriminant,
            region: Region::Upper,
            pending: [tilt.center; 4],
            next_pending: 4,
        }
    }

    /// Advance the walk by one quadrant point, or `None` when it is finished.
    fn step(&mut self) -> Option<(i64, i64)> {
        loop {
            match self.region {
                Region::Upper => {
                    // Slope reaches -1 once the gradients meet
                    if self.gx >= self.gy {
                        let half_x = self.x as f64 + 0.5;
                        let below = (self.y - 1) as f64;
                        self.discriminant = (self.ry2 as f64 * half_x * half_x
                            + self.rx2 as f64 * below * below
                            - (self.rx2 * self.ry2) as f64)
                            as i128;
                        self.region = Region::Lower;
                        continue;
                    }
                    let point = (self.x, self.y);
                    self.x += 1;
                    self.gx += 2 * self.ry2;
                    if self.discriminant < 0 {
                        self.discriminant += self.ry2 + self.gx;
                    } else {
                        self.y -= 1;
                        self.gy -= 2 * self.rx2;
                        self.discriminant += self.ry2 + self.gx - self.gy;
                    }
                    return Some(point);
                }
                Region::Lower => {
                    if self.y < 0 {
                        self.region = Region::Tail;
                        continue;
                    }
                    let point = (self.x, self.y);
                    self.y -= 1;
                    self.gy -= 2 * self.rx2;
                    if self.discriminant > 0 {
                        self.discriminant += self.rx2 - self.gy;
                    } else {
                        self.x += 1;
                        self.gx += 2 * self.ry2;
                        self.discriminant += self.rx2 + self.gx - self.gy;
                    }
                    return Some(point);
                }
                // Flat ellipses can leave region 1 on the major axis short of radius_x.
                Region::Tail => {
                    if self.x > self.rx {
                        self.region = Region::Done;
                        continue;
                    }
                    self.x += 1;
                    return Some((self.x - 1, 0));
                }
                Region::Done => return None,
            }
        }
    }
}

impl Iterator for ArcSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next_pending < 4 {
            self.next_pending += 1;
            return Some(self.pending[self.next_pending - 1]);
        }
        let (x, y) = self.step()?;
        self.pending = self.tilt.mirror(x, y);
        self.next_pending = 1;
        Some(self.pending[0])
    }
}

#[derive(Debug, Clone)]
enum EllipseWalk {
    Empty,
    Segment(BresenhamSteps),
    Arc(Box<ArcSteps>),
}

/// Rotated midpoint ellipse walk.
///
/// Negative radii yield nothing. When one radius is zero the ellipse
/// collapses to a (rotated) segment along the other axis, and to the centre
/// when both are.
#[derive(Debug, Clone)]
pub struct EllipseSteps {
    walk: EllipseWalk,
}

impl EllipseSteps {
    /// Start an ellipse walk with semi-axes `radius_x`, `radius_y`, rotated
    /// by `tilt_degrees` around `center`.
    #[must_use]
    pub fn new(center: Point, radius_x: i32, radius_y: i32, tilt_degrees: f64) -> Self {
        if radius_x < 0 || radius_y < 0 {
            return Self { walk: EllipseWalk::Empty };
        }

        let tilt = Tilt::new(center, tilt_degrees);
        let (rx, ry) = (i64::from(radius_x), i64::from(radius_y));

        let walk = if rx == 0 || ry == 0 {
            EllipseWalk::Segment(BresenhamSteps::new(tilt.apply(-rx, -ry), tilt.apply(rx, ry)))
        } else {
            EllipseWalk::Arc(Box::new(ArcSteps::new(tilt, rx, ry)))
        };
        Self { walk }
    }
}

impl Iterator for EllipseSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match &mut self.walk {
            EllipseWalk::Empty => None,
            EllipseWalk::Segment(steps) => steps.next(),
            EllipseWalk::Arc(arc) => arc.next(),
        }
    }
}

/// Pixels of an ellipse with semi-axes `radius_x`, `radius_y`, rotated by
/// `tilt_degrees` around its centre.
///
/// Negative radii yield nothing. When one radius is zero the ellipse
/// collapses to a (rotated) segment along the other axis, and to the centre
/// when both are.
#[must_use]
pub fn ellipse_points(center: Point, radius_x: i32, radius_y: i32, tilt_degrees: f64) -> Vec<Point> {
    EllipseSteps::new(center, radius_x, radius_y, tilt_degrees).collect()
}

/// Draw a rotated ellipse outline with the two-region midpoint algorithm.
///
/// Pixels are written during the walk. Ellipses whose ring cannot cross the
/// canvas are skipped outright.
pub fn draw_ellipse(
    canvas: &mut PixelCanvas,
    center: Point,
    radius_x: i32,
    radius_y: i32,
    tilt_degrees: f64,
    color: Rgb,
) {
    if radius_x < 0 || radius_y < 0 {
        return;
    }
    let (a, b) = (f64::from(radius_x), f64::from(radius_y));
    if ring_misses_canvas(canvas.size(), center, a.min(b), a.max(b)) {
        return;
    }
    for point in EllipseSteps::new(center, radius_x, radius_y, tilt_degrees) {
        canvas.set_pixel(point, color);
    }
}

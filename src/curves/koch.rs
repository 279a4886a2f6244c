//! Koch curve subdivision.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::{Point, PolylinePath};
use crate::render::line::{draw_polyline, LineAlgorithm, LineStyle};

/// Angle of the triangular bump raised on each middle third.
pub const BUMP_ANGLE_DEGREES: f64 = 60.0;

/// Number of path points after `depth` subdivisions of the closed tent seed.
///
/// Saturates instead of overflowing for absurd depths.
#[must_use]
pub fn koch_point_count(depth: u32) -> usize {
    4usize
        .checked_pow(depth)
        .and_then(|segments| segments.checked_mul(3))
        .map_or(usize::MAX, |segments| segments + 1)
}

/// Replace every segment of `path` by the four segments of one Koch step.
///
/// Each segment `a -> b` becomes `a, third, peak, two_thirds` followed by
/// `b` (which starts the next segment), where `peak` is `third` rotated
/// about `two_thirds` by [`BUMP_ANGLE_DEGREES`].
#[must_use]
pub fn subdivide(path: &PolylinePath) -> PolylinePath {
    let points = path.points();
    let Some(&last) = points.last() else {
        return PolylinePath::new();
    };

    let mut next = PolylinePath::with_capacity(4 * points.len() - 3);
    let angle = BUMP_ANGLE_DEGREES.to_radians();

    for (a, b) in path.segments() {
        let third = a.lerp_rounded(b, 1.0 / 3.0);
        let two_thirds = a.lerp_rounded(b, 2.0 / 3.0);
        next.push(a);
        next.push(third);
        next.push(third.rotate_about(two_thirds, angle));
        next.push(two_thirds);
    }
    next.push(last);

    next
}

/// Koch path seeded with the closed tent `p1 -> p2 -> p3 -> p1`.
///
/// The result holds exactly `3 * 4^depth + 1` points and is closed.
#[must_use]
pub fn koch_path(p1: Point, p2: Point, p3: Point, depth: u32) -> PolylinePath {
    let mut path = PolylinePath::from(vec![p1, p2, p3, p1]);
    for _ in 0..depth {
        path = subdivide(&path);
    }
    log::trace!("koch depth {depth}: {} points", path.len());
    path
}

/// Rasterize a Koch path with DDA segments.
pub fn draw_koch(canvas: &mut PixelCanvas, p1: Point, p2: Point, p3: Point, depth: u32, color: Rgb) {
    let path = koch_path(p1, p2, p3, depth);
    draw_polyline(canvas, &path, LineAlgorithm::Dda, LineStyle::Solid, color);
}

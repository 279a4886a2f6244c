//! Bezier spline approximation.
//!
//! The curve is evaluated directly from the Bernstein form
//! `B(t) = Σ C(n-1, i) · t^i · (1-t)^(n-1-i) · P_i` at evenly spaced
//! parameters, and the samples are chained into a polyline.
//!
//! Binomial coefficients come from a factorial ratio, which costs O(n)
//! multiplications per basis term. That is fine for the 4 to 9 control
//! points a spline accepts and is not meant for high-degree curves.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Point, PolylinePath};
use crate::render::line::{draw_polyline, LineAlgorithm, LineStyle};

/// Fewest control points a spline accepts.
pub const MIN_CONTROL_POINTS: usize = 4;
/// Most control points a spline accepts.
pub const MAX_CONTROL_POINTS: usize = 9;
/// Parameter subdivisions used when none are given.
pub const DEFAULT_STEPS: u32 = 1000;

/// `n!` as a float.
#[must_use]
pub fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
#[must_use]
pub fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// Bernstein basis polynomial `b_{i,n}(t)`.
#[must_use]
pub fn bernstein(n: u32, i: u32, t: f64) -> f64 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i.min(n)) as i32)
}

/// Evaluate the Bezier curve of `control_points` at parameter `t`.
///
/// Works for any non-empty slice; returns the origin for an empty one.
#[must_use]
pub fn evaluate(control_points: &[Point], t: f64) -> (f64, f64) {
    let Some(degree) = control_points.len().checked_sub(1) else {
        return (0.0, 0.0);
    };
    let degree = degree as u32;

    control_points.iter().zip(0..).fold((0.0, 0.0), |(x, y), (p, i)| {
        let weight = bernstein(degree, i, t);
        (x + weight * f64::from(p.x), y + weight * f64::from(p.y))
    })
}

/// A validated Bezier spline with 4 to 9 control points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BezierSpline {
    control_points: Vec<Point>,
}

impl BezierSpline {
    /// Create a spline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlPointCount`] unless there are 4 to 9 points.
    pub fn new(control_points: Vec<Point>) -> Result<Self> {
        let count = control_points.len();
        if !(MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS).contains(&count) {
            return Err(Error::ControlPointCount {
                count,
                min: MIN_CONTROL_POINTS,
                max: MAX_CONTROL_POINTS,
            });
        }
        Ok(Self { control_points })
    }

    /// The control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Polynomial degree (control points minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Curve point at `t`, rounded to the nearest pixel.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let (x, y) = evaluate(&self.control_points, t);
        Point::from_f64(x, y)
    }

    /// Sample `t = i / steps` for `i` in `0..=steps`.
    ///
    /// The result has `steps + 1` points, starting at the first control
    /// point and ending at the last. Zero steps is treated as one.
    #[must_use]
    pub fn sample(&self, steps: u32) -> PolylinePath {
        let steps = steps.max(1);
        (0..=steps).map(|i| self.point_at(f64::from(i) / f64::from(steps))).collect()
    }

    /// Rasterize the sampled polyline with DDA segments.
    pub fn draw(&self, canvas: &mut PixelCanvas, steps: u32, color: Rgb) {
        draw_polyline(canvas, &self.sample(steps), LineAlgorithm::Dda, LineStyle::Solid, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn cubic() -> BezierSpline {
        BezierSpline::new(vec![
            Point::new(0, 0),
            Point::new(0, 100),
            Point::new(100, 100),
            Point::new(100, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_binomial() {
        assert!((binomial(4, 2) - 6.0).abs() < 1e-9);
        assert!((binomial(8, 0) - 1.0).abs() < 1e-9);
        assert!((binomial(8, 8) - 1.0).abs() < 1e-9);
        assert!((binomial(8, 3) - 56.0).abs() < 1e-9);
        assert!(binomial(3, 5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bernstein_partition_of_unity() {
        for &t in &[0.0, 0.25, 0.5, 0.9, 1.0] {
            let sum: f64 = (0..=6).map(|i| bernstein(6, i, t)).sum();
            assert!((sum - 1.0).abs() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn test_control_point_bounds() {
        assert!(BezierSpline::new(vec![Point::ORIGIN; 3]).is_err());
        assert!(BezierSpline::new(vec![Point::ORIGIN; 4]).is_ok());
        assert!(BezierSpline::new(vec![Point::ORIGIN; 9]).is_ok());
        let err = BezierSpline::new(vec![Point::ORIGIN; 10]).unwrap_err();
        assert!(matches!(err, Error::ControlPointCount { count: 10, .. }));
    }

    #[test]
    fn test_endpoints_interpolated() {
        let spline = cubic();
        let path = spline.sample(50);
        assert_eq!(path.len(), 51);
        assert_eq!(path.points().first(), Some(&Point::new(0, 0)));
        assert_eq!(path.points().last(), Some(&Point::new(100, 0)));
    }

    #[test]
    fn test_cubic_midpoint() {
        // B(0.5) = (P0 + 3P1 + 3P2 + P3) / 8
        assert_eq!(cubic().point_at(0.5), Point::new(50, 75));
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let spline = cubic();
        assert_eq!(spline.sample(DEFAULT_STEPS), spline.sample(DEFAULT_STEPS));
    }

    #[test]
    fn test_zero_steps() {
        assert_eq!(cubic().sample(0).len(), 2);
    }

    #[test]
    fn test_draw_touches_endpoints() {
        let mut canvas = PixelCanvas::filled(Size::new(120, 120), Rgb::WHITE).unwrap();
        cubic().draw(&mut canvas, 100, Rgb::BLACK);

        assert_eq!(canvas.get_pixel(Point::new(0, 0)), Some(Rgb::BLACK));
        assert_eq!(canvas.get_pixel(Point::new(100, 0)), Some(Rgb::BLACK));
        assert_eq!(canvas.get_pixel(Point::new(50, 75)), Some(Rgb::BLACK));
    }
}

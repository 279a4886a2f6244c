//! Drawable shape values.
//!
//! Each shape bundles the geometry one rasterizer needs, so scenes can hold
//! a list of heterogeneous primitives and draw them uniformly.

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::geometry::{Point, PolylinePath};
use crate::render::conic::{draw_circle, draw_ellipse};
use crate::render::line::{draw_line, draw_polyline, LineAlgorithm, LineStyle};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a canvas.
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb);
}

/// A styled line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Rasterization algorithm.
    pub algorithm: LineAlgorithm,
    /// Stippling pattern.
    pub style: LineStyle,
}

impl Segment {
    /// A solid DDA segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end, algorithm: LineAlgorithm::Dda, style: LineStyle::Solid }
    }

    /// Use a different algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use a different style.
    #[must_use]
    pub const fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

impl Drawable for Segment {
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb) {
        draw_line(canvas, self.start, self.end, self.algorithm, self.style, color);
    }
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Centre.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

impl Drawable for Circle {
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb) {
        draw_circle(canvas, self.center, self.radius, color);
    }
}

/// A tilted ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Centre.
    pub center: Point,
    /// Semi-axis along x before rotation.
    pub radius_x: i32,
    /// Semi-axis along y before rotation.
    pub radius_y: i32,
    /// Rotation in degrees.
    pub tilt_degrees: f64,
}

impl Ellipse {
    /// Create an ellipse.
    #[must_use]
    pub const fn new(center: Point, radius_x: i32, radius_y: i32, tilt_degrees: f64) -> Self {
        Self { center, radius_x, radius_y, tilt_degrees }
    }
}

impl Drawable for Ellipse {
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb) {
        draw_ellipse(canvas, self.center, self.radius_x, self.radius_y, self.tilt_degrees, color);
    }
}

impl Drawable for PolylinePath {
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb) {
        draw_polyline(canvas, self, LineAlgorithm::Dda, LineStyle::Solid, color);
    }
}

impl Drawable for Point {
    fn draw(&self, canvas: &mut PixelCanvas, color: Rgb) {
        canvas.set_pixel(*self, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn white() -> PixelCanvas {
        PixelCanvas::filled(Size::new(100, 100), Rgb::WHITE).expect("canvas creation should succeed")
    }

    #[test]
    fn test_drawable_segment() {
        let mut canvas = white();
        Segment::new(Point::new(10, 10), Point::new(90, 90))
            .algorithm(LineAlgorithm::Bresenham)
            .draw(&mut canvas, Rgb::BLACK);

        assert_eq!(canvas.get_pixel(Point::new(50, 50)), Some(Rgb::BLACK));
    }

    #[test]
    fn test_drawable_dotted_segment() {
        let mut canvas = white();
        Segment::new(Point::new(0, 0), Point::new(7, 0))
            .style(LineStyle::Dotted)
            .draw(&mut canvas, Rgb::BLACK);

        assert_eq!(canvas.painted(Rgb::WHITE).count(), 4);
    }

    #[test]
    fn test_drawable_heterogeneous() {
        let mut canvas = white();
        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Circle::new(Point::new(50, 50), 20)),
            Box::new(Ellipse::new(Point::new(50, 50), 30, 10, 0.0)),
            Box::new(Point::new(1, 1)),
        ];
        for shape in &shapes {
            shape.draw(&mut canvas, Rgb::RED);
        }

        assert_eq!(canvas.get_pixel(Point::new(70, 50)), Some(Rgb::RED));
        assert_eq!(canvas.get_pixel(Point::new(80, 50)), Some(Rgb::RED));
        assert_eq!(canvas.get_pixel(Point::new(1, 1)), Some(Rgb::RED));
    }
}

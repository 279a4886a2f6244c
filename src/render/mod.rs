//! Scan-conversion rasterization.
//!
//! Incremental pixel generators for lines, circles and ellipses, all writing
//! through the clipped [`PixelCanvas`](crate::canvas::PixelCanvas) API.
//!
//! # Algorithms
//!
//! - **DDA Line**: floating-point stepping along the major axis
//! - **Bresenham's Line**: integer midpoint stepping with an error term
//! - **Midpoint Circle**: 8-way symmetric octant walk
//! - **Midpoint Ellipse**: two-region quadrant walk with per-point rotation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."

pub mod conic;
pub mod line;
mod primitives;

pub use conic::{
    circle_points, draw_circle, draw_ellipse, ellipse_points, CircleSteps, EllipseSteps,
};
pub use line::{
    draw_bresenham_line, draw_dda_line, draw_line, draw_polyline, draw_steps, BresenhamSteps,
    DdaSteps, LineAlgorithm, LineStyle, LineSteps,
};
pub use primitives::{Circle, Drawable, Ellipse, Segment};

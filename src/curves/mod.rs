//! Parametric and recursive curve approximation.
//!
//! Curves are reduced to ordered [`PolylinePath`](crate::geometry::PolylinePath)s
//! and handed to the DDA line rasterizer.

pub mod bezier;
pub mod koch;

pub use bezier::{BezierSpline, DEFAULT_STEPS, MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};
pub use koch::{draw_koch, koch_path, koch_point_count};

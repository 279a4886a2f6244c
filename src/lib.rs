//! # Trueno-Raster
//!
//! Scan-conversion rasterization of classic computer-graphics primitives
//! and fractals into an in-memory pixel canvas.
//!
//! Every algorithm is incremental and writes through a clipped
//! [`PixelCanvas`](canvas::PixelCanvas): points outside the canvas are
//! silently dropped, so shapes may extend past the edges.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = PixelCanvas::filled(Size::new(200, 200), Rgb::WHITE)?;
//! draw_line(&mut canvas, Point::new(10, 10), Point::new(190, 120),
//!           LineAlgorithm::Bresenham, LineStyle::Dashed, Rgb::RED);
//! draw_circle(&mut canvas, Point::new(100, 100), 60, Rgb::BLUE);
//!
//! let ppm = PnmEncoder::to_bytes(&canvas, true)?;
//! assert!(ppm.starts_with(b"P6\n200 200\n255\n"));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable trueno's parallel reductions
//! - `cli`: Build the `raster-demo` driver binary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//! - von Koch, H. (1904). "Sur une courbe continue sans tangente."
//! - Barnsley, M. (1988). *Fractals Everywhere*. Academic Press.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type.
pub mod color;

/// Pixel canvas the rasterizers draw into.
pub mod canvas;

/// Geometric primitives (points, sizes, rectangles, polylines).
pub mod geometry;

/// Injectable uniform randomness.
pub mod random;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Line, circle and ellipse rasterization.
pub mod render;

/// Bezier and Koch curve approximation.
pub mod curves;

/// Trees, the Mandelbrot field and the chaos-game gasket.
pub mod fractal;

// ============================================================================
// Driver Modules
// ============================================================================

/// Output encoders (PNM, PNG).
pub mod output;

/// YAML scene configuration.
pub mod config;

/// Rendering of configured demos.
pub mod scene;

/// Interactive Mandelbrot zoom state.
pub mod viewer;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Channels, PixelCanvas};
    pub use crate::color::Rgb;
    pub use crate::config::{DemoConfig, SceneConfig};
    pub use crate::curves::{draw_koch, koch_path, BezierSpline};
    pub use crate::error::{Error, Result};
    pub use crate::fractal::{
        draw_gasket, grow, grow_random, render_mandelbrot, ChaosGame, ComplexSample,
        MandelbrotField, Viewport,
    };
    pub use crate::geometry::{Point, PolylinePath, Rect, Size};
    pub use crate::output::{ImageFormat, PngEncoder, PnmEncoder};
    pub use crate::random::{seeded, RandomSampler};
    pub use crate::render::{
        draw_circle, draw_ellipse, draw_line, draw_polyline, Drawable, LineAlgorithm, LineStyle,
    };
    pub use crate::scene::{render_demo, render_scene};
    pub use crate::viewer::{MouseButton, ViewerState};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

//! Mandelbrot escape-time field.
//!
//! Rendering is two-pass: every pixel's escape iteration is computed into a
//! [`MandelbrotField`] first, and only then mapped to gray levels using the
//! whole field's observed minimum and maximum.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use trueno::Vector;

use crate::canvas::PixelCanvas;
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};

/// Complex value sampled for one pixel.
pub type ComplexSample = Complex64;

/// Iteration budget at the default viewport width.
pub const DEFAULT_BASE_ITERATION: u32 = 100;

/// `|z|²` above which an orbit counts as escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Ceiling on the corrected budget.
///
/// Every count up to `2^24` is exact in `f32`, the lane type of the
/// min/max reduction.
pub const MAX_ITERATION_BUDGET: u32 = 1 << 24;

/// Gray level used when every pixel escapes at the same iteration.
pub const FLAT_FIELD_GRAY: u8 = 128;

/// Extent of the complex-plane window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Extent along the real axis.
    pub width: f64,
    /// Extent along the imaginary axis.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject non-finite and non-positive extents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a degenerate window.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidParameter(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )))
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}

/// Centre of the default view.
pub const DEFAULT_CENTER: ComplexSample = Complex64::new(-0.5, 0.0);

/// Iteration budget corrected for zoom depth.
///
/// Narrower viewports get `floor(10 · (1 − log2(width)))` extra iterations.
/// The result stays within `[1, MAX_ITERATION_BUDGET]`.
#[must_use]
pub fn corrected_iteration_budget(base_iteration: u32, viewport_width: f64) -> u32 {
    let correction = (10.0 * (1.0 - viewport_width.log2())).floor();
    let budget = f64::from(base_iteration) + correction;
    if budget.is_nan() || budget < 1.0 {
        1
    } else if budget >= f64::from(MAX_ITERATION_BUDGET) {
        MAX_ITERATION_BUDGET
    } else {
        budget as u32
    }
}

/// Iterations of `z ← z² + c` from zero before `|z|² > 4`.
///
/// Returns `max_iteration` when the orbit stays bounded.
#[must_use]
pub fn escape_time(c: ComplexSample, max_iteration: u32) -> u32 {
    let mut z = ComplexSample::new(0.0, 0.0);
    for iteration in 0..max_iteration {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }
    max_iteration
}

/// Escape iterations for every pixel of a window.
///
/// Rows are stored with the imaginary part increasing: row 0 samples the
/// bottom edge of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotField {
    size: Size,
    iterations: Vec<u32>,
    max_iteration: u32,
    min: u32,
    max: u32,
}

impl MandelbrotField {
    /// Compute the field for `size` pixels over the window `center ± viewport / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for an empty size and
    /// [`Error::InvalidParameter`] for a degenerate viewport.
    pub fn compute(
        size: Size,
        center: ComplexSample,
        viewport: Viewport,
        base_iteration: u32,
    ) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidDimensions { width: size.width, height: size.height });
        }
        viewport.validate()?;

        let max_iteration = corrected_iteration_budget(base_iteration, viewport.width);
        log::debug!(
            "mandelbrot {}x{} at {center} viewport {}x{}: budget {max_iteration}",
            size.width,
            size.height,
            viewport.width,
            viewport.height
        );

        let mut iterations = Vec::with_capacity(size.area());
        for iy in 0..size.height {
            let im = axis_sample(iy, size.height, viewport.height, center.im);
            for ix in 0..size.width {
                let re = axis_sample(ix, size.width, viewport.width, center.re);
                iterations.push(escape_time(ComplexSample::new(re, im), max_iteration));
            }
        }

        let (min, max) = iteration_range(&iterations, max_iteration);
        log::debug!("mandelbrot iteration range [{min}, {max}]");

        Ok(Self { size, iterations, max_iteration, min, max })
    }

    /// Field extent in pixels.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Escape iteration per pixel, row-major.
    #[must_use]
    pub fn iterations(&self) -> &[u32] {
        &self.iterations
    }

    /// Escape iteration at column `ix`, field row `iy`.
    #[must_use]
    pub fn iteration_at(&self, ix: u32, iy: u32) -> Option<u32> {
        if ix >= self.size.width || iy >= self.size.height {
            return None;
        }
        self.iterations.get(iy as usize * self.size.width as usize + ix as usize).copied()
    }

    /// Corrected budget used for this field.
    #[must_use]
    pub const fn max_iteration(&self) -> u32 {
        self.max_iteration
    }

    /// Smallest observed escape iteration.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Largest observed escape iteration.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Gray level per pixel, in field order.
    ///
    /// Maps `[min, max]` linearly onto `[255, 0]`, so points in the set are
    /// black and the fastest escapes white. A flat field is uniform
    /// [`FLAT_FIELD_GRAY`].
    #[must_use]
    pub fn to_grayscale(&self) -> Vec<u8> {
        if self.max == self.min {
            return vec![FLAT_FIELD_GRAY; self.iterations.len()];
        }

        let span = f64::from(self.max - self.min);
        let max = f64::from(self.max);
        self.iterations
            .iter()
            .map(|&it| ((max - f64::from(it)) * 255.0 / span + 0.5).floor() as u8)
            .collect()
    }

    /// Write the gray levels into `canvas`, top row first.
    ///
    /// Field row 0 (smallest imaginary part) lands on the bottom canvas row,
    /// matching a display whose y axis grows downward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the canvas size differs.
    pub fn write_to(&self, canvas: &mut PixelCanvas) -> Result<()> {
        if canvas.size() != self.size {
            return Err(Error::InvalidDimensions { width: canvas.width(), height: canvas.height() });
        }

        let width = self.size.width as usize;
        let bottom = self.size.height as i32 - 1;
        for (i, level) in self.to_grayscale().into_iter().enumerate() {
            let point = Point::new((i % width) as i32, bottom - (i / width) as i32);
            canvas.set_gray(point, level);
        }
        Ok(())
    }
}

/// Recompute the field for `canvas` and paint it.
///
/// # Errors
///
/// Propagates [`MandelbrotField::compute`] errors.
pub fn render(
    canvas: &mut PixelCanvas,
    center: ComplexSample,
    viewport: Viewport,
    base_iteration: u32,
) -> Result<MandelbrotField> {
    let field = MandelbrotField::compute(canvas.size(), center, viewport, base_iteration)?;
    field.write_to(canvas)?;
    Ok(field)
}

/// Coordinate of pixel `index` on one axis of `extent` pixels.
fn axis_sample(index: u32, extent: u32, span: f64, center: f64) -> f64 {
    if extent <= 1 {
        return center;
    }
    f64::from(index) * span / f64::from(extent - 1) - span / 2.0 + center
}

/// Observed `(min, max)`, exact while counts stay within [`MAX_ITERATION_BUDGET`].
fn iteration_range(iterations: &[u32], max_iteration: u32) -> (u32, u32) {
    let values = Vector::from_vec(iterations.iter().map(|&it| it as f32).collect());
    let min = values.min().unwrap_or(0.0);
    let max = values.max().unwrap_or(max_iteration as f32);
    (min as u32, max as u32)
}

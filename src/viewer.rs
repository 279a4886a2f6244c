//! Interactive Mandelbrot zoom state.
//!
//! [`ViewerState`] holds what the event layer mutates between frames: the
//! rendered canvas, the complex-plane window, the drag selection and the
//! active mouse button. A left-button drag selects a rectangle in window
//! coordinates; releasing it zooms the window onto that rectangle and
//! re-renders synchronously.

use crate::canvas::PixelCanvas;
use crate::error::{Error, Result};
use crate::fractal::mandelbrot::{
    self, ComplexSample, MandelbrotField, Viewport, DEFAULT_BASE_ITERATION, DEFAULT_CENTER,
};
use crate::geometry::{Rect, Size};

/// Mouse button reported by the event layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Selects the zoom rectangle.
    #[default]
    Left,
    /// Recorded but otherwise ignored.
    Middle,
    /// Recorded but otherwise ignored.
    Right,
}

/// State of one viewer session.
#[derive(Debug, Clone)]
pub struct ViewerState {
    canvas: PixelCanvas,
    center: ComplexSample,
    viewport: Viewport,
    selection: Rect,
    active_button: MouseButton,
    base_iteration: u32,
    field: MandelbrotField,
}

impl ViewerState {
    /// Open a viewer on the default view and render it.
    pub fn new(size: Size) -> Result<Self> {
        Self::with_view(size, DEFAULT_CENTER, Viewport::default(), DEFAULT_BASE_ITERATION)
    }

    /// Open a viewer on an arbitrary window and render it.
    pub fn with_view(
        size: Size,
        center: ComplexSample,
        viewport: Viewport,
        base_iteration: u32,
    ) -> Result<Self> {
        let mut canvas = PixelCanvas::grayscale(size)?;
        let field = mandelbrot::render(&mut canvas, center, viewport, base_iteration)?;
        Ok(Self {
            canvas,
            center,
            viewport,
            selection: Rect::default(),
            active_button: MouseButton::default(),
            base_iteration,
            field,
        })
    }

    /// The rendered image.
    #[must_use]
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// The iteration field behind the current image.
    #[must_use]
    pub fn field(&self) -> &MandelbrotField {
        &self.field
    }

    /// Centre of the complex-plane window.
    #[must_use]
    pub const fn center(&self) -> ComplexSample {
        self.center
    }

    /// Extent of the complex-plane window.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current drag rectangle, in window pixels.
    #[must_use]
    pub const fn selection(&self) -> Rect {
        self.selection
    }

    /// Button of the most recent press or release.
    #[must_use]
    pub const fn active_button(&self) -> MouseButton {
        self.active_button
    }

    /// Button pressed at window position `(x, y)`.
    ///
    /// A left press collapses the selection onto the press position, so a
    /// release without a drag selects nothing.
    pub fn press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left {
            self.selection = Rect::new(x, y, x, y);
        }
        self.active_button = button;
    }

    /// Pointer moved to `(x, y)` with a button held.
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.active_button == MouseButton::Left {
            self.selection.right = x;
            self.selection.bottom = y;
        }
    }

    /// Button released; a left release commits the zoom.
    ///
    /// The release position is not used: the selection's far corner is
    /// whatever the last drag reported.
    pub fn release(&mut self, button: MouseButton, _x: i32, _y: i32) -> Result<()> {
        self.active_button = button;
        if button != MouseButton::Left {
            return Ok(());
        }

        let selection = std::mem::take(&mut self.selection);
        let major = f64::from(selection.major_axis());
        if major == 0.0 {
            log::debug!("empty zoom selection ignored");
            return Ok(());
        }

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let (mid_x, mid_y) = selection.center();

        let center = ComplexSample::new(
            self.center.re - (width / 2.0 - mid_x) * self.viewport.width / width,
            self.center.im + (height / 2.0 - mid_y) * self.viewport.height / height,
        );
        let viewport = Viewport::new(
            major * self.viewport.width / width,
            major * self.viewport.height / height,
        );
        log::debug!(
            "zoom to {center} viewport {}x{}",
            viewport.width,
            viewport.height
        );

        check_resolution(self.canvas.size(), center, viewport)?;

        // Commit only once the new field exists; a failed zoom keeps the old view.
        let field =
            MandelbrotField::compute(self.canvas.size(), center, viewport, self.base_iteration)?;
        field.write_to(&mut self.canvas)?;
        self.center = center;
        self.viewport = viewport;
        self.field = field;
        Ok(())
    }

    /// Recompute the field for the current window and repaint the canvas.
    pub fn render(&mut self) -> Result<&MandelbrotField> {
        self.field =
            mandelbrot::render(&mut self.canvas, self.center, self.viewport, self.base_iteration)?;
        Ok(&self.field)
    }
}

/// Reject a window too narrow for neighbouring pixels to sample distinct points.
fn check_resolution(size: Size, center: ComplexSample, viewport: Viewport) -> Result<()> {
    viewport.validate()?;
    let step_re = viewport.width / f64::from(size.width.max(2) - 1);
    let step_im = viewport.height / f64::from(size.height.max(2) - 1);
    if center.re + step_re == center.re || center.im + step_im == center.im {
        return Err(Error::InvalidParameter(format!(
            "zoom too deep: viewport {}x{} at {center} collapses below float precision",
            viewport.width, viewport.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewer() -> ViewerState {
        ViewerState::with_view(Size::new(100, 100), DEFAULT_CENTER, Viewport::default(), 30).unwrap()
    }

    #[test]
    fn test_new_renders_default_view() {
        let state = ViewerState::new(Size::new(40, 40)).unwrap();
        assert_eq!(state.center(), DEFAULT_CENTER);
        assert_eq!(state.viewport(), Viewport::default());
        assert_eq!(state.selection(), Rect::default());
        assert!(state.canvas().pixels().iter().any(|&v| v == 0));
        assert!(state.canvas().pixels().iter().any(|&v| v == 255));
    }

    #[test]
    fn test_drag_updates_selection() {
        let mut state = viewer();
        state.press(MouseButton::Left, 10, 20);
        state.drag(30, 50);
        assert_eq!(state.selection(), Rect::new(10, 20, 30, 50));
        assert_eq!(state.active_button(), MouseButton::Left);
    }

    #[test]
    fn test_zoom_commit() {
        let mut state = viewer();
        state.press(MouseButton::Left, 0, 0);
        state.drag(50, 25);
        state.release(MouseButton::Left, 50, 25).unwrap();

        // major = 50; selection centre (25, 12.5)
        assert_relative_eq!(state.center().re, -0.5 - 25.0 * 2.0 / 100.0);
        assert_relative_eq!(state.center().im, 37.5 * 2.0 / 100.0);
        assert_relative_eq!(state.viewport().width, 1.0);
        assert_relative_eq!(state.viewport().height, 1.0);
        assert_eq!(state.selection(), Rect::default());
        assert_eq!(state.field().max_iteration(), 40);
    }

    #[test]
    fn test_empty_selection_ignored() {
        let mut state = viewer();
        state.press(MouseButton::Left, 40, 40);
        state.release(MouseButton::Left, 40, 40).unwrap();
        assert_eq!(state.center(), DEFAULT_CENTER);
        assert_eq!(state.viewport(), Viewport::default());
        assert_eq!(state.selection(), Rect::default());
    }

    #[test]
    fn test_click_after_zoom_ignored() {
        let mut state = viewer();
        state.press(MouseButton::Left, 10, 10);
        state.drag(60, 60);
        state.release(MouseButton::Left, 60, 60).unwrap();
        let (center, viewport) = (state.center(), state.viewport());

        // A stale far corner must not turn a plain click into a zoom
        state.drag(90, 90);
        state.press(MouseButton::Left, 30, 70);
        assert_eq!(state.selection(), Rect::new(30, 70, 30, 70));
        state.release(MouseButton::Left, 30, 70).unwrap();
        assert_eq!(state.center(), center);
        assert_eq!(state.viewport(), viewport);
    }

    #[test]
    fn test_single_axis_drag_zooms() {
        let mut state = viewer();
        state.press(MouseButton::Left, 20, 50);
        state.drag(70, 50);
        state.release(MouseButton::Left, 70, 50).unwrap();
        assert_relative_eq!(state.viewport().width, Viewport::default().width / 2.0);
    }

    #[test]
    fn test_other_buttons_only_record() {
        let mut state = viewer();
        state.press(MouseButton::Left, 10, 10);
        state.press(MouseButton::Right, 60, 60);
        state.drag(90, 90);
        assert_eq!(state.active_button(), MouseButton::Right);
        assert_eq!(state.selection(), Rect::new(10, 10, 10, 10));

        state.release(MouseButton::Middle, 90, 90).unwrap();
        assert_eq!(state.active_button(), MouseButton::Middle);
        assert_eq!(state.viewport(), Viewport::default());
    }

    #[test]
    fn test_failed_zoom_keeps_view() {
        let mut state =
            ViewerState::with_view(Size::new(4, 4), DEFAULT_CENTER, Viewport::default(), 10).unwrap();

        let mut commits = 0;
        let error = loop {
            let (center, viewport) = (state.center(), state.viewport());
            state.press(MouseButton::Left, 1, 1);
            state.drag(2, 2);
            match state.release(MouseButton::Left, 2, 2) {
                Ok(()) => commits += 1,
                Err(e) => {
                    assert_eq!(state.center(), center);
                    assert_eq!(state.viewport(), viewport);
                    break e;
                }
            }
            assert!(commits < 200, "zoom never bottomed out");
        };
        assert!(matches!(error, Error::InvalidParameter(_)));
        assert!(state.viewport().validate().is_ok());
        assert_eq!(
            state.field().max_iteration(),
            mandelbrot::corrected_iteration_budget(10, state.viewport().width)
        );

        // Zooming back out still works
        let width = state.viewport().width;
        state.press(MouseButton::Left, 0, 0);
        state.drag(8, 8);
        state.release(MouseButton::Left, 8, 8).unwrap();
        assert_relative_eq!(state.viewport().width, width * 2.0);
    }

    #[test]
    fn test_collapsed_viewport_rejected() {
        assert!(check_resolution(Size::new(4, 4), DEFAULT_CENTER, Viewport::new(0.0, 0.0)).is_err());
        assert!(check_resolution(Size::new(4, 4), DEFAULT_CENTER, Viewport::new(1e-300, 1e-300)).is_err());
        assert!(check_resolution(Size::new(4, 4), DEFAULT_CENTER, Viewport::new(1e-9, 1e-9)).is_ok());
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut state = viewer();
        let before = state.canvas().pixels().to_vec();
        state.render().unwrap();
        assert_eq!(state.canvas().pixels(), &before[..]);
    }
}

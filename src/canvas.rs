//! Flat pixel canvas that every rasterizer writes into.
//!
//! The canvas owns a row-major byte buffer of `width * height * channels`
//! bytes with no row padding, so it can be handed straight to an image
//! writer. Writes outside the canvas are dropped silently: several
//! algorithms (circle arcs, rotated ellipses, tree branches) deliberately
//! overshoot the edges and rely on this clipping.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};

/// Channel layout of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// One luma byte per pixel.
    Gray = 1,
    /// Three bytes per pixel: R, G, B.
    Rgb = 3,
}

impl Channels {
    /// Bytes per pixel.
    #[must_use]
    pub const fn count(self) -> usize {
        self as usize
    }
}

/// Row-major pixel buffer with clipped writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    size: Size,
    channels: Channels,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    /// Create a black RGB canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::canvas::PixelCanvas;
    /// use trueno_raster::geometry::Size;
    ///
    /// let canvas = PixelCanvas::new(Size::new(800, 600)).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.pixels().len(), 800 * 600 * 3);
    /// ```
    pub fn new(size: Size) -> Result<Self> {
        Self::with_channels(size, Channels::Rgb)
    }

    /// Create an RGB canvas pre-filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn filled(size: Size, background: Rgb) -> Result<Self> {
        let mut canvas = Self::new(size)?;
        canvas.clear(background);
        Ok(canvas)
    }

    /// Create a black single-channel canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn grayscale(size: Size) -> Result<Self> {
        Self::with_channels(size, Channels::Gray)
    }

    /// Create a canvas with the given channel layout, zero-initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_channels(size: Size, channels: Channels) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidDimensions { width: size.width, height: size.height });
        }

        let pixels = vec![0; size.area() * channels.count()];
        log::trace!("allocated {}x{} canvas, {:?}", size.width, size.height, channels);

        Ok(Self { size, channels, pixels })
    }

    /// Wrap an existing byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the extent is zero or the buffer length does not
    /// equal `width * height * channels`.
    pub fn from_raw(size: Size, channels: Channels, pixels: Vec<u8>) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidDimensions { width: size.width, height: size.height });
        }
        let expected = size.area() * channels.count();
        if pixels.len() != expected {
            return Err(Error::BufferLength { expected, actual: pixels.len() });
        }
        Ok(Self { size, channels, pixels })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Get the extent.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Get the channel layout.
    #[must_use]
    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Get the raw pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the raw pixel data mutably.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the canvas, returning its buffer.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgb) {
        match self.channels {
            Channels::Gray => self.pixels.fill(color.luma()),
            Channels::Rgb => {
                let [r, g, b] = color.to_array();
                for chunk in self.pixels.chunks_exact_mut(3) {
                    chunk[0] = r;
                    chunk[1] = g;
                    chunk[2] = b;
                }
            }
        }
    }

    /// Write `color` at `point` if it lies on the canvas.
    ///
    /// Returns whether the write happened. Out-of-bounds points are a normal
    /// no-op, not an error.
    pub fn set_pixel(&mut self, point: Point, color: Rgb) -> bool {
        let Some(idx) = self.byte_index(point) else {
            return false;
        };

        match self.channels {
            Channels::Gray => self.pixels[idx] = color.luma(),
            Channels::Rgb => {
                self.pixels[idx] = color.r;
                self.pixels[idx + 1] = color.g;
                self.pixels[idx + 2] = color.b;
            }
        }
        true
    }

    /// Write a gray level at `point`, on either channel layout.
    pub fn set_gray(&mut self, point: Point, level: u8) -> bool {
        match self.channels {
            Channels::Gray => {
                let Some(idx) = self.byte_index(point) else {
                    return false;
                };
                self.pixels[idx] = level;
                true
            }
            Channels::Rgb => self.set_pixel(point, Rgb::gray(level)),
        }
    }

    /// Get the color at `point`, or `None` when off-canvas.
    ///
    /// Gray canvases report the level replicated on all three channels.
    #[must_use]
    pub fn get_pixel(&self, point: Point) -> Option<Rgb> {
        let idx = self.byte_index(point)?;
        Some(match self.channels {
            Channels::Gray => Rgb::gray(self.pixels[idx]),
            Channels::Rgb => Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]),
        })
    }

    /// Iterate over the coordinates of every pixel not equal to `background`.
    pub fn painted(&self, background: Rgb) -> impl Iterator<Item = Point> + '_ {
        let width = self.size.width as i32;
        (0..self.size.area()).filter_map(move |i| {
            let point = Point::new(i as i32 % width, i as i32 / width);
            (self.get_pixel(point) != Some(background)).then_some(point)
        })
    }

    /// Byte offset of the first channel of `point`.
    #[inline]
    fn byte_index(&self, point: Point) -> Option<usize> {
        if !self.size.contains(point) {
            return None;
        }
        let pixel = (point.y as usize) * (self.size.width as usize) + point.x as usize;
        Some(pixel * self.channels.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = PixelCanvas::new(Size::new(100, 50)).unwrap();
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 50);
        assert_eq!(canvas.channels(), Channels::Rgb);
        assert_eq!(canvas.pixels().len(), 100 * 50 * 3);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(PixelCanvas::new(Size::new(0, 100)).is_err());
        assert!(PixelCanvas::new(Size::new(100, 0)).is_err());
        assert!(PixelCanvas::grayscale(Size::new(0, 0)).is_err());
    }

    #[test]
    fn test_filled_white() {
        let canvas = PixelCanvas::filled(Size::new(4, 4), Rgb::WHITE).unwrap();
        assert!(canvas.pixels().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut canvas = PixelCanvas::new(Size::new(10, 10)).unwrap();

        assert!(canvas.set_pixel(Point::new(5, 5), Rgb::BLUE));
        assert_eq!(canvas.get_pixel(Point::new(5, 5)), Some(Rgb::BLUE));

        // Row-major, three bytes per pixel
        let idx = (5 * 10 + 5) * 3;
        assert_eq!(&canvas.pixels()[idx..idx + 3], &[0, 0, 255]);
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        let mut canvas = PixelCanvas::filled(Size::new(10, 10), Rgb::WHITE).unwrap();
        let before = canvas.clone();

        assert!(!canvas.set_pixel(Point::new(-1, 0), Rgb::RED));
        assert!(!canvas.set_pixel(Point::new(0, -1), Rgb::RED));
        assert!(!canvas.set_pixel(Point::new(10, 0), Rgb::RED));
        assert!(!canvas.set_pixel(Point::new(0, 10), Rgb::RED));

        assert_eq!(canvas, before);
        assert_eq!(canvas.get_pixel(Point::new(100, 100)), None);
    }

    #[test]
    fn test_grayscale_stores_luma() {
        let mut canvas = PixelCanvas::grayscale(Size::new(3, 3)).unwrap();
        assert_eq!(canvas.pixels().len(), 9);

        canvas.set_pixel(Point::new(1, 1), Rgb::WHITE);
        assert_eq!(canvas.pixels()[4], 255);

        canvas.set_gray(Point::new(2, 2), 77);
        assert_eq!(canvas.get_pixel(Point::new(2, 2)), Some(Rgb::gray(77)));
    }

    #[test]
    fn test_from_raw_length_check() {
        let size = Size::new(2, 2);
        assert!(PixelCanvas::from_raw(size, Channels::Gray, vec![0; 4]).is_ok());
        let err = PixelCanvas::from_raw(size, Channels::Rgb, vec![0; 4]).unwrap_err();
        assert!(matches!(err, Error::BufferLength { expected: 12, actual: 4 }));
    }

    #[test]
    fn test_painted() {
        let mut canvas = PixelCanvas::filled(Size::new(5, 5), Rgb::WHITE).unwrap();
        canvas.set_pixel(Point::new(1, 2), Rgb::BLACK);
        canvas.set_pixel(Point::new(4, 0), Rgb::RED);

        let painted: Vec<Point> = canvas.painted(Rgb::WHITE).collect();
        assert_eq!(painted, vec![Point::new(4, 0), Point::new(1, 2)]);
    }
}

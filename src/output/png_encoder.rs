//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::canvas::{Channels, PixelCanvas};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for RGB and grayscale canvases.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &PixelCanvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(canvas, BufWriter::new(file))
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &PixelCanvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(canvas: &PixelCanvas, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, canvas.width(), canvas.height());
        encoder.set_color(match canvas.channels() {
            Channels::Gray => png::ColorType::Grayscale,
            Channels::Rgb => png::ColorType::Rgb,
        });
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Canvas rows are tightly packed, no stride padding to strip
        writer.write_image_data(canvas.pixels())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::geometry::{Point, Size};

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let mut reader = png::Decoder::new(bytes).read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut canvas = PixelCanvas::new(Size::new(10, 10)).unwrap();
        canvas.clear(Rgb::RED);

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);

        let (info, pixels) = decode(&bytes);
        assert_eq!((info.width, info.height), (10, 10));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&pixels[..3], &[255, 0, 0]);
    }

    #[test]
    fn test_png_grayscale() {
        let mut canvas = PixelCanvas::grayscale(Size::new(4, 3)).unwrap();
        canvas.set_gray(Point::new(3, 2), 200);

        let (info, pixels) = decode(&PngEncoder::to_bytes(&canvas).unwrap());
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(pixels.len(), 12);
        assert_eq!(pixels[11], 200);
    }

    #[test]
    fn test_png_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let canvas = PixelCanvas::filled(Size::new(8, 8), Rgb::WHITE).unwrap();

        PngEncoder::write_to_file(&canvas, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }
}

//! Portable any-map (PGM/PPM) encoder.
//!
//! Header is the magic token, `width height` and the max level `255`, each
//! on its own line. Binary maps follow with raw samples; ASCII maps with
//! one pixel per line, channels separated by single spaces.

use crate::canvas::{Channels, PixelCanvas};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Largest sample value written to the header.
pub const MAX_LEVEL: u8 = 255;

/// PNM encoder: `P2`/`P5` for grayscale, `P3`/`P6` for RGB canvases.
pub struct PnmEncoder;

impl PnmEncoder {
    /// Magic token for a channel layout and sample encoding.
    #[must_use]
    pub const fn magic(channels: Channels, binary: bool) -> &'static str {
        match (channels, binary) {
            (Channels::Gray, false) => "P2",
            (Channels::Rgb, false) => "P3",
            (Channels::Gray, true) => "P5",
            (Channels::Rgb, true) => "P6",
        }
    }

    /// Conventional file extension for a channel layout.
    #[must_use]
    pub const fn extension(channels: Channels) -> &'static str {
        match channels {
            Channels::Gray => "pgm",
            Channels::Rgb => "ppm",
        }
    }

    /// Encode a canvas to PNM bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if a sample cannot be written.
    pub fn to_bytes(canvas: &PixelCanvas, binary: bool) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, binary, &mut buffer)?;
        Ok(buffer)
    }

    /// Write a canvas to a PNM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &PixelCanvas, path: P, binary: bool) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::encode(canvas, binary, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Stream header and samples into `sink`.
    fn encode<W: Write>(canvas: &PixelCanvas, binary: bool, sink: &mut W) -> Result<()> {
        write!(
            sink,
            "{}\n{} {}\n{}\n",
            Self::magic(canvas.channels(), binary),
            canvas.width(),
            canvas.height(),
            MAX_LEVEL
        )?;

        if binary {
            sink.write_all(canvas.pixels())?;
            return Ok(());
        }

        let channels = canvas.channels().count();
        for pixel in canvas.pixels().chunks_exact(channels) {
            for (i, sample) in pixel.iter().enumerate() {
                let sep = if i + 1 == channels { '\n' } else { ' ' };
                write!(sink, "{sample}{sep}")?;
            }
        }
        Ok(())
    }
}

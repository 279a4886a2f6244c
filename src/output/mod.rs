//! Output encoders (PNM, PNG).

mod png_encoder;
mod pnm;

pub use png_encoder::PngEncoder;
pub use pnm::{PnmEncoder, MAX_LEVEL};

use crate::canvas::PixelCanvas;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable any-map (PGM for grayscale, PPM for RGB).
    #[default]
    Ppm,
    /// PNG.
    Png,
}

impl ImageFormat {
    /// File extension for a canvas in this format.
    #[must_use]
    pub fn extension(self, canvas: &PixelCanvas) -> &'static str {
        match self {
            Self::Ppm => PnmEncoder::extension(canvas.channels()),
            Self::Png => "png",
        }
    }
}

/// Write `canvas` as `<dir>/<stem>.<ext>` and return the path written.
///
/// `binary` only affects the PNM format.
///
/// # Errors
///
/// Returns an error if the file cannot be written or encoded.
pub fn write_canvas(
    canvas: &PixelCanvas,
    dir: &Path,
    stem: &str,
    format: ImageFormat,
    binary: bool,
) -> Result<PathBuf> {
    let path = dir.join(format!("{stem}.{}", format.extension(canvas)));
    match format {
        ImageFormat::Ppm => PnmEncoder::write_to_file(canvas, &path, binary)?,
        ImageFormat::Png => PngEncoder::write_to_file(canvas, &path)?,
    }
    log::debug!("wrote {}", path.display());
    Ok(path)
}

//! Output encoders (PNG, JPEG).
//!
//! The format is chosen from the output path's extension. Files are encoded
//! completely in memory before anything is written, so a failed encode
//! never leaves a partial file behind.

mod jpeg_encoder;
mod png_encoder;

pub use jpeg_encoder::{JpegEncoder, JPEG_QUALITY};
pub use png_encoder::PngEncoder;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fmt;
use std::path::Path;

/// Supported image file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG.
    Png,
    /// JPEG at [`JPEG_QUALITY`].
    Jpeg,
}

impl OutputFormat {
    /// Pick a format from a path's extension (`.png`, `.jpg`, `.jpeg`,
    /// ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if ext.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Ok(Self::Jpeg)
        } else {
            Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    /// Encode a framebuffer in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    pub fn encode(self, fb: &Framebuffer) -> Result<Vec<u8>> {
        match self {
            Self::Png => PngEncoder::to_bytes(fb),
            Self::Jpeg => JpegEncoder::to_bytes(fb),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => f.write_str("PNG"),
            Self::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// Encode a framebuffer and write it to `path`, choosing the format from
/// the extension.
///
/// # Errors
///
/// Returns an error for an unsupported extension, an encoder failure, or a
/// failed write.
pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let bytes = format.encode(fb)?;
    std::fs::write(path, bytes)?;
    log::info!("{format} file written to {}", path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a/b.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("c.JPEG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("d.Png")).unwrap(), OutputFormat::Png);
    }

    #[test]
    fn test_format_rejects_other_extensions() {
        for path in ["plot.gif", "plot", "plot.png.bak", "png", ".png.txt"] {
            assert!(
                matches!(OutputFormat::from_path(Path::new(path)), Err(Error::UnsupportedFormat { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_write_to_file_rejects_gif_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.gif");
        let fb = Framebuffer::with_dimensions(4, 4).unwrap();

        assert!(write_to_file(&fb, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_to_file_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let mut fb = Framebuffer::with_dimensions(4, 4).unwrap();
        fb.fill(Rgba::WHITE);

        assert_eq!(write_to_file(&fb, &path).unwrap(), OutputFormat::Png);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputFormat::Png.to_string(), "PNG");
        assert_eq!(OutputFormat::Jpeg.to_string(), "JPEG");
    }
}

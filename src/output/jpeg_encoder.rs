//! JPEG output encoder.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::ImageEncoder;

/// Encoding quality (1-100).
pub const JPEG_QUALITY: u8 = 100;

/// JPEG encoder for framebuffer output.
pub struct JpegEncoder;

impl JpegEncoder {
    /// Encode a framebuffer to baseline JPEG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if JPEG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = ImageJpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
        encoder.write_image(
            &fb.to_byte_stream(),
            fb.width(),
            fb.height(),
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(buffer)
    }
}

//! Core framebuffer for pixel rendering.
//!
//! Holds a row-major grid of packed `0xAABBGGRR` colors. The plotting
//! canvas is always [`WIDTH`] x [`HEIGHT`]; other sizes exist only so the
//! primitives can be exercised on small buffers.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{CHANNELS, HEIGHT, WIDTH};

/// Packed-color framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed pixels in row-major order.
    pixels: Vec<u32>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create the fixed-size plotting canvas, filled with opaque black.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_scatter::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new();
    /// assert_eq!(fb.width(), 1000);
    /// assert_eq!(fb.height(), 1000);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::blank(WIDTH, HEIGHT)
    }

    /// Create a framebuffer with arbitrary dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_dimensions(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::blank(width, height))
    }

    fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK.to_packed(); (width as usize) * (height as usize)],
        }
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the packed pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color.to_packed());
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let packed = color.to_packed();
        for row_y in y1..y2 {
            let start = self.pixel_index(x1, row_y);
            let end = start + (x2 - x1) as usize;
            self.pixels[start..end].fill(packed);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba::from_packed(self.pixels[self.pixel_index(x, y)]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates fall outside
    /// the buffer; nothing is written in that case.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = color.to_packed();
        Ok(())
    }

    /// Set a pixel given signed coordinates, clipping anything outside the
    /// buffer. Returns whether the pixel was written.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self.set_pixel(x, y, color).is_ok(),
            _ => false,
        }
    }

    /// Serialize pixels row-major as tightly packed R, G, B bytes.
    ///
    /// The alpha byte is dropped.
    #[must_use]
    pub fn to_byte_stream(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixel_count() * CHANNELS);
        for &packed in &self.pixels {
            bytes.extend_from_slice(&Rgba::from_packed(packed).to_rgb());
        }
        bytes
    }

    /// Calculate the index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

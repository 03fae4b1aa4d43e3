//! Canvas geometry.
//!
//! The canvas has a fixed resolution. The border rectangle sits `BORDER`
//! pixels inside the image edge, and scatter points are placed inside a
//! further `PLOT_BORDER` padding so dots at the data extremes do not touch
//! the border line.

/// Image width in pixels.
pub const WIDTH: u32 = 1000;
/// Image height in pixels.
pub const HEIGHT: u32 = 1000;
/// Inset of the border rectangle from the image edge.
pub const BORDER: u32 = 100;
/// Padding between the border line and the scatter area.
pub const PLOT_BORDER: u32 = 20;
/// Side length of the region enclosed by the border.
pub const BORDER_EXTENT: u32 = HEIGHT - 2 * BORDER;
/// Side length of the scatter area; offsets range over `0..=PLOT_EXTENT`.
pub const PLOT_EXTENT: u32 = WIDTH - 2 * PLOT_BORDER - 2 * BORDER;
/// Half-width of a scatter dot (dots are `2 * DOT_SIZE + 1` pixels square).
pub const DOT_SIZE: i32 = 2;
/// Bytes per pixel in the serialized stream.
pub const CHANNELS: usize = 3;

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The border rectangle. Both the first and last edge pixels are
    /// included, so it spans `BORDER..=WIDTH - BORDER`.
    #[must_use]
    pub const fn border() -> Self {
        Self::new(BORDER, BORDER, BORDER_EXTENT + 1, BORDER_EXTENT + 1)
    }

    /// The area scatter points can land in (dot centers only).
    #[must_use]
    pub const fn plot_area() -> Self {
        Self::new(
            BORDER + PLOT_BORDER,
            BORDER + PLOT_BORDER,
            PLOT_EXTENT + 1,
            PLOT_EXTENT + 1,
        )
    }

    /// Column one past the right edge.
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Row one past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Check whether a pixel lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

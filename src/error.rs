//! Error types for trueno-scatter operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting a plot.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// JPEG encoding error.
    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] image::ImageError),

    /// Output path does not end in `.png`, `.jpg` or `.jpeg`.
    #[error("Unsupported output format for {}: path must end in .png, .jpg or .jpeg", .path.display())]
    UnsupportedFormat {
        /// The rejected output path.
        path: PathBuf,
    },

    /// A label is longer than the hard limit.
    #[error("{label} is too long: {len} characters (maximum {max})")]
    LabelTooLong {
        /// Which label failed ("title", "x-axis label", ...).
        label: &'static str,
        /// Length of the rejected text in characters.
        len: usize,
        /// Hard limit.
        max: usize,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel write outside the framebuffer.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    PixelOutOfBounds {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// Framebuffer width.
        width: u32,
        /// Framebuffer height.
        height: u32,
    },

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// The declared sample count disagrees with the arrays.
    #[error("Declared length {expected} does not match the sample arrays ({actual} elements)")]
    LengthArgumentMismatch {
        /// Length passed by the caller.
        expected: usize,
        /// Actual array length.
        actual: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// NaN or infinite sample value.
    #[error("Non-finite {axis} sample at index {index}")]
    NonFiniteSample {
        /// Axis name ("x" or "y").
        axis: &'static str,
        /// Index of the offending sample.
        index: usize,
    },
}

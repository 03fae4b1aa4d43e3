//! # Trueno-Scatter
//!
//! Fixed-resolution scatter plot rasterizer for small native programs that
//! need quick visual output without a plotting framework.
//!
//! A 1000x1000 canvas gets a background, a border, an optional dashed grid,
//! axis labels and a title drawn with a built-in 5x6 bitmap font, and one
//! square dot per sample. The result is written as PNG or JPEG depending on
//! the output path's extension.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trueno_scatter::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! let mut plotter = Plotter::new();
//! plotter
//!     .set_title("squares")
//!     .set_x_label("n")
//!     .set_y_label("n squared")
//!     .set_output_path("squares.png")
//!     .enable_grid(10);
//!
//! let report = plotter.plot(&x, &y, x.len())?;
//! assert_eq!(report.points, 5);
//! # Ok::<(), trueno_scatter::Error>(())
//! ```
//!
//! ## Coordinates
//!
//! Data space has its origin at the bottom-left of the plot area: the
//! smallest x lands on the left edge and the smallest y on the bottom edge.
//! A flat series on either axis is centered on that axis.
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade. Over-long labels are reported
//! with `warn!` and also returned in the [`plotter::PlotReport`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the packed pixel layout.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Canvas geometry constants.
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Built-in bitmap font.
pub mod font;

// ============================================================================
// Plotting Modules
// ============================================================================

/// Plot configuration and color theme.
pub mod config;

/// Scatter rendering.
pub mod plots;

/// Plot orchestration.
pub mod plotter;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rendering primitives and text.
pub mod render;

/// Output encoders (PNG, JPEG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-scatter operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_scatter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{PlotConfig, Theme};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::output::OutputFormat;
    pub use crate::plots::SampleSeries;
    pub use crate::plotter::{PlotReport, Plotter};
    pub use crate::render::LabelWarning;
    pub use crate::scale::{AxisScale, Scale};
}

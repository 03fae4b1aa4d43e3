//! High-level plot types.

mod scatter;

pub use scatter::{dot_center, draw_scatter, SampleSeries};

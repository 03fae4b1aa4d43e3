//! Rendering backends and rasterization.
//!
//! - **Primitives**: background fill, border rectangle, dashed grid, dots
//! - **Text**: scaled 5x6 bitmap glyphs, horizontal or rotated vertical

pub mod primitives;
pub mod text;

pub use primitives::{
    draw_background, draw_border, draw_dot, draw_grid, draw_rect, draw_rect_outline,
};
pub use text::{check_label, draw_text, LabelWarning, TextLayout};

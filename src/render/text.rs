//! Bitmap text rendering.
//!
//! Glyphs from [`crate::font`] are blitted cell by cell, each mask cell
//! becoming a `scale x scale` block. Horizontal text runs left to right and
//! is centered on a column. Vertical text runs top to bottom with every
//! glyph rotated 90 degrees clockwise, centered on a row.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::font::{glyph, Glyph, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuffer::Framebuffer;
use crate::render::primitives::draw_rect;

/// Font scale for axis labels.
pub const LABEL_SCALE: u32 = 4;
/// Font scale for the title.
pub const TITLE_SCALE: u32 = 6;
/// Labels longer than this are rejected.
pub const MAX_LABEL_LEN: usize = 33;
/// Labels longer than this render with a warning; they may overflow the canvas.
pub const SOFT_LABEL_LEN: usize = 25;

/// Text direction and anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout {
    /// Left to right, centered on `center_x`, glyph tops on row `top`.
    Horizontal {
        /// Column the string is centered on.
        center_x: i64,
        /// Top row of every glyph.
        top: i64,
    },
    /// Top to bottom, centered on `center_y`, glyphs starting at column `left`.
    Vertical {
        /// Leftmost column of every rotated glyph.
        left: i64,
        /// Row the string is centered on.
        center_y: i64,
    },
}

/// A label that rendered but exceeded the soft length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelWarning {
    /// Which label ("title", "x-axis label", ...).
    pub label: &'static str,
    /// Length in characters.
    pub len: usize,
}

impl std::fmt::Display for LabelWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is {} characters long (over {}); it may not fit on the canvas",
            self.label, self.len, SOFT_LABEL_LEN
        )
    }
}

/// Validate a label's length.
///
/// Returns a warning for lengths in `SOFT_LABEL_LEN + 1..=MAX_LABEL_LEN`.
///
/// # Errors
///
/// Returns [`Error::LabelTooLong`] above [`MAX_LABEL_LEN`].
pub fn check_label(label: &'static str, text: &str) -> Result<Option<LabelWarning>> {
    let len = text.chars().count();
    if len > MAX_LABEL_LEN {
        return Err(Error::LabelTooLong {
            label,
            len,
            max: MAX_LABEL_LEN,
        });
    }
    if len > SOFT_LABEL_LEN {
        let warning = LabelWarning { label, len };
        log::warn!("{warning}");
        return Ok(Some(warning));
    }
    Ok(None)
}

/// Length of `text` along its direction of travel, in pixels.
#[must_use]
pub fn text_extent(text: &str, scale: u32) -> i64 {
    text.chars().count() as i64 * i64::from(GLYPH_ADVANCE * scale)
}

/// Draw `text` into the framebuffer. Pixels falling outside are clipped.
pub fn draw_text(fb: &mut Framebuffer, text: &str, layout: TextLayout, scale: u32, color: Rgba) {
    let scale = scale.max(1);
    let advance = i64::from(GLYPH_ADVANCE * scale);
    let half = text_extent(text, scale) / 2;

    for (i, c) in text.chars().enumerate() {
        let step = i as i64 * advance;
        match layout {
            TextLayout::Horizontal { center_x, top } => {
                blit_upright(fb, glyph(c), center_x - half + step, top, scale, color);
            }
            TextLayout::Vertical { left, center_y } => {
                blit_rotated(fb, glyph(c), left, center_y - half + step, scale, color);
            }
        }
    }
}

fn blit_upright(fb: &mut Framebuffer, g: &Glyph, x: i64, y: i64, scale: u32, color: Rgba) {
    let s = i64::from(scale);
    for row in 0..GLYPH_HEIGHT {
        for col in (0..GLYPH_WIDTH).filter(|&col| g.is_set(row, col)) {
            draw_rect(fb, x + i64::from(col) * s, y + i64::from(row) * s, scale, scale, color);
        }
    }
}

/// Rotated clockwise: glyph row `r` lands in output column `GLYPH_HEIGHT - 1 - r`,
/// glyph column `c` in output row `c`.
fn blit_rotated(fb: &mut Framebuffer, g: &Glyph, x: i64, y: i64, scale: u32, color: Rgba) {
    let s = i64::from(scale);
    for row in 0..GLYPH_HEIGHT {
        for col in (0..GLYPH_WIDTH).filter(|&col| g.is_set(row, col)) {
            let out_col = i64::from(GLYPH_HEIGHT - 1 - row);
            draw_rect(fb, x + out_col * s, y + i64::from(col) * s, scale, scale, color);
        }
    }
}

//! Primitive rendering functions.
//!
//! Background, border, grid and dot drawing. All writes are clipped to the
//! framebuffer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Rect, BORDER, BORDER_EXTENT, WIDTH};

/// Grid density used when the caller asks for a grid of density zero.
pub const DEFAULT_GRID_DENSITY: u32 = 10;

/// Densest grid that still has a spacing of at least one pixel. Larger
/// densities are clamped to this.
pub const MAX_GRID_DENSITY: u32 = BORDER_EXTENT;

// ============================================================================
// Canvas
// ============================================================================

/// Fill the entire framebuffer.
pub fn draw_background(fb: &mut Framebuffer, color: Rgba) {
    fb.fill(color);
}

/// Draw the one-pixel border rectangle around the plot area.
///
/// The rectangle is closed: rows and columns 100 and 900 are both drawn,
/// including the bottom-right corner pixel (900, 900).
pub fn draw_border(fb: &mut Framebuffer, color: Rgba) {
    let border = Rect::border();
    draw_rect_outline(fb, border, color, 1);
}

/// Draw dashed interior grid lines.
///
/// `density` of `None` means the grid is disabled and nothing is drawn.
/// Otherwise `density - 1` horizontal and vertical lines are spaced
/// `BORDER_EXTENT / density` apart, lighting every odd row/column so the
/// lines come out dashed. Densities above [`MAX_GRID_DENSITY`] are clamped
/// so lines never collapse onto the border.
pub fn draw_grid(fb: &mut Framebuffer, color: Rgba, density: Option<u32>) {
    let Some(density) = density else {
        return;
    };
    let density = clamp_grid_density(density);
    let spacing = BORDER_EXTENT / density;

    for i in 1..density {
        let pos = i64::from(BORDER) + i64::from(i) * i64::from(spacing);
        for coord in (BORDER..WIDTH - BORDER).filter(|c| c % 2 == 1) {
            let coord = i64::from(coord);
            fb.put_pixel(coord, pos, color);
            fb.put_pixel(pos, coord, color);
        }
    }
}

/// Map a requested grid density onto `1..=MAX_GRID_DENSITY`, with zero
/// selecting [`DEFAULT_GRID_DENSITY`].
#[must_use]
pub const fn clamp_grid_density(density: u32) -> u32 {
    if density == 0 {
        DEFAULT_GRID_DENSITY
    } else if density > MAX_GRID_DENSITY {
        MAX_GRID_DENSITY
    } else {
        density
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Draw a filled rectangle with a signed origin, clipped to the buffer.
pub fn draw_rect(fb: &mut Framebuffer, x: i64, y: i64, width: u32, height: u32, color: Rgba) {
    let x_end = x + i64::from(width);
    let y_end = y + i64::from(height);
    let x = x.max(0);
    let y = y.max(0);

    if x >= x_end || y >= y_end {
        return;
    }

    let (Ok(x0), Ok(y0)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let w = u32::try_from(x_end - x).unwrap_or(u32::MAX);
    let h = u32::try_from(y_end - y).unwrap_or(u32::MAX);
    fb.fill_rect(x0, y0, w, h, color);
}

/// Draw a rectangle outline.
pub fn draw_rect_outline(fb: &mut Framebuffer, rect: Rect, color: Rgba, thickness: u32) {
    let thickness = thickness.max(1);
    let Rect { x, y, width, height } = rect;

    // Top edge
    fb.fill_rect(x, y, width, thickness, color);
    // Bottom edge
    if height > thickness {
        fb.fill_rect(x, y + height - thickness, width, thickness, color);
    }
    // Left edge
    if height > 2 * thickness {
        fb.fill_rect(x, y + thickness, thickness, height - 2 * thickness, color);
    }
    // Right edge
    if width > thickness && height > 2 * thickness {
        fb.fill_rect(
            x + width - thickness,
            y + thickness,
            thickness,
            height - 2 * thickness,
            color,
        );
    }
}

// ============================================================================
// Dots
// ============================================================================

/// Stamp a filled square of half-width `half` centered on (`cx`, `cy`).
pub fn draw_dot(fb: &mut Framebuffer, cx: i64, cy: i64, half: i32, color: Rgba) {
    let half = half.max(0);
    let side = (2 * half + 1) as u32;
    let half = i64::from(half);
    draw_rect(fb, cx - half, cy - half, side, side, color);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HEIGHT;

    fn canvas() -> Framebuffer {
        let mut fb = Framebuffer::new();
        draw_background(&mut fb, Rgba::GREY);
        fb
    }

    #[test]
    fn test_background_covers_every_pixel() {
        let fb = canvas();
        assert!(fb.pixels().iter().all(|&p| p == Rgba::GREY.to_packed()));
    }

    #[test]
    fn test_border_traces_all_four_edges() {
        let mut fb = canvas();
        draw_border(&mut fb, Rgba::BLACK);

        for t in [100, 500, 900] {
            assert_eq!(fb.get_pixel(t, 100), Some(Rgba::BLACK), "top at {t}");
            assert_eq!(fb.get_pixel(t, 900), Some(Rgba::BLACK), "bottom at {t}");
            assert_eq!(fb.get_pixel(100, t), Some(Rgba::BLACK), "left at {t}");
            assert_eq!(fb.get_pixel(900, t), Some(Rgba::BLACK), "right at {t}");
        }
        assert_eq!(fb.get_pixel(101, 101), Some(Rgba::GREY));
        assert_eq!(fb.get_pixel(99, 100), Some(Rgba::GREY));
        assert_eq!(fb.get_pixel(901, 900), Some(Rgba::GREY));
        // Closed rectangle: the bottom-right corner is lit too
        assert_eq!(fb.get_pixel(900, 900), Some(Rgba::BLACK));
    }

    #[test]
    fn test_grid_disabled_is_noop() {
        let mut fb = canvas();
        let before = fb.clone();
        draw_grid(&mut fb, Rgba::DARK_GREY, None);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_grid_lines_are_dashed() {
        let mut fb = canvas();
        draw_grid(&mut fb, Rgba::DARK_GREY, Some(10));

        // First horizontal line at row 180, vertical at column 180
        assert_eq!(fb.get_pixel(301, 180), Some(Rgba::DARK_GREY));
        assert_eq!(fb.get_pixel(302, 180), Some(Rgba::GREY));
        assert_eq!(fb.get_pixel(180, 301), Some(Rgba::DARK_GREY));
        assert_eq!(fb.get_pixel(180, 302), Some(Rgba::GREY));
        // No line outside the interior
        assert_eq!(fb.get_pixel(50, 180), Some(Rgba::GREY));
    }

    #[test]
    fn test_grid_line_count() {
        let mut fb = canvas();
        draw_grid(&mut fb, Rgba::DARK_GREY, Some(4));

        let column = 101;
        let rows: Vec<u32> = (0..HEIGHT)
            .filter(|&y| fb.get_pixel(column, y) == Some(Rgba::DARK_GREY))
            .collect();
        assert_eq!(rows, vec![300, 500, 700]);
    }

    #[test]
    fn test_grid_zero_density_uses_default() {
        let mut a = canvas();
        let mut b = canvas();
        draw_grid(&mut a, Rgba::DARK_GREY, Some(0));
        draw_grid(&mut b, Rgba::DARK_GREY, Some(DEFAULT_GRID_DENSITY));
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_dense_density_keeps_border() {
        let mut densest = canvas();
        draw_border(&mut densest, Rgba::BLACK);
        draw_grid(&mut densest, Rgba::DARK_GREY, Some(MAX_GRID_DENSITY));

        for density in [801, 200_000, u32::MAX] {
            let mut fb = canvas();
            draw_border(&mut fb, Rgba::BLACK);
            draw_grid(&mut fb, Rgba::DARK_GREY, Some(density));

            assert_eq!(fb.get_pixel(101, 100), Some(Rgba::BLACK), "density {density}");
            assert_eq!(fb.get_pixel(100, 101), Some(Rgba::BLACK), "density {density}");
            assert_eq!(fb, densest, "density {density}");
        }
    }

    #[test]
    fn test_clamp_grid_density() {
        assert_eq!(clamp_grid_density(0), DEFAULT_GRID_DENSITY);
        assert_eq!(clamp_grid_density(15), 15);
        assert_eq!(clamp_grid_density(800), 800);
        assert_eq!(clamp_grid_density(801), MAX_GRID_DENSITY);
    }

    #[test]
    fn test_grid_is_idempotent() {
        let mut once = canvas();
        draw_grid(&mut once, Rgba::DARK_GREY, Some(15));
        let mut twice = once.clone();
        draw_grid(&mut twice, Rgba::DARK_GREY, Some(15));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut fb = Framebuffer::with_dimensions(100, 100).unwrap();
        fb.fill(Rgba::WHITE);

        draw_rect_outline(&mut fb, Rect::new(20, 20, 30, 30), Rgba::RED, 2);

        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(49, 49), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_dot_is_square() {
        let mut fb = Framebuffer::with_dimensions(20, 20).unwrap();
        fb.fill(Rgba::WHITE);
        draw_dot(&mut fb, 10, 10, 2, Rgba::PURPLE);

        let lit = fb.pixels().iter().filter(|&&p| p == Rgba::PURPLE.to_packed()).count();
        assert_eq!(lit, 25);
        assert_eq!(fb.get_pixel(8, 8), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(12, 12), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(13, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_dot_clips_at_edges() {
        let mut fb = Framebuffer::with_dimensions(10, 10).unwrap();
        fb.fill(Rgba::WHITE);
        draw_dot(&mut fb, 0, 0, 2, Rgba::PURPLE);
        draw_dot(&mut fb, 9, 9, 2, Rgba::PURPLE);

        let lit = fb.pixels().iter().filter(|&&p| p == Rgba::PURPLE.to_packed()).count();
        assert_eq!(lit, 18);
    }

    #[test]
    fn test_draw_rect_fully_outside() {
        let mut fb = Framebuffer::with_dimensions(10, 10).unwrap();
        fb.fill(Rgba::WHITE);
        let before = fb.clone();
        draw_rect(&mut fb, -20, -20, 5, 5, Rgba::RED);
        draw_rect(&mut fb, 50, 50, 5, 5, Rgba::RED);
        assert_eq!(fb, before);
    }
}

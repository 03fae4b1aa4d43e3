//! Scatter rendering.
//!
//! Performance target: 10K points < 5ms

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{BORDER, DOT_SIZE, HEIGHT, PLOT_BORDER, PLOT_EXTENT};
use crate::render::primitives::draw_dot;
use crate::scale::AxisScale;

/// Paired x/y samples borrowed from the caller for one plot.
#[derive(Debug, Clone, Copy)]
pub struct SampleSeries<'a> {
    x: &'a [f32],
    y: &'a [f32],
}

impl<'a> SampleSeries<'a> {
    /// Validate and wrap a pair of sample arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if either array is empty, the lengths differ, or a
    /// sample is NaN or infinite.
    pub fn new(x: &'a [f32], y: &'a [f32]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::DataLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(Error::EmptyData);
        }
        check_finite("x", x)?;
        check_finite("y", y)?;

        Ok(Self { x, y })
    }

    /// The x samples.
    #[must_use]
    pub const fn x(&self) -> &'a [f32] {
        self.x
    }

    /// The y samples.
    #[must_use]
    pub const fn y(&self) -> &'a [f32] {
        self.y
    }

    /// Get the number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; construction rejects empty series.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Per-axis scales over the plot extent, each computed in one pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is empty.
    pub fn scales(&self) -> Result<(AxisScale, AxisScale)> {
        let extent = PLOT_EXTENT as f32;
        Ok((
            AxisScale::from_samples(self.x, extent)?,
            AxisScale::from_samples(self.y, extent)?,
        ))
    }
}

fn check_finite(axis: &'static str, samples: &[f32]) -> Result<()> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteSample { axis, index }),
        None => Ok(()),
    }
}

/// Absolute pixel position of a mapped sample. The origin of the data space
/// is the bottom-left corner of the plot area.
#[must_use]
pub fn dot_center(x_offset: u32, y_offset: u32) -> (i64, i64) {
    let column = i64::from(BORDER + PLOT_BORDER) + i64::from(x_offset);
    let row = i64::from(HEIGHT - BORDER - PLOT_BORDER) - i64::from(y_offset);
    (column, row)
}

/// Stamp one square dot per sample.
///
/// # Errors
///
/// Returns an error if the series is empty.
pub fn draw_scatter(fb: &mut Framebuffer, series: &SampleSeries<'_>, color: Rgba) -> Result<()> {
    let (x_scale, y_scale) = series.scales()?;

    for (&x, &y) in series.x.iter().zip(series.y) {
        let (cx, cy) = dot_center(x_scale.pixel_offset(x), y_scale.pixel_offset(y));
        draw_dot(fb, cx, cy, DOT_SIZE, color);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &Framebuffer, color: Rgba) -> usize {
        fb.pixels().iter().filter(|&&p| p == color.to_packed()).count()
    }

    #[test]
    fn test_series_validation() {
        assert!(SampleSeries::new(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
        assert!(matches!(SampleSeries::new(&[], &[]), Err(Error::EmptyData)));
        assert!(matches!(
            SampleSeries::new(&[1.0, 2.0, 3.0], &[4.0, 5.0]),
            Err(Error::DataLengthMismatch { x_len: 3, y_len: 2 })
        ));
        assert!(matches!(
            SampleSeries::new(&[1.0, f32::NAN], &[1.0, 2.0]),
            Err(Error::NonFiniteSample { axis: "x", index: 1 })
        ));
        assert!(matches!(
            SampleSeries::new(&[1.0, 2.0], &[f32::INFINITY, 2.0]),
            Err(Error::NonFiniteSample { axis: "y", index: 0 })
        ));
    }

    #[test]
    fn test_dot_center_bottom_left_origin() {
        assert_eq!(dot_center(0, 0), (120, 880));
        assert_eq!(dot_center(760, 760), (880, 120));
    }

    #[test]
    fn test_extreme_points_land_in_corners() {
        let mut fb = Framebuffer::new();
        fb.fill(Rgba::WHITE);
        let series = SampleSeries::new(&[0.0, 10.0], &[-5.0, 5.0]).unwrap();
        draw_scatter(&mut fb, &series, Rgba::PURPLE).unwrap();

        assert_eq!(fb.get_pixel(120, 880), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(880, 120), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(118, 882), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(117, 880), Some(Rgba::WHITE));
        assert_eq!(count(&fb, Rgba::PURPLE), 50);
    }

    #[test]
    fn test_flat_series_is_centered() {
        let mut fb = Framebuffer::new();
        fb.fill(Rgba::WHITE);
        let series = SampleSeries::new(&[2.0, 2.0, 2.0], &[7.0, 7.0, 7.0]).unwrap();
        draw_scatter(&mut fb, &series, Rgba::PURPLE).unwrap();

        assert_eq!(fb.get_pixel(500, 500), Some(Rgba::PURPLE));
        assert_eq!(count(&fb, Rgba::PURPLE), 25);
    }

    #[test]
    fn test_flat_x_axis_only() {
        let mut fb = Framebuffer::new();
        fb.fill(Rgba::WHITE);
        let series = SampleSeries::new(&[3.0, 3.0], &[0.0, 1.0]).unwrap();
        draw_scatter(&mut fb, &series, Rgba::PURPLE).unwrap();

        assert_eq!(fb.get_pixel(500, 880), Some(Rgba::PURPLE));
        assert_eq!(fb.get_pixel(500, 120), Some(Rgba::PURPLE));
    }

    #[test]
    fn test_scatter_stays_inside_border() {
        let mut fb = Framebuffer::new();
        fb.fill(Rgba::WHITE);
        let x: Vec<f32> = (0..500).map(|i| (i as f32 * 0.37).sin() * 1e4).collect();
        let y: Vec<f32> = (0..500).map(|i| (i as f32 * 0.11).cos()).collect();
        let series = SampleSeries::new(&x, &y).unwrap();
        draw_scatter(&mut fb, &series, Rgba::PURPLE).unwrap();

        for (i, &p) in fb.pixels().iter().enumerate() {
            if p == Rgba::PURPLE.to_packed() {
                let (col, row) = (i as u32 % fb.width(), i as u32 / fb.width());
                assert!((118..=882).contains(&col) && (118..=882).contains(&row));
            }
        }
    }
}

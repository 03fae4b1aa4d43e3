//! Scale functions for data-to-pixel mappings.
//!
//! An [`AxisScale`] maps a raw sample onto an offset in `0..=extent` along
//! one axis of the plot area. The sample extent is computed once per axis
//! per plot with a SIMD reduction, not once per point.

use crate::error::{Error, Result};
use trueno::Vector;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale from a sample series' `[min, max]` onto `[0, extent]`.
///
/// A degenerate series (`min == max`) maps every value to the center of the
/// extent instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    min: f32,
    max: f32,
    extent: f32,
}

impl AxisScale {
    /// Create a scale from a known domain.
    #[must_use]
    pub fn new(min: f32, max: f32, extent: f32) -> Self {
        Self { min, max, extent }
    }

    /// Create a scale from the extent of a sample series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if `samples` is empty.
    pub fn from_samples(samples: &[f32], extent: f32) -> Result<Self> {
        let (min, max) = sample_extent(samples).ok_or(Error::EmptyData)?;
        Ok(Self::new(min, max, extent))
    }

    /// True when the series is flat.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Offset of the center of the extent.
    #[must_use]
    pub fn center(&self) -> f32 {
        (self.extent as u32 / 2) as f32
    }

    /// Whole-pixel offset of `value`, truncated toward zero.
    #[must_use]
    pub fn pixel_offset(&self, value: f32) -> u32 {
        self.scale(value) as u32
    }
}

impl Scale<f32, f32> for AxisScale {
    fn scale(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.center();
        }
        // f64 keeps `max - min` finite for any pair of finite f32 samples
        let t = (f64::from(value) - f64::from(self.min)) / (f64::from(self.max) - f64::from(self.min));
        (t * f64::from(self.extent)).clamp(0.0, f64::from(self.extent)) as f32
    }

    fn domain(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    fn range(&self) -> (f32, f32) {
        (0.0, self.extent)
    }
}

/// Minimum and maximum of a series in one pass, or `None` when empty.
#[must_use]
pub fn sample_extent(samples: &[f32]) -> Option<(f32, f32)> {
    if samples.is_empty() {
        return None;
    }

    let vec = Vector::from_slice(samples);
    let min = vec.min().unwrap_or(f32::NAN);
    let max = vec.max().unwrap_or(f32::NAN);

    if min.is_nan() || max.is_nan() {
        let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        return Some((min, max));
    }

    Some((min, max))
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

// SPDX-License-Identifier: MPL-2.0
//! Closed numeric interval covered by a slider.

use std::fmt;

/// Reasons a pair of bounds cannot form a [`SliderRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// One of the bounds is NaN or infinite.
    NonFinite,
    /// Both bounds are equal, so the range has zero width.
    Empty { value: f32 },
    /// The lower bound is greater than the upper bound.
    Inverted { min: f32, max: f32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NonFinite => write!(f, "range bounds must be finite"),
            RangeError::Empty { value } => {
                write!(f, "range is empty: min and max are both {}", value)
            }
            RangeError::Inverted { min, max } => {
                write!(f, "range is inverted: min {} is greater than max {}", min, max)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Immutable closed interval `[min, max]` with `min < max`.
///
/// # Example
///
/// ```
/// use range_slider::domain::slider::SliderRange;
///
/// let range = SliderRange::new(0.0, 100.0).unwrap();
/// assert_eq!(range.span(), 100.0);
/// assert_eq!(range.clamp(150.0), 100.0);
///
/// assert!(SliderRange::new(5.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    min: f32,
    max: f32,
}

impl SliderRange {
    /// Creates a range, rejecting non-finite, empty, or inverted bounds.
    pub fn new(min: f32, max: f32) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite);
        }
        if min == max {
            return Err(RangeError::Empty { value: min });
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Width of the interval (`max - min`), always positive.
    #[must_use]
    pub fn span(self) -> f32 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Snaps `value` to the nearest bound when it falls outside the range.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl TryFrom<std::ops::RangeInclusive<f32>> for SliderRange {
    type Error = RangeError;

    fn try_from(range: std::ops::RangeInclusive<f32>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_bounds() {
        let range = SliderRange::new(-10.0, 10.0).expect("valid range");
        assert_eq!(range.min(), -10.0);
        assert_eq!(range.max(), 10.0);
        assert_eq!(range.span(), 20.0);
    }

    #[test]
    fn new_rejects_degenerate_bounds() {
        assert_eq!(
            SliderRange::new(3.0, 3.0),
            Err(RangeError::Empty { value: 3.0 })
        );
        assert_eq!(
            SliderRange::new(5.0, 1.0),
            Err(RangeError::Inverted { min: 5.0, max: 1.0 })
        );
        assert_eq!(
            SliderRange::new(f32::NAN, 1.0),
            Err(RangeError::NonFinite)
        );
        assert_eq!(
            SliderRange::new(0.0, f32::INFINITY),
            Err(RangeError::NonFinite)
        );
    }

    #[test]
    fn clamp_snaps_to_nearest_bound() {
        let range = SliderRange::new(0.0, 100.0).unwrap();
        assert_eq!(range.clamp(-5.0), 0.0);
        assert_eq!(range.clamp(105.0), 100.0);
        assert_eq!(range.clamp(42.0), 42.0);
    }

    #[test]
    fn contains_includes_both_ends() {
        let range = SliderRange::new(0.0, 1.0).unwrap();
        assert!(range.contains(0.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.01));
    }

    #[test]
    fn try_from_inclusive_range() {
        let range = SliderRange::try_from(0.0..=100.0).unwrap();
        assert_eq!(range, SliderRange::default());
        assert!(SliderRange::try_from(1.0..=0.0).is_err());
    }

    #[test]
    fn error_display_mentions_bounds() {
        let err = RangeError::Inverted { min: 5.0, max: 1.0 };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("inverted"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Track geometry and the value <-> pixel mappings.

use super::SliderRange;

/// Pixel dimensions of a slider track, derived from the layout pass.
///
/// Locations are measured in track-local coordinates: `0.0` is the center of
/// a thumb resting on `range.min` and `track_width` is the center of a thumb
/// resting on `range.max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track_width: f32,
    pub thumb_size: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(track_width: f32, thumb_size: f32) -> Self {
        Self {
            track_width: track_width.max(0.0),
            thumb_size: thumb_size.max(0.0),
        }
    }

    /// Derives the geometry for a widget of `total_width` whose thumbs must
    /// stay inside its bounds (half a thumb of inset on each side).
    #[must_use]
    pub fn from_total_width(total_width: f32, thumb_size: f32) -> Self {
        Self::new(total_width - thumb_size, thumb_size)
    }

    /// Half the thumb diameter.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_size / 2.0
    }

    /// A zero-width track cannot map locations back to values.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.track_width <= 0.0
    }

    /// `(v - min) / (max - min) * track_width`
    #[must_use]
    pub fn location_for_value(&self, range: &SliderRange, value: f32) -> f32 {
        (value - range.min()) / range.span() * self.track_width
    }

    /// `x / track_width * (max - min) + min`
    #[must_use]
    pub fn value_for_location(&self, range: &SliderRange, location: f32) -> f32 {
        location / self.track_width * range.span() + range.min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn range() -> SliderRange {
        SliderRange::new(0.0, 100.0).unwrap()
    }

    #[test]
    fn locations_match_reference_layout() {
        let geometry = TrackGeometry::new(200.0, 28.0);
        assert_abs_diff_eq!(geometry.location_for_value(&range(), 0.0), 0.0);
        assert_abs_diff_eq!(geometry.location_for_value(&range(), 50.0), 100.0);
        assert_abs_diff_eq!(geometry.location_for_value(&range(), 100.0), 200.0);
    }

    #[test]
    fn value_for_location_inverts_location_for_value() {
        let range = SliderRange::new(-40.0, 60.0).unwrap();
        let geometry = TrackGeometry::new(317.0, 28.0);
        for value in [-40.0, -12.5, 0.0, 33.3, 60.0] {
            let location = geometry.location_for_value(&range, value);
            assert_abs_diff_eq!(
                geometry.value_for_location(&range, location),
                value,
                epsilon = F32_EPSILON
            );
        }
    }

    #[test]
    fn from_total_width_insets_half_thumb_each_side() {
        let geometry = TrackGeometry::from_total_width(228.0, 28.0);
        assert_abs_diff_eq!(geometry.track_width, 200.0);
        assert_abs_diff_eq!(geometry.thumb_offset(), 14.0);
    }

    #[test]
    fn narrow_bounds_produce_degenerate_track() {
        let geometry = TrackGeometry::from_total_width(20.0, 28.0);
        assert_abs_diff_eq!(geometry.track_width, 0.0);
        assert!(geometry.is_degenerate());
    }
}

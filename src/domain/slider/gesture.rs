// SPDX-License-Identifier: MPL-2.0
//! Drag handling for the two slider thumbs.
//!
//! Each handler is a pure function of the current geometry, the pointer
//! offset and the sibling thumb's value. Calling it twice with the same
//! inputs yields the same result.

use super::{RangeBinding, SliderRange, TrackGeometry};

/// Which thumb a gesture is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Lower,
    Upper,
}

/// What happens when a thumb is dragged past the limit set by its sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingPolicy {
    /// Ignore the sample; the thumb stays where the last accepted sample put it.
    #[default]
    Hold,
    /// Pin the thumb to the limit imposed by its sibling.
    Stop,
}

/// Result of feeding one pointer sample to a drag handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The pointer was inside the allowed span; the value follows it.
    Moved(f32),
    /// The pointer was outside the allowed span; the value was pinned.
    Clamped(f32),
    /// The sample was ignored.
    Held,
}

impl DragOutcome {
    /// The value written to the binding, if any.
    #[must_use]
    pub fn value(self) -> Option<f32> {
        match self {
            DragOutcome::Moved(value) | DragOutcome::Clamped(value) => Some(value),
            DragOutcome::Held => None,
        }
    }

    #[must_use]
    pub fn is_update(self) -> bool {
        self.value().is_some()
    }
}

/// Handles a pointer sample at track-local offset `x` for the lower thumb.
///
/// The lower thumb may travel from `0` up to
/// `min(location(upper) - thumb_size, track_width)`. Offsets left of the
/// track pin it to `range.min`. Every written value lies in `range`.
pub fn drag_lower<B>(
    binding: &mut B,
    x: f32,
    range: &SliderRange,
    geometry: &TrackGeometry,
    policy: CrossingPolicy,
) -> DragOutcome
where
    B: RangeBinding + ?Sized,
{
    let upper_location = geometry.location_for_value(range, binding.upper());
    let ceiling = (upper_location - geometry.thumb_size).min(geometry.track_width);

    let outcome = if (0.0..=ceiling).contains(&x) {
        DragOutcome::Moved(range.clamp(geometry.value_for_location(range, x)))
    } else if x < 0.0 {
        DragOutcome::Clamped(range.min())
    } else {
        match policy {
            CrossingPolicy::Hold => DragOutcome::Held,
            CrossingPolicy::Stop if ceiling < 0.0 => DragOutcome::Clamped(range.min()),
            CrossingPolicy::Stop => {
                DragOutcome::Clamped(range.clamp(geometry.value_for_location(range, ceiling)))
            }
        }
    };

    if let Some(value) = outcome.value() {
        binding.set_lower(value);
    }
    outcome
}

/// Handles a pointer sample at track-local offset `x` for the upper thumb.
///
/// The upper thumb may travel from `location(lower) + thumb_size / 2` up to
/// `track_width`. Offsets at or right of the track end pin it to exactly
/// `range.max`; the linear mapping can round past it there.
pub fn drag_upper<B>(
    binding: &mut B,
    x: f32,
    range: &SliderRange,
    geometry: &TrackGeometry,
    policy: CrossingPolicy,
) -> DragOutcome
where
    B: RangeBinding + ?Sized,
{
    let lower_location = geometry.location_for_value(range, binding.lower());
    let floor = lower_location + geometry.thumb_offset();

    let outcome = if x >= geometry.track_width {
        DragOutcome::Clamped(range.max())
    } else if x >= floor {
        DragOutcome::Moved(range.clamp(geometry.value_for_location(range, x)))
    } else {
        match policy {
            CrossingPolicy::Hold => DragOutcome::Held,
            CrossingPolicy::Stop if floor > geometry.track_width => {
                DragOutcome::Clamped(range.max())
            }
            CrossingPolicy::Stop => {
                DragOutcome::Clamped(range.clamp(geometry.value_for_location(range, floor)))
            }
        }
    };

    if let Some(value) = outcome.value() {
        binding.set_upper(value);
    }
    outcome
}

/// Dispatches a pointer sample to the handler for `thumb`.
pub fn drag<B>(
    thumb: Thumb,
    binding: &mut B,
    x: f32,
    range: &SliderRange,
    geometry: &TrackGeometry,
    policy: CrossingPolicy,
) -> DragOutcome
where
    B: RangeBinding + ?Sized,
{
    match thumb {
        Thumb::Lower => drag_lower(binding, x, range, geometry, policy),
        Thumb::Upper => drag_upper(binding, x, range, geometry, policy),
    }
}

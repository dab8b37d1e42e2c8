// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles press-drag-release interaction state for the range slider thumbs.

use crate::domain::slider::{Thumb, TrackGeometry};

/// Thumb, geometry and track origin captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub thumb: Thumb,
    pub geometry: TrackGeometry,
    /// Absolute x coordinate of track location `0.0`.
    pub track_start: f32,
}

impl DragSession {
    /// Converts an absolute cursor x coordinate to a track-local offset.
    #[must_use]
    pub fn track_offset(&self, cursor_x: f32) -> f32 {
        cursor_x - self.track_start
    }
}

/// Manages the state of one thumb drag gesture.
///
/// The track geometry is captured when the gesture starts and reused for every
/// sample until release, so a resize during the drag cannot make the thumb jump.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Active gesture, if any
    pub session: Option<DragSession>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, thumb: Thumb, geometry: TrackGeometry, track_start: f32) {
        self.session = Some(DragSession {
            thumb,
            geometry,
            track_start,
        });
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the captured gesture while one is active
    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }
}

/// Finds the thumb under a track-local offset `x`.
///
/// A thumb is hit when `x` lies within half a thumb of its center. When the
/// thumbs overlap the nearer center wins; on a tie the upper thumb is picked
/// at or right of the shared center, the lower thumb otherwise.
#[must_use]
pub fn thumb_at(x: f32, lower_location: f32, upper_location: f32, thumb_size: f32) -> Option<Thumb> {
    let reach = thumb_size / 2.0;
    let lower_distance = (x - lower_location).abs();
    let upper_distance = (x - upper_location).abs();

    match (lower_distance <= reach, upper_distance <= reach) {
        (false, false) => None,
        (true, false) => Some(Thumb::Lower),
        (false, true) => Some(Thumb::Upper),
        (true, true) => {
            if lower_distance < upper_distance {
                Some(Thumb::Lower)
            } else if upper_distance < lower_distance || x >= upper_location {
                Some(Thumb::Upper)
            } else {
                Some(Thumb::Lower)
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Range slider domain model.
//!
//! The slider maps a closed numeric [`SliderRange`] onto a horizontal track
//! described by [`TrackGeometry`]. Two values, owned by the caller and
//! accessed through [`RangeBinding`], are updated by the drag handlers in
//! [`gesture`] as pointer samples arrive.

pub mod geometry;
pub mod gesture;
pub mod range;
pub mod values;

pub use geometry::TrackGeometry;
pub use gesture::{drag, drag_lower, drag_upper, CrossingPolicy, DragOutcome, Thumb};
pub use range::{RangeError, SliderRange};
pub use values::{RangeBinding, RangeValues};

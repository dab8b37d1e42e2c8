// SPDX-License-Identifier: MPL-2.0
//! The two bound values a range slider edits.

use super::SliderRange;

/// Read/write access to the lower and upper values of a range slider.
///
/// The slider never owns these values. It reads them fresh on every pointer
/// sample and writes through this trait, so any caller-owned storage can back
/// a slider.
pub trait RangeBinding {
    fn lower(&self) -> f32;
    fn upper(&self) -> f32;
    fn set_lower(&mut self, value: f32);
    fn set_upper(&mut self, value: f32);
}

/// Lower and upper bound selected on a slider.
///
/// `lower <= upper` is maintained by the drag handlers rather than by this
/// type; construct with [`RangeValues::clamped_to`] when the inputs are
/// untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeValues {
    pub lower: f32,
    pub upper: f32,
}

impl RangeValues {
    #[must_use]
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Clamps both values into `range` and swaps them if they are out of order.
    #[must_use]
    pub fn clamped_to(self, range: &SliderRange) -> Self {
        let lower = range.clamp(self.lower);
        let upper = range.clamp(self.upper);
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }
}

impl RangeBinding for RangeValues {
    fn lower(&self) -> f32 {
        self.lower
    }

    fn upper(&self) -> f32 {
        self.upper
    }

    fn set_lower(&mut self, value: f32) {
        self.lower = value;
    }

    fn set_upper(&mut self, value: f32) {
        self.upper = value;
    }
}

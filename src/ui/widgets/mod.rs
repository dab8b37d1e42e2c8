// SPDX-License-Identifier: MPL-2.0
pub mod range_slider;

pub use range_slider::{range_slider, RangeSlider};

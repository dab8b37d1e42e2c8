// SPDX-License-Identifier: MPL-2.0
//! `range_slider` is a dual-handle range slider for the Iced GUI framework.
//!
//! The slider edits a `lower`/`upper` pair inside a fixed closed range. The
//! geometry-to-value mapping and drag handling live in [`domain::slider`] and
//! have no GUI dependencies; [`ui::widgets::RangeSlider`] wires them into an
//! Iced widget. A small host application in [`app`] demonstrates it with
//! Fluent localization and a `settings.toml` configuration.
//!
//! ```no_run
//! use ::range_slider::domain::slider::{RangeValues, SliderRange};
//! use ::range_slider::ui::widgets::range_slider;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Changed(RangeValues),
//! }
//!
//! let range = SliderRange::default();
//! let slider = range_slider(range, RangeValues::new(0.0, 50.0), Message::Changed);
//! # let _ = slider;
//! ```

#![doc(html_root_url = "https://docs.rs/range_slider/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;

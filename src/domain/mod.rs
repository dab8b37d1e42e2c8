// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core slider logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`slider`]: Range slider model ([`SliderRange`](slider::SliderRange),
//!   [`RangeValues`](slider::RangeValues), [`TrackGeometry`](slider::TrackGeometry))
//!   and the thumb drag handlers ([`drag_lower`](slider::drag_lower),
//!   [`drag_upper`](slider::drag_upper))

pub mod slider;

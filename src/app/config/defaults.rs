// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Slider Range Defaults
// ==========================================================================

/// Default lower bound of the slider range.
pub const DEFAULT_RANGE_MIN: f32 = 0.0;

/// Default upper bound of the slider range.
pub const DEFAULT_RANGE_MAX: f32 = 100.0;

// ==========================================================================
// Initial Selection Defaults
// ==========================================================================

/// Lower value selected when the window opens.
pub const DEFAULT_LOWER_VALUE: f32 = 0.0;

/// Upper value selected when the window opens.
pub const DEFAULT_UPPER_VALUE: f32 = 50.0;

// ==========================================================================
// Readout
// ==========================================================================

/// Decimal places shown in the value readout.
pub const READOUT_DECIMALS: usize = 2;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_RANGE_MIN < DEFAULT_RANGE_MAX);
    assert!(DEFAULT_LOWER_VALUE >= DEFAULT_RANGE_MIN);
    assert!(DEFAULT_UPPER_VALUE <= DEFAULT_RANGE_MAX);
    assert!(DEFAULT_LOWER_VALUE <= DEFAULT_UPPER_VALUE);
};

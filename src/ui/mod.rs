// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`widgets`] - Custom Iced widgets (range slider)
//! - [`state`] - Interaction state kept by widgets (drag gestures)
//! - [`styles`] - Centralized styling (slider, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;

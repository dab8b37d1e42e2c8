// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept by widgets between events, separated from the
//! widgets' layout and drawing code.

pub mod drag;

pub use drag::{DragSession, DragState};

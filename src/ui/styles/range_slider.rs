// SPDX-License-Identifier: MPL-2.0
//! Range slider style definitions.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::{Color, Shadow, Theme};

/// Interaction state of a range slider, as seen by its style function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    /// The cursor is over one of the thumbs.
    Hovered,
    /// A thumb is being dragged.
    Dragged,
}

/// Appearance of a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Full-width background track.
    pub rail: Color,
    /// Segment between the two thumbs.
    pub selection: Color,
    pub rail_radius: f32,
    pub thumb: Color,
    pub thumb_border_color: Color,
    pub thumb_border_width: f32,
    pub thumb_shadow: Shadow,
}

/// Default style: gray rail, green selection, white thumbs with a soft shadow.
pub fn default(theme: &Theme, status: Status) -> Style {
    let colors = ColorScheme::for_theme(theme);

    let (selection, thumb_shadow) = match status {
        Status::Dragged => (colors.selection_active, shadow::THUMB_ACTIVE),
        Status::Active | Status::Hovered => (colors.selection, shadow::THUMB),
    };

    Style {
        rail: colors.rail,
        selection,
        rail_radius: radius::SM,
        thumb: colors.thumb,
        thumb_border_color: colors.thumb_border,
        thumb_border_width: if status == Status::Hovered { 2.0 } else { 1.0 },
        thumb_shadow,
    }
}

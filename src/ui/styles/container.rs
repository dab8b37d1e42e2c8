// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background for the host window, following the active theme.
pub fn surface(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Banner shown when the configuration could not be applied.
pub fn notice(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..colors.warning
        })),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.warning,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_uses_warning_border() {
        let style = notice(&Theme::Light);
        assert_eq!(style.border.color, ColorScheme::light().warning);
    }

    #[test]
    fn surface_tracks_theme() {
        let light = surface(&Theme::Light);
        let dark = surface(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used by the range slider and its host view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid) and host padding
- **Sizing**: Slider dimensions
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use range_slider::ui::design_tokens::{palette, opacity, sizing};
use iced::Color;

let rail = Color {
    a: opacity::RAIL,
    ..palette::GRAY_400
};

let thumb = sizing::THUMB; // 28px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Selection colors (green scale)
    pub const SELECTION_400: Color = Color::from_rgb(0.4, 0.8, 0.45);
    pub const SELECTION_500: Color = Color::from_rgb(0.2, 0.78, 0.35);
    pub const SELECTION_600: Color = Color::from_rgb(0.15, 0.65, 0.3);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Unselected part of the track.
    pub const RAIL: f32 = 0.3;
    /// Thumb drop shadow.
    pub const THUMB_SHADOW: f32 = 0.12;
    /// Thumb drop shadow while dragging.
    pub const THUMB_SHADOW_ACTIVE: f32 = 0.2;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;

    // Host view padding around the slider
    pub const SLIDER_VERTICAL: f32 = 20.0;
    pub const SLIDER_LEADING: f32 = 30.0;
    pub const SLIDER_TRAILING: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Thumb diameter.
    pub const THUMB: f32 = 28.0;
    /// Track (rail) thickness.
    pub const RAIL_HEIGHT: f32 = 4.0;
    /// Default widget height; leaves room for the thumb shadow.
    pub const RANGE_SLIDER_HEIGHT: f32 = 48.0;
    /// Smallest thumb the builder accepts.
    pub const MIN_THUMB: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Notices and small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft drop shadow under a resting thumb.
    pub const THUMB: Shadow = Shadow {
        color: Color {
            a: opacity::THUMB_SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 10.0,
    };

    /// Slightly stronger shadow for the thumb being dragged.
    pub const THUMB_ACTIVE: Shadow = Shadow {
        color: Color {
            a: opacity::THUMB_SHADOW_ACTIVE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::RAIL > 0.0 && opacity::RAIL < 1.0);
    assert!(opacity::THUMB_SHADOW_ACTIVE > opacity::THUMB_SHADOW);

    // Sizing validation
    assert!(sizing::THUMB >= sizing::MIN_THUMB);
    assert!(sizing::RANGE_SLIDER_HEIGHT > sizing::THUMB);
    assert!(sizing::THUMB > sizing::RAIL_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

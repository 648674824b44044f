// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All sizes, colors and radii used by the composer screen live here.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_feed::ui::design_tokens::{palette, spacing};

let padding = spacing::SM; // 10px, the screen gutter
let accent = palette::BRAND_500;
# let _ = (padding, accent);
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
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.16);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.22, 0.22);
    /// `#777`, icon tint.
    pub const GRAY_500: Color = Color::from_rgb(0.467, 0.467, 0.467);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.85);
    /// `#eee`, input and card surface.
    pub const GRAY_100: Color = Color::from_rgb(0.933, 0.933, 0.933);

    // Brand colors (light blue scale around #039be5)
    pub const BRAND_400: Color = Color::from_rgb(0.16, 0.71, 0.96);
    pub const BRAND_500: Color = Color::from_rgb(0.012, 0.608, 0.898);
    pub const BRAND_600: Color = Color::from_rgb(0.012, 0.533, 0.82);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    /// Screen gutter and gap between cards.
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    /// Composer icons.
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;

    pub const INPUT_HEIGHT: f32 = 42.0;
    pub const VIDEO_CONTROLS_HEIGHT: f32 = 36.0;

    /// Horizontal space taken away from the window width before sizing media.
    pub const FEED_MARGIN: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Post text, input text and button labels.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Timestamps, small info
    pub const CAPTION: f32 = 12.0;

    /// Line height multiplier used when estimating wrapped text height.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    /// Post cards.
    pub const MD: f32 = 10.0;
    /// Input field and "Post" button.
    pub const PILL: f32 = 20.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::FEED_MARGIN == spacing::SM * 2.0);

    assert!(radius::PILL > radius::MD);
    assert!(radius::MD > radius::SM);
};

// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the composer screen.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_placeholder: Color,

    pub icon: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub on_brand: Color,

    /// Backdrop behind video frames.
    pub media_backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_placeholder: palette::GRAY_500,

            icon: palette::GRAY_500,

            brand_primary: palette::BRAND_500,
            brand_hover: palette::BRAND_400,
            on_brand: palette::WHITE,

            media_backdrop: palette::BLACK,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_placeholder: palette::GRAY_400,

            icon: palette::GRAY_400,

            brand_primary: palette::BRAND_600,
            brand_hover: palette::BRAND_500,
            on_brand: palette::WHITE,

            media_backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching an iced theme, for use inside style functions.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_white_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.99);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn brand_stays_blue_in_both_schemes() {
        assert!(ColorScheme::light().brand_primary.b > ColorScheme::light().brand_primary.r);
        assert!(ColorScheme::dark().brand_primary.b > ColorScheme::dark().brand_primary.r);
    }

    #[test]
    fn for_theme_follows_palette_darkness() {
        assert!(ColorScheme::for_theme(&Theme::Light).surface_primary.r > 0.99);
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_primary.r < 0.2);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        let _ = ThemeMode::System.iced_theme();
    }
}

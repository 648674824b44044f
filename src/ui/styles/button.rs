// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped brand button, used for "Post".
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_hover,
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.on_brand,
        border: Border {
            color: background,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::SM,
            _ => shadow::NONE,
        },
        snap: true,
    }
}

/// Borderless button wrapping an icon.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
            colors.surface_secondary,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.icon,
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent round button drawn over a video frame.
pub fn media_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Borderless pill on the secondary surface, used by the composer.
pub fn composer(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => colors.brand_primary,
        _ => Color::TRANSPARENT,
    };

    text_input::Style {
        background: Background::Color(colors.surface_secondary),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        icon: colors.icon,
        placeholder: colors.text_placeholder,
        value: colors.text_primary,
        selection: Color {
            a: 0.3,
            ..colors.brand_primary
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn composer_input_is_light_gray_pill() {
        let style = composer(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.background, Background::Color(palette::GRAY_100));
        assert_eq!(style.border.radius, radius::PILL.into());
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn focus_shows_brand_border() {
        let style = composer(
            &Theme::Light,
            text_input::Status::Focused { is_hovered: false },
        );
        assert_eq!(style.border.color, palette::BRAND_500);
    }
}

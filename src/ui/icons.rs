// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Each icon is a single-path 24x24 glyph. Handles are created once and
//! cached, and the glyph is tinted through the widget style so the same
//! data serves both themes.

use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a cached [`Svg`].
macro_rules! define_icon {
    ($name:ident, $data:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const PICTURE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M21 19V5c0-1.1-.9-2-2-2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2zM8.5 13.5l2.5 3.01L14.5 12l4.5 6H5l3.5-4.5z"/></svg>"#;
const VIDEO_CAMERA_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4z"/></svg>"#;
const PLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M8 5v14l11-7z"/></svg>"#;
const PAUSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z"/></svg>"#;
const REPLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 5V1L7 6l5 5V7c3.31 0 6 2.69 6 6s-2.69 6-6 6-6-2.69-6-6H4c0 4.42 3.58 8 8 8s8-3.58 8-8-3.58-8-8-8z"/></svg>"#;

define_icon!(picture, PICTURE_SVG, "Picture frame with mountains.");
define_icon!(video_camera, VIDEO_CAMERA_SVG, "Video camera seen from the side.");
define_icon!(play, PLAY_SVG, "Triangle pointing right.");
define_icon!(pause, PAUSE_SVG, "Two vertical bars.");
define_icon!(replay, REPLAY_SVG, "Circular arrow.");

/// Sizes an icon as a square.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with the theme's icon color.
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(ColorScheme::for_theme(theme).icon),
    })
}

/// Tints an icon with a fixed color, for use over media.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sources_are_square_svgs() {
        for data in [
            PICTURE_SVG,
            VIDEO_CAMERA_SVG,
            PLAY_SVG,
            PAUSE_SVG,
            REPLAY_SVG,
        ] {
            assert!(data.starts_with("<svg"));
            assert!(data.contains(r#"viewBox="0 0 24 24""#));
            assert!(data.ends_with("</svg>"));
        }
    }

    #[test]
    fn icon_handles_are_cached() {
        let _ = picture();
        let _ = picture();
        let _ = sized(play(), 16.0);
    }
}

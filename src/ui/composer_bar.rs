// SPDX-License-Identifier: MPL-2.0
//! Composer bar: text field, media buttons and the "Post" button.
//!
//! Nothing here is ever disabled. A pending pick shows a small indicator
//! next to its icon but doesn't block typing, posting or picking again.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, row, svg::Svg, text, text_input, Row};
use iced::{Alignment, Element, Length};

/// Total height of the bar, padding included.
pub const BAR_HEIGHT: f32 = sizing::INPUT_HEIGHT + 2.0 * spacing::SM;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TextChanged(String),
    PickImage,
    PickVideo,
    Post,
}

/// What the bar needs to know about the draft.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub text: &'a str,
    pub has_image: bool,
    pub has_video: bool,
    pub image_pending: bool,
    pub video_pending: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let input = text_input(&ctx.i18n.tr("composer-placeholder"), ctx.text)
        .on_input(Message::TextChanged)
        .padding([spacing::XS, spacing::MD])
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(styles::text_input::composer);

    let image_button = media_button(
        icons::picture(),
        ctx.has_image,
        ctx.image_pending,
        Message::PickImage,
        ctx.i18n.tr("composer-pick-image-tooltip"),
        ctx.i18n,
    );
    let video_button = media_button(
        icons::video_camera(),
        ctx.has_video,
        ctx.video_pending,
        Message::PickVideo,
        ctx.i18n.tr("composer-pick-video-tooltip"),
        ctx.i18n,
    );

    let post_button = button(text(ctx.i18n.tr("composer-post-button")).size(typography::BODY_LG))
        .on_press(Message::Post)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    row![input, image_button, video_button, post_button]
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .height(Length::Fixed(BAR_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

fn media_button<'a>(
    icon: Svg<'static>,
    attached: bool,
    pending: bool,
    on_press: Message,
    tip: String,
    i18n: &I18n,
) -> Element<'a, Message> {
    let icon = icons::sized(icon, sizing::ICON_MD);
    let icon = if attached {
        icons::tinted(icon, palette::BRAND_500)
    } else {
        icons::themed(icon)
    };

    let mut content = Row::new().push(icon).align_y(Alignment::Center);
    let tip = if pending {
        content = content.push(text("…").size(typography::CAPTION));
        format!("{tip} ({})", i18n.tr("composer-pending"))
    } else {
        tip
    };

    let button = button(content)
        .on_press(on_press)
        .padding(spacing::XS)
        .style(styles::button::icon);

    styles::tooltip::styled(button, tip, styles::tooltip::Position::Bottom).into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is the composer bar on top of the feed.

use super::Message;
use crate::composer::ComposerState;
use crate::domain::{MediaKind, PostId};
use crate::i18n::fluent::I18n;
use crate::ui::composer_bar::{self, ViewContext as ComposerViewContext};
use crate::ui::feed::{self, ScrollMetrics};
use crate::ui::styles;
use crate::video_player::VideoPlayer;
use iced::widget::{column, container};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub composer: &'a ComposerState,
    pub players: &'a HashMap<PostId, VideoPlayer>,
    pub viewport_width: f32,
    pub scroll: ScrollMetrics,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let draft = ctx.composer.draft();
    let bar = composer_bar::view(ComposerViewContext {
        i18n: ctx.i18n,
        text: &draft.text,
        has_image: draft.image.is_some(),
        has_video: draft.video.is_some(),
        image_pending: ctx.composer.is_pending(MediaKind::Photo),
        video_pending: ctx.composer.is_pending(MediaKind::Video),
    })
    .map(Message::from);

    let list = feed::list::view(
        ctx.composer.feed(),
        ctx.players,
        ctx.i18n,
        feed::media_side(ctx.viewport_width),
        ctx.scroll,
    )
    .map(Message::from);

    container(column![bar, list].width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Post card presenter.
//!
//! [`card_blocks`] turns a post into a flat list of blocks. It is pure, so
//! the list renderer can call it for any post, any number of times and in
//! any order. [`view`] maps those blocks to widgets.

use super::Message;
use crate::domain::{MediaRef, Post, PostId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use crate::video_player::{format_time, PlaybackState, VideoPlayer};
use iced::widget::{button, column, container, image, row, text, Column, Space};
use iced::{Alignment, ContentFit, Element, Length};

/// Average glyph width relative to the font size, for wrap estimates.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Messages emitted by a video block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoMessage {
    /// Play when paused or ended, pause when playing.
    TogglePlayback,
}

/// One visual part of a card, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBlock {
    Text(String),
    Image {
        source: MediaRef,
        side: f32,
        fit: ContentFit,
    },
    Video {
        source: MediaRef,
        side: f32,
        fit: ContentFit,
    },
}

/// Side length of the square media frames for a given window width.
#[must_use]
pub fn media_side(viewport_width: f32) -> f32 {
    (viewport_width - sizing::FEED_MARGIN).max(0.0)
}

/// Describes a post: text if non-empty, then image, then video.
#[must_use]
pub fn card_blocks(post: &Post, side: f32) -> Vec<CardBlock> {
    let mut blocks = Vec::with_capacity(3);

    if !post.text().is_empty() {
        blocks.push(CardBlock::Text(post.text().to_owned()));
    }
    if let Some(source) = post.image() {
        blocks.push(CardBlock::Image {
            source: source.clone(),
            side,
            fit: ContentFit::Cover,
        });
    }
    if let Some(source) = post.video() {
        blocks.push(CardBlock::Video {
            source: source.clone(),
            side,
            fit: ContentFit::Contain,
        });
    }

    blocks
}

/// Height the card for `post` is expected to take, without the gap below it.
#[must_use]
pub fn estimated_height(post: &Post, side: f32) -> f32 {
    card_blocks(post, side)
        .iter()
        .map(|block| match block {
            CardBlock::Text(value) => text_block_height(value, side),
            CardBlock::Image { side, .. } => *side,
            CardBlock::Video { side, .. } => side + sizing::VIDEO_CONTROLS_HEIGHT,
        })
        .sum()
}

fn text_block_height(value: &str, width: f32) -> f32 {
    let usable = (width - 2.0 * spacing::SM).max(1.0);
    let chars_per_line = (usable / (typography::BODY_LG * GLYPH_WIDTH_RATIO)).floor().max(1.0) as usize;

    let lines: usize = value
        .split('\n')
        .map(|line| line.chars().count().div_ceil(chars_per_line).max(1))
        .sum();

    lines as f32 * typography::BODY_LG * typography::LINE_HEIGHT + 2.0 * spacing::SM
}

/// Renders a post card.
pub fn view<'a>(
    post: &Post,
    player: Option<&'a VideoPlayer>,
    i18n: &'a I18n,
    side: f32,
) -> Element<'a, Message> {
    let id = post.id();
    let blocks = card_blocks(post, side).into_iter().map(|block| match block {
        CardBlock::Text(value) => container(text(value).size(typography::BODY_LG))
            .padding(spacing::SM)
            .width(Length::Fill)
            .into(),
        CardBlock::Image { source, side, fit } => image_block(&source, side, fit),
        CardBlock::Video { side, fit, .. } => video_block(id, player, i18n, side, fit),
    });

    container(Column::with_children(blocks))
        .width(Length::Fixed(side))
        .style(styles::container::card)
        .into()
}

fn image_block<'a>(source: &MediaRef, side: f32, fit: ContentFit) -> Element<'a, Message> {
    match source.to_path() {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(fit)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .into(),
        None => empty_frame(side),
    }
}

fn empty_frame<'a>(side: f32) -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(styles::container::media_backdrop)
        .into()
}

fn video_block<'a>(
    id: PostId,
    player: Option<&'a VideoPlayer>,
    i18n: &'a I18n,
    side: f32,
    fit: ContentFit,
) -> Element<'a, Message> {
    let Some(player) = player else {
        return column![
            empty_frame(side),
            unavailable_label(i18n),
        ]
        .into();
    };

    let frame: Element<'a, Message> = match (player.state(), player.display_frame()) {
        (PlaybackState::Failed { .. }, _) | (_, None) => empty_frame(side),
        (_, Some(handle)) => container(
            image(handle.clone())
                .content_fit(fit)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(styles::container::media_backdrop)
        .into(),
    };

    let controls: Element<'a, Message> = if player.state().error_message().is_some() {
        unavailable_label(i18n)
    } else {
        controls(id, player, i18n)
    };

    column![frame, controls].into()
}

fn controls<'a>(id: PostId, player: &'a VideoPlayer, i18n: &'a I18n) -> Element<'a, Message> {
    let (icon, tip) = match player.state() {
        state if state.is_playing() => (icons::pause(), i18n.tr("video-pause-tooltip")),
        PlaybackState::Ended => (icons::replay(), i18n.tr("video-replay-tooltip")),
        _ => (icons::play(), i18n.tr("video-play-tooltip")),
    };

    let toggle = button(icons::tinted(icons::sized(icon, sizing::ICON_SM), palette::WHITE))
        .on_press(Message::Video(id, VideoMessage::TogglePlayback))
        .padding(spacing::XXS)
        .style(styles::button::media_control);

    let time = text(time_label(player.position_secs(), player.duration_secs()))
        .size(typography::CAPTION);

    row![
        styles::tooltip::styled(toggle, tip, styles::tooltip::Position::Top),
        time,
    ]
    .spacing(spacing::XS)
    .padding([0.0, spacing::XS])
    .height(Length::Fixed(sizing::VIDEO_CONTROLS_HEIGHT))
    .align_y(Alignment::Center)
    .into()
}

fn unavailable_label<'a>(i18n: &I18n) -> Element<'a, Message> {
    container(text(i18n.tr("video-unavailable")).size(typography::CAPTION))
        .padding([0.0, spacing::XS])
        .height(Length::Fixed(sizing::VIDEO_CONTROLS_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

/// `elapsed / total`, or just `elapsed` while the duration is unknown.
#[must_use]
pub fn time_label(position_secs: f64, duration_secs: Option<f64>) -> String {
    match duration_secs {
        Some(total) => format!("{} / {}", format_time(position_secs), format_time(total)),
        None => format_time(position_secs),
    }
}

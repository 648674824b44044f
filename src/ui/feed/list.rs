// SPDX-License-Identifier: MPL-2.0
//! Windowed feed list.
//!
//! Only the cards intersecting the viewport (plus a few on either side) are
//! built. Everything above and below is replaced by a spacer of the
//! estimated height, so the scrollbar still reflects the whole feed.

use super::{card, Message};
use crate::domain::{Feed, PostId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::video_player::VideoPlayer;
use iced::widget::scrollable::Viewport;
use iced::widget::{column, container, keyed_column, scrollable, Space};
use iced::{Element, Length, Padding};
use std::collections::HashMap;
use std::ops::Range;

/// Cards built beyond each edge of the viewport.
pub const OVERSCAN: usize = 2;

/// Scroll position and visible height of the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            offset_y: 0.0,
            viewport_height,
        }
    }

    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        }
    }
}

/// Which items to build and how much space to reserve around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub range: Range<usize>,
    pub space_before: f32,
    pub space_after: f32,
}

/// Indices of the items intersecting `[offset, offset + viewport)`, widened
/// by `overscan` on each side.
///
/// `heights` are the per-item heights in display order, gaps included.
#[must_use]
pub fn visible_range(heights: &[f32], offset: f32, viewport: f32, overscan: usize) -> Range<usize> {
    let len = heights.len();
    let top = offset.max(0.0);
    let bottom = top + viewport.max(0.0);

    let mut first = len;
    let mut end = len;
    let mut y = 0.0;
    for (index, height) in heights.iter().enumerate() {
        if first == len && y + height > top {
            first = index;
        }
        if y >= bottom {
            end = index;
            break;
        }
        y += height;
    }

    let start = first.min(end).saturating_sub(overscan);
    start..(end + overscan).min(len)
}

/// Computes the [`Window`] for the given heights and scroll metrics.
#[must_use]
pub fn window(heights: &[f32], metrics: ScrollMetrics, overscan: usize) -> Window {
    let range = visible_range(heights, metrics.offset_y, metrics.viewport_height, overscan);
    Window {
        space_before: heights[..range.start].iter().sum(),
        space_after: heights[range.end..].iter().sum(),
        range,
    }
}

/// Per-item heights for the feed, including the gap below each card.
#[must_use]
pub fn item_heights(feed: &Feed, side: f32) -> Vec<f32> {
    feed.iter()
        .map(|post| card::estimated_height(post, side) + spacing::SM)
        .collect()
}

/// Renders the scrollable feed.
pub fn view<'a>(
    feed: &Feed,
    players: &'a HashMap<PostId, VideoPlayer>,
    i18n: &'a I18n,
    side: f32,
    metrics: ScrollMetrics,
) -> Element<'a, Message> {
    let heights = item_heights(feed, side);
    let window = window(&heights, metrics, OVERSCAN);

    let cards = feed
        .iter()
        .skip(window.range.start)
        .take(window.range.len())
        .map(|post| {
            let card = card::view(post, players.get(&post.id()), i18n, side);
            let item: Element<'a, Message> = container(card)
                .padding(Padding {
                    bottom: spacing::SM,
                    ..Padding::ZERO
                })
                .into();
            (post.id().value(), item)
        });

    let content = column![
        Space::new().height(Length::Fixed(window.space_before)),
        keyed_column(cards),
        Space::new().height(Length::Fixed(window.space_after)),
    ]
    .width(Length::Fill)
    .align_x(iced::Alignment::Center);

    scrollable(content)
        .on_scroll(|viewport: Viewport| Message::Scrolled(ScrollMetrics::from_viewport(&viewport)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

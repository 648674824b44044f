// SPDX-License-Identifier: MPL-2.0
//! The post feed: card presenter and windowed list.

pub mod card;
pub mod list;

use crate::domain::PostId;

pub use card::{card_blocks, estimated_height, media_side, CardBlock, VideoMessage};
pub use list::{visible_range, ScrollMetrics};

/// Messages emitted by the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Video(PostId, VideoMessage),
    Scrolled(ScrollMetrics),
}

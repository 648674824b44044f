// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{MediaKind, PickerOutcome, PostId};
use crate::media::{RgbaFrame, VideoMetadata};
use crate::ui::composer_bar;
use crate::ui::feed::{self, ScrollMetrics, VideoMessage};
use crate::video_player::PlaybackMessage;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    TextChanged(String),
    PickImage,
    PickVideo,
    /// A picker request finished, one way or another.
    PickerResolved {
        kind: MediaKind,
        outcome: PickerOutcome,
    },
    Post,
    Video(PostId, VideoMessage),
    Playback(PostId, PlaybackMessage),
    /// First frame and metadata of a posted video, read in the background.
    PosterLoaded {
        post_id: PostId,
        result: Result<(RgbaFrame, VideoMetadata), String>,
    },
    FeedScrolled(ScrollMetrics),
    WindowResized {
        width: f32,
        height: f32,
    },
}

impl From<composer_bar::Message> for Message {
    fn from(message: composer_bar::Message) -> Self {
        match message {
            composer_bar::Message::TextChanged(value) => Message::TextChanged(value),
            composer_bar::Message::PickImage => Message::PickImage,
            composer_bar::Message::PickVideo => Message::PickVideo,
            composer_bar::Message::Post => Message::Post,
        }
    }
}

impl From<feed::Message> for Message {
    fn from(message: feed::Message) -> Self {
        match message {
            feed::Message::Video(post_id, video) => Message::Video(post_id, video),
            feed::Message::Scrolled(metrics) => Message::FeedScrolled(metrics),
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (picked photos).
    /// Takes precedence over `ICED_FEED_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FEED_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Event and playback subscriptions for the application.

use super::Message;
use crate::domain::PostId;
use crate::video_player::{self, VideoPlayer};
use iced::{event, window, Subscription};
use std::collections::HashMap;

/// Window resizes, which drive the media side and the visible range.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    })
}

/// One decoder subscription per player that is loading or playing.
///
/// Dropping a player from this batch (idle or failed) stops its decoder.
pub fn create_video_subscription(players: &HashMap<PostId, VideoPlayer>) -> Subscription<Message> {
    Subscription::batch(players.values().filter_map(|player| {
        player.playback_id().map(|id| {
            video_player::video_playback(id, player.source().to_path_buf())
                .map(|(post_id, message)| Message::Playback(post_id, message))
        })
    }))
}

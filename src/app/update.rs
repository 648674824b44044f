// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch, and returns the follow-up task.

use super::Message;
use crate::application::port::SharedPicker;
use crate::composer::{gateway, ComposerState};
use crate::config::PickerConfig;
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::domain::{MediaKind, MediaRef, PickerOutcome, Post, PostId};
use crate::media::{self, RgbaFrame, VideoMetadata};
use crate::ui::composer_bar;
use crate::ui::feed::{card, list, ScrollMetrics, VideoMessage};
use crate::video_player::{PlaybackMessage, VideoPlayer};
use iced::Task;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub composer: &'a mut ComposerState,
    pub players: &'a mut HashMap<PostId, VideoPlayer>,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub picker: &'a SharedPicker,
    pub picker_config: &'a PickerConfig,
    pub viewport_width: &'a mut f32,
    pub scroll: &'a mut ScrollMetrics,
}

/// Opens the picker for `kind`. The draft stays editable meanwhile.
pub fn handle_pick(ctx: &mut UpdateContext<'_>, kind: MediaKind) -> Task<Message> {
    let request = match kind {
        MediaKind::Photo => gateway::image_request(ctx.picker_config),
        MediaKind::Video => gateway::video_request(ctx.picker_config),
    };
    let pick = gateway::request(ctx.composer, ctx.diagnostics, ctx.picker, request);

    Task::perform(pick, |(kind, outcome)| Message::PickerResolved { kind, outcome })
}

pub fn handle_picker_resolved(
    ctx: &mut UpdateContext<'_>,
    kind: MediaKind,
    outcome: PickerOutcome,
) -> Task<Message> {
    gateway::resolve(ctx.composer, ctx.diagnostics, kind, outcome);
    Task::none()
}

/// Commits the draft and, for a playable video, prepares its player.
pub fn handle_post(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let post = ctx.composer.commit();
    let post_id = post.id();
    let empty = post.is_empty();
    let video_path = post.video().and_then(MediaRef::to_path);

    ctx.diagnostics
        .log_action(UserAction::CommitPost { post_id, empty });

    // The new card pushes every other one down.
    release_offscreen_players(ctx);

    let Some(path) = video_path else {
        return Task::none();
    };
    ctx.players
        .insert(post_id, VideoPlayer::new(post_id, path.clone()));
    load_poster(post_id, path)
}

/// Reads the first frame and the duration off the UI thread.
fn load_poster(post_id: PostId, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || -> Result<(RgbaFrame, VideoMetadata), String> {
                let metadata = media::video::probe(&path).map_err(|e| e.to_string())?;
                let poster = media::video::extract_poster(&path).map_err(|e| e.to_string())?;
                Ok((poster, metadata))
            })
            .await
            .unwrap_or_else(|e| Err(e.to_string()))
        },
        move |result| Message::PosterLoaded { post_id, result },
    )
}

pub fn handle_poster_loaded(
    ctx: &mut UpdateContext<'_>,
    post_id: PostId,
    result: Result<(RgbaFrame, VideoMetadata), String>,
) -> Task<Message> {
    match result {
        Ok((poster, metadata)) => {
            if let Some(player) = ctx.players.get_mut(&post_id) {
                player.set_poster(&poster, metadata.duration_secs);
            }
        }
        Err(message) => {
            ctx.diagnostics
                .log_playback(post_id, format!("no poster: {message}"));
        }
    }
    Task::none()
}

pub fn handle_video_message(
    ctx: &mut UpdateContext<'_>,
    post_id: PostId,
    message: VideoMessage,
) -> Task<Message> {
    let Some(player) = ctx.players.get_mut(&post_id) else {
        return Task::none();
    };

    match message {
        VideoMessage::TogglePlayback => {
            ctx.diagnostics.log_action(if player.state().is_playing() {
                UserAction::PauseVideo { post_id }
            } else {
                UserAction::PlayVideo { post_id }
            });
            player.toggle();
        }
    }
    Task::none()
}

pub fn handle_playback(
    ctx: &mut UpdateContext<'_>,
    post_id: PostId,
    message: PlaybackMessage,
) -> Task<Message> {
    if let PlaybackMessage::Error(error) = &message {
        ctx.diagnostics.log_playback(post_id, error.clone());
    }
    // Late events from a player that no longer exists are dropped.
    if let Some(player) = ctx.players.get_mut(&post_id) {
        player.handle(message);
    }
    Task::none()
}

pub fn handle_feed_scrolled(ctx: &mut UpdateContext<'_>, metrics: ScrollMetrics) -> Task<Message> {
    *ctx.scroll = metrics;
    release_offscreen_players(ctx);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, width: f32, height: f32) -> Task<Message> {
    *ctx.viewport_width = width;
    // Refined by the next scroll event, which reports the real bounds.
    ctx.scroll.viewport_height = (height - composer_bar::BAR_HEIGHT).max(0.0);
    release_offscreen_players(ctx);
    Task::none()
}

/// Stops the decoders of posts whose card is no longer built.
fn release_offscreen_players(ctx: &mut UpdateContext<'_>) {
    if ctx.players.values().all(|player| player.playback_id().is_none()) {
        return;
    }

    let feed = ctx.composer.feed();
    let heights = list::item_heights(feed, card::media_side(*ctx.viewport_width));
    let window = list::window(&heights, *ctx.scroll, list::OVERSCAN);
    let built: HashSet<PostId> = feed
        .iter()
        .skip(window.range.start)
        .take(window.range.len())
        .map(Post::id)
        .collect();

    for (post_id, player) in ctx.players.iter_mut() {
        if player.playback_id().is_some() && !built.contains(post_id) {
            log::debug!("Post {post_id} left the feed window, stopping its video");
            player.stop();
        }
    }
}

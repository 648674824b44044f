// SPDX-License-Identifier: MPL-2.0
//! Per-post video player state.
//!
//! The player never talks to FFmpeg directly. It decides whether a playback
//! subscription should exist (see [`VideoPlayer::playback_id`]), forwards
//! user intent to the decoder through the command handle it receives on
//! start, and keeps the latest frame for rendering.
//!
//! A decoder only lives while its player is loading, playing or paused.
//! Ending, failing or being stopped drops the subscription, which releases
//! the decoder thread.

use super::{DecoderCommand, DecoderCommandSender, PlaybackMessage, VideoPlaybackId};
use crate::domain::PostId;
use crate::media::RgbaFrame;
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Playback lifecycle of one post's video.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    /// Showing the poster, nothing decoding.
    Idle,

    /// Play was requested; waiting for the decoder to come up.
    Loading,

    Playing { position_secs: f64 },

    Paused { position_secs: f64 },

    /// Reached the last frame. Play restarts from the beginning with a
    /// fresh decoder.
    Ended,

    /// Opening or decoding failed. Play retries with a fresh decoder.
    Failed { message: String },
}

impl PlaybackState {
    /// Whether the control should offer "pause".
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Loading | Self::Playing { .. })
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Video player bound to a single post.
#[derive(Debug, Clone)]
pub struct VideoPlayer {
    post_id: PostId,
    source: PathBuf,
    state: PlaybackState,
    /// Incremented for each new decoder so Iced restarts the subscription.
    session: u64,
    command_sender: Option<DecoderCommandSender>,
    poster: Option<image::Handle>,
    frame: Option<image::Handle>,
    position_secs: f64,
    duration_secs: Option<f64>,
}

impl VideoPlayer {
    #[must_use]
    pub fn new(post_id: PostId, source: PathBuf) -> Self {
        Self {
            post_id,
            source,
            state: PlaybackState::Idle,
            session: 0,
            command_sender: None,
            poster: None,
            frame: None,
            position_secs: 0.0,
            duration_secs: None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Stores the first frame and the clip duration once probed.
    pub fn set_poster(&mut self, poster: &RgbaFrame, duration_secs: f64) {
        self.poster = Some(poster.handle());
        if duration_secs > 0.0 {
            self.duration_secs = Some(duration_secs);
        }
    }

    /// The frame to draw: the latest decoded frame, else the poster.
    #[must_use]
    pub fn display_frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref().or(self.poster.as_ref())
    }

    /// Identity of the playback subscription this player needs, if any.
    #[must_use]
    pub fn playback_id(&self) -> Option<VideoPlaybackId> {
        match self.state {
            PlaybackState::Idle | PlaybackState::Ended | PlaybackState::Failed { .. } => None,
            PlaybackState::Loading
            | PlaybackState::Playing { .. }
            | PlaybackState::Paused { .. } => Some(VideoPlaybackId {
                post_id: self.post_id,
                session: self.session,
            }),
        }
    }

    /// Starts, resumes or restarts playback.
    pub fn play(&mut self) {
        match &self.state {
            PlaybackState::Idle | PlaybackState::Ended | PlaybackState::Failed { .. } => {
                self.session += 1;
                self.command_sender = None;
                self.position_secs = 0.0;
                self.state = PlaybackState::Loading;
            }
            PlaybackState::Paused { position_secs } => {
                let position_secs = *position_secs;
                self.send(DecoderCommand::Play);
                self.state = PlaybackState::Playing { position_secs };
            }
            PlaybackState::Loading | PlaybackState::Playing { .. } => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.send(DecoderCommand::Pause);
            self.state = PlaybackState::Paused {
                position_secs: self.position_secs,
            };
        }
    }

    /// Shuts the decoder down and goes back to the poster.
    ///
    /// Used when the post scrolls out of view. A later play starts over.
    pub fn stop(&mut self) {
        if self.playback_id().is_none() {
            return;
        }
        self.send(DecoderCommand::Stop);
        self.command_sender = None;
        self.frame = None;
        self.position_secs = 0.0;
        self.state = PlaybackState::Idle;
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Applies an event coming from the playback subscription.
    pub fn handle(&mut self, message: PlaybackMessage) {
        // Leftovers from a decoder that was already let go.
        if self.playback_id().is_none() {
            return;
        }
        match message {
            PlaybackMessage::Started(sender) => {
                // A pause before the decoder was up leaves it paused.
                if self.state == PlaybackState::Loading {
                    let _ = sender.send(DecoderCommand::Play);
                    self.state = PlaybackState::Playing { position_secs: 0.0 };
                }
                self.command_sender = Some(sender);
            }
            PlaybackMessage::FrameReady { frame, pts_secs } => {
                self.frame = Some(frame.handle());
                self.position_secs = pts_secs;
                if let PlaybackState::Playing { position_secs } = &mut self.state {
                    *position_secs = pts_secs;
                }
            }
            PlaybackMessage::Buffering => {}
            PlaybackMessage::EndOfStream => {
                if let Some(duration) = self.duration_secs {
                    self.position_secs = duration;
                }
                self.command_sender = None;
                self.state = PlaybackState::Ended;
            }
            PlaybackMessage::Error(message) => {
                self.command_sender = None;
                self.state = PlaybackState::Failed { message };
            }
        }
    }

    fn send(&self, command: DecoderCommand) {
        if let Some(sender) = &self.command_sender {
            if let Err(e) = sender.send(command) {
                log::debug!("Post {}: {e}", self.post_id);
            }
        }
    }
}

/// Formats a position as `MM:SS`, or `HH:MM:SS` past the hour.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn player() -> VideoPlayer {
        VideoPlayer::new(PostId::FIRST, PathBuf::from("/tmp/clip.mp4"))
    }

    fn started(player: &mut VideoPlayer) -> UnboundedReceiver<DecoderCommand> {
        let (sender, rx) = DecoderCommandSender::channel();
        player.handle(PlaybackMessage::Started(sender));
        rx
    }

    fn frame() -> RgbaFrame {
        RgbaFrame {
            width: 1,
            height: 1,
            pixels: Arc::new(vec![255; 4]),
        }
    }

    fn drain(rx: &mut UnboundedReceiver<DecoderCommand>) -> Vec<DecoderCommand> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn idle_player_has_no_subscription() {
        assert_eq!(player().playback_id(), None);
    }

    #[test]
    fn play_from_idle_starts_a_session_then_plays_on_start() {
        let mut player = player();
        player.play();
        assert_eq!(player.state(), &PlaybackState::Loading);
        let id = player.playback_id().expect("subscription");
        assert_eq!(id.session, 1);

        let mut rx = started(&mut player);

        assert_eq!(drain(&mut rx), vec![DecoderCommand::Play]);
        assert!(player.state().is_playing());
    }

    #[test]
    fn pause_during_loading_is_respected_on_start() {
        let mut player = player();
        player.play();
        player.pause();
        let mut rx = started(&mut player);

        assert!(drain(&mut rx).is_empty());
        assert!(matches!(player.state(), PlaybackState::Paused { .. }));
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let mut player = player();
        player.play();
        let mut rx = started(&mut player);
        player.handle(PlaybackMessage::FrameReady {
            frame: frame(),
            pts_secs: 2.0,
        });

        player.toggle();
        assert_eq!(
            player.state(),
            &PlaybackState::Paused { position_secs: 2.0 }
        );
        player.toggle();
        assert_eq!(
            player.state(),
            &PlaybackState::Playing { position_secs: 2.0 }
        );
        assert_eq!(
            drain(&mut rx),
            vec![
                DecoderCommand::Play,
                DecoderCommand::Pause,
                DecoderCommand::Play
            ]
        );
    }

    #[test]
    fn ended_player_has_no_subscription() {
        let mut player = player();
        player.play();
        let _rx = started(&mut player);
        player.handle(PlaybackMessage::EndOfStream);

        assert_eq!(player.state(), &PlaybackState::Ended);
        assert_eq!(player.playback_id(), None);
    }

    #[test]
    fn play_after_end_opens_new_session_from_start() {
        let mut player = player();
        player.play();
        let mut rx = started(&mut player);
        player.handle(PlaybackMessage::EndOfStream);
        drain(&mut rx);

        player.play();

        assert_eq!(player.state(), &PlaybackState::Loading);
        assert_eq!(player.position_secs(), 0.0);
        assert_eq!(player.playback_id().map(|id| id.session), Some(2));
        // The finished decoder gets nothing; the new one is told to play on start.
        assert!(drain(&mut rx).is_empty());
        let mut fresh = started(&mut player);
        assert_eq!(drain(&mut fresh), vec![DecoderCommand::Play]);
    }

    #[test]
    fn stop_releases_decoder_and_shows_poster() {
        let mut player = player();
        player.set_poster(&frame(), 10.0);
        player.play();
        let mut rx = started(&mut player);
        player.handle(PlaybackMessage::FrameReady {
            frame: frame(),
            pts_secs: 3.0,
        });
        player.pause();
        drain(&mut rx);

        player.stop();

        assert_eq!(drain(&mut rx), vec![DecoderCommand::Stop]);
        assert_eq!(player.state(), &PlaybackState::Idle);
        assert_eq!(player.playback_id(), None);
        assert_eq!(player.position_secs(), 0.0);
        assert!(player.display_frame().is_some());
    }

    #[test]
    fn late_events_after_stop_are_ignored() {
        let mut player = player();
        player.play();
        let _rx = started(&mut player);
        player.stop();

        player.handle(PlaybackMessage::FrameReady {
            frame: frame(),
            pts_secs: 4.0,
        });
        player.handle(PlaybackMessage::EndOfStream);

        assert_eq!(player.state(), &PlaybackState::Idle);
        assert_eq!(player.position_secs(), 0.0);
        assert!(player.display_frame().is_none());
    }

    #[test]
    fn stop_on_idle_player_is_a_no_op() {
        let mut player = player();
        player.stop();
        assert_eq!(player.state(), &PlaybackState::Idle);
        assert_eq!(player.playback_id(), None);
    }

    #[test]
    fn error_drops_subscription_and_retry_opens_new_session() {
        let mut player = player();
        player.play();
        let _rx = started(&mut player);
        player.handle(PlaybackMessage::Error("boom".into()));

        assert_eq!(player.state().error_message(), Some("boom"));
        assert_eq!(player.playback_id(), None);

        player.play();
        assert_eq!(player.playback_id().map(|id| id.session), Some(2));
    }

    #[test]
    fn decoded_frame_replaces_poster() {
        let mut player = player();
        assert!(player.display_frame().is_none());

        player.set_poster(&frame(), 12.5);
        assert!(player.display_frame().is_some());
        assert_eq!(player.duration_secs(), Some(12.5));

        player.play();
        player.handle(PlaybackMessage::FrameReady {
            frame: frame(),
            pts_secs: 0.5,
        });
        assert_eq!(player.position_secs(), 0.5);
    }

    #[test]
    fn end_of_stream_jumps_position_to_duration() {
        let mut player = player();
        player.set_poster(&frame(), 30.0);
        player.play();
        player.handle(PlaybackMessage::EndOfStream);
        assert_eq!(player.position_secs(), 30.0);
    }

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(125.0), "02:05");
        assert_eq!(format_time(3665.0), "01:01:05");
        assert_eq!(format_time(-10.0), "00:00");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! One subscription runs per playing post. It owns the [`AsyncDecoder`],
//! forwards commands from the UI and turns decoder events into
//! [`PlaybackMessage`]s tagged with the post they belong to.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use crate::domain::PostId;
use crate::media::RgbaFrame;
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Subscription identity: one decoder per post and playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId {
    pub post_id: PostId,
    pub session: u64,
}

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Sender paired with a receiver the caller drains itself, for driving
    /// a player without a running decoder.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Video decoder not running".to_string())
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder is up; commands can be sent through the handle.
    Started(DecoderCommandSender),

    /// A new frame is ready for display.
    FrameReady { frame: RgbaFrame, pts_secs: f64 },

    Buffering,

    EndOfStream,

    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(decoded) => PlaybackMessage::FrameReady {
                frame: decoded.frame,
                pts_secs: decoded.pts_secs,
            },
            DecoderEvent::Buffering => PlaybackMessage::Buffering,
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(message) => PlaybackMessage::Error(message),
        }
    }
}

/// Creates the playback subscription for one post.
///
/// The stream stays alive (idle) after the decoder exits so Iced doesn't
/// restart it; bump `id.session` to get a fresh decoder.
pub fn video_playback(
    id: VideoPlaybackId,
    video_path: PathBuf,
) -> iced::Subscription<(PostId, PlaybackMessage)> {
    let post_id = id.post_id;

    iced::Subscription::run_with_id(
        id,
        stream::channel(16, move |mut output| async move {
            let mut decoder = match AsyncDecoder::new(&video_path) {
                Ok(decoder) => decoder,
                Err(e) => {
                    let _ = output
                        .send((post_id, PlaybackMessage::Error(e.to_string())))
                        .await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            let (command_tx, mut command_rx) = mpsc::unbounded_channel();
            let _ = output
                .send((
                    post_id,
                    PlaybackMessage::Started(DecoderCommandSender { tx: command_tx }),
                ))
                .await;

            loop {
                tokio::select! {
                    command = command_rx.recv() => {
                        let Some(command) = command else { break };
                        let stop = command == DecoderCommand::Stop;
                        if let Err(e) = decoder.send_command(command) {
                            let _ = output.send((post_id, PlaybackMessage::Error(e.to_string()))).await;
                            break;
                        }
                        if stop {
                            break;
                        }
                    }
                    event = decoder.recv_event() => {
                        let Some(event) = event else { break };
                        let _ = output.send((post_id, event.into())).await;
                    }
                }
            }

            log::debug!("Playback subscription for post {post_id} finished");
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::DecodedFrame;
    use std::sync::Arc;

    #[test]
    fn decoder_events_map_to_messages() {
        let frame = RgbaFrame {
            width: 2,
            height: 1,
            pixels: Arc::new(vec![0; 8]),
        };
        let message: PlaybackMessage = DecoderEvent::FrameReady(DecodedFrame {
            frame: frame.clone(),
            pts_secs: 1.25,
        })
        .into();

        match message {
            PlaybackMessage::FrameReady {
                frame: mapped,
                pts_secs,
            } => {
                assert_eq!(mapped, frame);
                assert!((pts_secs - 1.25).abs() < f64::EPSILON);
            }
            other => panic!("unexpected message {other:?}"),
        }
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::EndOfStream),
            PlaybackMessage::EndOfStream
        ));
    }

    #[test]
    fn command_sender_reports_closed_channel() {
        let (sender, mut rx) = DecoderCommandSender::channel();
        sender.send(DecoderCommand::Play).expect("send");
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Play));
        drop(rx);
        assert!(sender.send(DecoderCommand::Pause).is_err());
    }

    #[test]
    fn playback_ids_differ_by_session() {
        let a = VideoPlaybackId {
            post_id: PostId::FIRST,
            session: 1,
        };
        let b = VideoPlaybackId { session: 2, ..a };
        assert_ne!(a, b);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! FFmpeg contexts are not `Send`, so decoding happens on a dedicated
//! blocking thread. The UI side talks to it through a pair of Tokio
//! channels.

use crate::error::{Error, Result};
use crate::media::video::{open_video, rgba_scaler};
use crate::media::RgbaFrame;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Interval at which an idle (paused) decoder checks for commands.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub frame: RgbaFrame,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume decoding at the current position.
    Play,

    /// Stop sending frames, keeping the position.
    Pause,

    /// Jump to a timestamp. While paused, one frame is decoded so the new
    /// position becomes visible.
    Seek { target_secs: f64 },

    /// Stop decoding and release FFmpeg resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// Decoder is filling up after a play or a seek.
    Buffering,

    /// Playback reached the end of the video.
    EndOfStream,

    /// An error occurred during decoding.
    Error(String),
}

/// Handle to a decoder running on the blocking pool.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded so a slow UI applies backpressure instead of queueing frames.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `video_path`.
    ///
    /// Fails immediately if the file does not exist. Any other problem
    /// (unreadable container, missing stream) is reported as a
    /// [`DecoderEvent::Error`] once the thread has started.
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::Io(format!("Video file not found: {}", path.display())));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            if let Err(e) = decoder_loop_blocking(&path, command_rx, event_tx) {
                log::warn!("Decoder for {} stopped: {e}", path.display());
                let _ = error_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder thread.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Receives the next event. Returns `None` once the thread has exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Wall-clock pacing relative to the first frame after (re)starting.
#[derive(Debug, Default)]
struct Pacing {
    anchor: Option<(Instant, f64)>,
}

impl Pacing {
    fn reset(&mut self) {
        self.anchor = None;
    }

    /// How long to wait before showing a frame with `pts_secs`.
    fn delay_for(&mut self, pts_secs: f64, now: Instant) -> Duration {
        let (started, first_pts) = *self.anchor.get_or_insert((now, pts_secs));
        let due = started + Duration::from_secs_f64((pts_secs - first_pts).max(0.0));
        due.saturating_duration_since(now)
    }
}

fn to_av_timestamp(secs: f64) -> i64 {
    (secs.max(0.0) * f64::from(ffmpeg_next::ffi::AV_TIME_BASE)) as i64
}

fn decoder_loop_blocking(
    video_path: &Path,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: mpsc::Sender<DecoderEvent>,
) -> Result<()> {
    let (mut ictx, stream_index, time_base, mut decoder) = open_video(video_path)?;
    let mut scaler = rgba_scaler(&decoder)?;

    let mut is_playing = false;
    let mut decode_single_frame = false;
    let mut current_pts_secs = 0.0;
    let mut pacing = Pacing::default();

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                // Packets continue where the last read stopped.
                is_playing = true;
                pacing.reset();
                let _ = event_tx.blocking_send(DecoderEvent::Buffering);
            }
            Ok(DecoderCommand::Pause) => {
                is_playing = false;
                pacing.reset();
            }
            Ok(DecoderCommand::Seek { target_secs }) => {
                let timestamp = to_av_timestamp(target_secs);
                if let Err(e) = ictx.seek(timestamp, ..timestamp) {
                    let _ =
                        event_tx.blocking_send(DecoderEvent::Error(format!("Seek failed: {e}")));
                } else {
                    decoder.flush();
                    current_pts_secs = target_secs.max(0.0);
                    pacing.reset();
                    let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                    if !is_playing {
                        decode_single_frame = true;
                    }
                }
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing && !decode_single_frame {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_decoded = false;
        let mut receiver_gone = false;
        for (stream, packet) in ictx.packets() {
            if stream.index() != stream_index {
                continue;
            }

            if let Err(e) = decoder.send_packet(&packet) {
                let _ = event_tx
                    .blocking_send(DecoderEvent::Error(format!("Packet send failed: {e}")));
                continue;
            }

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_err() {
                continue;
            }

            let mut rgba = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded, &mut rgba) {
                let _ =
                    event_tx.blocking_send(DecoderEvent::Error(format!("Scaling failed: {e}")));
                continue;
            }

            let pts_secs = decoded
                .timestamp()
                .map_or(current_pts_secs, |pts| pts as f64 * time_base);

            if is_playing {
                let wait = pacing.delay_for(pts_secs, Instant::now());
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
            }
            current_pts_secs = pts_secs;

            let event = DecoderEvent::FrameReady(DecodedFrame {
                frame: RgbaFrame::from_ffmpeg(&rgba),
                pts_secs,
            });
            if event_tx.blocking_send(event).is_err() {
                receiver_gone = true;
            }

            frame_decoded = true;
            decode_single_frame = false;
            break;
        }

        if receiver_gone {
            break;
        }

        if !frame_decoded {
            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
            is_playing = false;
            decode_single_frame = false;
            pacing.reset();
        }
    }

    Ok(())
}

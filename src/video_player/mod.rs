// SPDX-License-Identifier: MPL-2.0
//! Video playback for feed posts.
//!
//! FFmpeg decodes on a blocking thread, an Iced subscription per playing
//! post carries frames to the UI, and [`VideoPlayer`] tracks what each post
//! is showing. Playback is video-only.

mod decoder;
mod state;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::{format_time, PlaybackState, VideoPlayer};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage, VideoPlaybackId};

// SPDX-License-Identifier: MPL-2.0
//! Video probing and poster extraction.

use crate::error::{Error, Result, VideoError};
use iced::widget::image;
use std::path::Path;
use std::sync::{Arc, Once};

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call from any thread and any number of times. FFmpeg's own
/// logging is capped at ERROR so container warnings don't reach stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Container and stream facts needed by the picker and the player.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Zero when neither the stream nor the container reports a duration.
    pub duration_secs: f64,
    pub fps: f64,
}

impl VideoMetadata {
    /// Rejects clips longer than `limit_secs`. Unknown durations pass.
    pub fn check_duration(&self, limit_secs: u32) -> std::result::Result<(), VideoError> {
        if self.duration_secs > f64::from(limit_secs) {
            Err(VideoError::DurationLimitExceeded {
                duration_secs: self.duration_secs,
                limit_secs,
            })
        } else {
            Ok(())
        }
    }
}

/// A decoded frame in tightly packed RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<Vec<u8>>,
}

impl RgbaFrame {
    /// Copies an RGBA FFmpeg frame, dropping the row padding.
    pub(crate) fn from_ffmpeg(frame: &ffmpeg_next::frame::Video) -> Self {
        let width = frame.width();
        let height = frame.height();
        let data = frame.data(0);
        let stride = frame.stride(0);
        let row_len = (width * 4) as usize;

        let mut pixels = Vec::with_capacity(row_len * height as usize);
        for y in 0..height as usize {
            let row_start = y * stride;
            pixels.extend_from_slice(&data[row_start..row_start + row_len]);
        }

        Self {
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    #[must_use]
    pub fn handle(&self) -> image::Handle {
        image::Handle::from_rgba(self.width, self.height, self.pixels.to_vec())
    }
}

type Input = ffmpeg_next::format::context::Input;
type VideoDecoder = ffmpeg_next::decoder::Video;

/// Opens `path` and sets up a decoder for its best video stream.
///
/// Returns the input context, the stream index, the stream time base in
/// seconds per tick and the decoder.
pub(crate) fn open_video(path: &Path) -> Result<(Input, usize, f64, VideoDecoder)> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to open video file: {e}")))?;

    let (index, time_base, parameters) = {
        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let tb = stream.time_base();
        (
            stream.index(),
            f64::from(tb.numerator()) / f64::from(tb.denominator()),
            stream.parameters(),
        )
    };

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(parameters)
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create codec context: {e}")))?
        .decoder()
        .video()
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create video decoder: {e}")))?;

    if decoder.width() == 0 || decoder.height() == 0 {
        return Err(VideoError::InvalidDimensions {
            width: decoder.width(),
            height: decoder.height(),
        }
        .into());
    }

    Ok((ictx, index, time_base, decoder))
}

/// Builds a scaler converting the decoder's output to RGBA at native size.
pub(crate) fn rgba_scaler(decoder: &VideoDecoder) -> Result<ffmpeg_next::software::scaling::Context> {
    ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        ffmpeg_next::format::Pixel::RGBA,
        decoder.width(),
        decoder.height(),
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::DecodingFailed(format!("Failed to create scaler: {e}")).into())
}

/// Reads dimensions, duration and frame rate without decoding any frame.
pub fn probe<P: AsRef<Path>>(path: P) -> Result<VideoMetadata> {
    let (ictx, index, time_base, decoder) = open_video(path.as_ref())?;

    let stream = ictx
        .stream(index)
        .ok_or(VideoError::NoVideoStream)?;

    let duration_secs = if stream.duration() > 0 {
        stream.duration() as f64 * time_base
    } else if ictx.duration() > 0 {
        // Fallback to container duration
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    let fps = {
        let rate = stream.avg_frame_rate();
        if rate.denominator() == 0 {
            0.0
        } else {
            f64::from(rate.numerator()) / f64::from(rate.denominator())
        }
    };

    Ok(VideoMetadata {
        width: decoder.width(),
        height: decoder.height(),
        duration_secs,
        fps,
    })
}

/// Decodes the first frame of the video, used as the poster in the feed.
pub fn extract_poster<P: AsRef<Path>>(path: P) -> Result<RgbaFrame> {
    let (mut ictx, index, _, mut decoder) = open_video(path.as_ref())?;
    let mut scaler = rgba_scaler(&decoder)?;

    let mut decoded = ffmpeg_next::frame::Video::empty();
    let mut rgba = ffmpeg_next::frame::Video::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() != index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| VideoError::DecodingFailed(format!("Failed to send packet: {e}")))?;

        if decoder.receive_frame(&mut decoded).is_ok() {
            scaler
                .run(&decoded, &mut rgba)
                .map_err(|e| VideoError::DecodingFailed(format!("Failed to scale frame: {e}")))?;
            return Ok(RgbaFrame::from_ffmpeg(&rgba));
        }
    }

    Err(VideoError::DecodingFailed("Could not decode first frame".into()).into())
}

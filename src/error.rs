// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Video(VideoError),
}

/// Specific error types for video probing and playback.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    /// File exists but contains no video stream
    NoVideoStream,

    /// Stream reports zero width or height
    InvalidDimensions { width: u32, height: u32 },

    /// Clip is longer than the picker allows
    DurationLimitExceeded { duration_secs: f64, limit_secs: u32 },

    /// Decoding failed during probing or playback
    DecodingFailed(String),

    /// Generic error with raw message
    Other(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::InvalidDimensions { width, height } => {
                write!(f, "Invalid video dimensions: {width}x{height}")
            }
            VideoError::DurationLimitExceeded {
                duration_secs,
                limit_secs,
            } => write!(
                f,
                "Duration limit exceeded: {duration_secs:.1}s (limit {limit_secs}s)"
            ),
            VideoError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            VideoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

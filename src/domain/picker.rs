// SPDX-License-Identifier: MPL-2.0
//! Request and outcome types for the media picker.
//!
//! A pick resolves to exactly one [`PickerOutcome`]. Cancellation is a normal
//! outcome of its own rather than the absence of a callback.

use super::post::MediaRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of media a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Photo,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => f.write_str("photo"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

/// Bounds applied to a picked photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoConstraints {
    pub max_width: u32,
    pub max_height: u32,
    /// 0.0 to 1.0, where 1.0 keeps full quality.
    pub quality: f32,
}

impl Default for PhotoConstraints {
    fn default() -> Self {
        Self {
            max_width: 500,
            max_height: 500,
            quality: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoQuality {
    Low,
    Medium,
    #[default]
    High,
}

/// Bounds applied to a picked video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConstraints {
    pub quality: VideoQuality,
    pub max_duration_secs: u32,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            quality: VideoQuality::High,
            max_duration_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerRequest {
    Photo(PhotoConstraints),
    Video(VideoConstraints),
}

impl PickerRequest {
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self {
            PickerRequest::Photo(_) => MediaKind::Photo,
            PickerRequest::Video(_) => MediaKind::Video,
        }
    }
}

/// Device, permission or I/O failure reported by a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerError {
    message: String,
}

impl PickerError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PickerError {}

impl From<crate::error::Error> for PickerError {
    fn from(err: crate::error::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// The three ways a pick can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(MediaRef),
    Cancelled,
    Failed(PickerError),
}

impl PickerOutcome {
    #[must_use]
    pub fn selected(&self) -> Option<&MediaRef> {
        match self {
            PickerOutcome::Selected(media) => Some(media),
            PickerOutcome::Cancelled | PickerOutcome::Failed(_) => None,
        }
    }
}

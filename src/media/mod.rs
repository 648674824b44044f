// SPDX-License-Identifier: MPL-2.0
//! Media helpers shared by the picker and the feed.
//!
//! Images are decoded and downscaled with the `image` crate, videos are
//! probed and decoded with FFmpeg.

pub mod image;
pub mod video;

use crate::domain::MediaKind;
use std::path::Path;

pub use image::{fit_within, Encoding};
pub use video::{RgbaFrame, VideoMetadata};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions offered by the photo picker.
    pub const IMAGE_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

    /// Video file extensions offered by the video picker.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Returns the media kind a path's extension belongs to, if any.
#[must_use]
pub fn kind_for_path(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Photo)
    } else if extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

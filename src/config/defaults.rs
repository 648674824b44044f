// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for all configuration values.

// ==========================================================================
// Photo Picker Defaults
// ==========================================================================

/// Default maximum width of a picked photo, in pixels.
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 500;

/// Default maximum height of a picked photo, in pixels.
pub const DEFAULT_PHOTO_MAX_HEIGHT: u32 = 500;

/// Smallest accepted photo bound.
pub const MIN_PHOTO_DIMENSION: u32 = 16;

/// Largest accepted photo bound.
pub const MAX_PHOTO_DIMENSION: u32 = 8192;

/// Default photo quality (1.0 = lossless).
pub const DEFAULT_PHOTO_QUALITY: f32 = 1.0;

/// Lowest accepted photo quality.
pub const MIN_PHOTO_QUALITY: f32 = 0.1;

// ==========================================================================
// Video Picker Defaults
// ==========================================================================

/// Default maximum clip duration, in seconds.
pub const DEFAULT_VIDEO_MAX_DURATION_SECS: u32 = 30;

/// Lower bound for the clip duration limit.
pub const MIN_VIDEO_MAX_DURATION_SECS: u32 = 1;

/// Upper bound for the clip duration limit.
pub const MAX_VIDEO_MAX_DURATION_SECS: u32 = 600;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

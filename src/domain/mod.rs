// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core post, feed and picker types.
//!
//! This module contains pure value types and the rules that govern them.
//! The only external dependency is `serde`, so that the whole screen state
//! can be serialized for inspection and tests.
//!
//! # Modules
//!
//! - [`post`]: [`MediaRef`](post::MediaRef), [`PostId`](post::PostId),
//!   [`Post`](post::Post) and the in-progress [`Draft`](post::Draft)
//! - [`feed`]: the newest-first [`Feed`](feed::Feed)
//! - [`picker`]: request and outcome types of the media picker contract

pub mod feed;
pub mod picker;
pub mod post;

pub use feed::Feed;
pub use picker::{
    MediaKind, PhotoConstraints, PickerError, PickerOutcome, PickerRequest, VideoConstraints,
    VideoQuality,
};
pub use post::{Draft, MediaRef, Post, PostId};

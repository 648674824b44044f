// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use crate::domain::{MediaKind, PostId};
use std::fmt;
use std::time::Instant;

/// User-initiated actions worth keeping around when something goes wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Opened the photo picker.
    RequestImage,
    /// Opened the video picker.
    RequestVideo,
    /// Pressed "Post".
    CommitPost {
        post_id: PostId,
        /// Whether the committed post had no text and no media.
        empty: bool,
    },
    /// Started or resumed a video in the feed.
    PlayVideo { post_id: PostId },
    /// Paused a video in the feed.
    PauseVideo { post_id: PostId },
}

/// How a picker request ended, without the media reference itself.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerResult {
    Selected,
    Cancelled,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    UserAction(UserAction),
    Picker { kind: MediaKind, result: PickerResult },
    Playback { post_id: PostId, message: String },
    Warning { message: String },
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::UserAction(action) => write!(f, "user action: {action:?}"),
            DiagnosticEventKind::Picker { kind, result } => match result {
                PickerResult::Selected => write!(f, "{kind} picker: selected"),
                PickerResult::Cancelled => write!(f, "User cancelled {kind} picker"),
                PickerResult::Failed { message } => write!(f, "{kind} picker error: {message}"),
            },
            DiagnosticEventKind::Playback { post_id, message } => {
                write!(f, "playback {post_id}: {message}")
            }
            DiagnosticEventKind::Warning { message } => write!(f, "warning: {message}"),
        }
    }
}

/// A recorded event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

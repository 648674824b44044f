// SPDX-License-Identifier: MPL-2.0
//! Draft/feed state container.
//!
//! All mutations go through [`ComposerState`], either via the dedicated
//! setters or via [`ComposerState::apply`]. Nothing here knows about widgets,
//! so the whole compose-and-post cycle can be exercised without a window.

use crate::domain::{Draft, Feed, MediaKind, MediaRef, Post, PostId};
use serde::{Deserialize, Serialize};

/// Where the current draft is in its cycle.
///
/// A commit goes straight back to `Empty`; there is no observable
/// "committed" resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Nothing typed or attached.
    Empty,
    /// Some field holds a value.
    Editing,
    /// At least one picker request is outstanding. Editing and further
    /// requests remain possible.
    MediaPending,
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetText(String),
    SetImage(MediaRef),
    SetVideo(MediaRef),
    Commit,
}

/// Outstanding picker requests per media kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PendingRequests {
    photo: usize,
    video: usize,
}

impl PendingRequests {
    fn slot(&mut self, kind: MediaKind) -> &mut usize {
        match kind {
            MediaKind::Photo => &mut self.photo,
            MediaKind::Video => &mut self.video,
        }
    }

    fn count(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Photo => self.photo,
            MediaKind::Video => self.video,
        }
    }
}

/// Owns the draft and the feed for the lifetime of the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerState {
    draft: Draft,
    feed: Feed,
    next_id: PostId,
    #[serde(skip)]
    pending: PendingRequests,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            feed: Feed::new(),
            next_id: PostId::FIRST,
            pending: PendingRequests::default(),
        }
    }
}

impl ComposerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Replaces the draft text. No length limit.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.draft.text = value.into();
    }

    /// Replaces the draft image. The video, if any, is kept.
    pub fn set_image(&mut self, media: MediaRef) {
        self.draft.image = Some(media);
    }

    /// Replaces the draft video. The image, if any, is kept.
    pub fn set_video(&mut self, media: MediaRef) {
        self.draft.video = Some(media);
    }

    /// Turns the draft into a post at the head of the feed and resets the
    /// draft. Empty drafts are committed like any other.
    pub fn commit(&mut self) -> &Post {
        let id = self.next_id;
        self.next_id = id.next();
        let draft = std::mem::take(&mut self.draft);
        self.feed.prepend(Post::from_draft(id, draft))
    }

    /// Applies one transition. Returns the id of the new post on commit.
    pub fn apply(&mut self, action: Action) -> Option<PostId> {
        match action {
            Action::SetText(text) => self.set_text(text),
            Action::SetImage(media) => self.set_image(media),
            Action::SetVideo(media) => self.set_video(media),
            Action::Commit => return Some(self.commit().id()),
        }
        None
    }

    /// Marks a picker request of `kind` as outstanding.
    pub fn begin_request(&mut self, kind: MediaKind) {
        *self.pending.slot(kind) += 1;
    }

    /// Marks one picker request of `kind` as resolved.
    pub fn finish_request(&mut self, kind: MediaKind) {
        let slot = self.pending.slot(kind);
        *slot = slot.saturating_sub(1);
    }

    #[must_use]
    pub fn is_pending(&self, kind: MediaKind) -> bool {
        self.pending.count(kind) > 0
    }

    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        if self.is_pending(MediaKind::Photo) || self.is_pending(MediaKind::Video) {
            DraftPhase::MediaPending
        } else if self.draft.is_empty() {
            DraftPhase::Empty
        } else {
            DraftPhase::Editing
        }
    }
}

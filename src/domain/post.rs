// SPDX-License-Identifier: MPL-2.0
//! Posts, drafts and the opaque media references they carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Opaque reference to a locally selected image or video.
///
/// The string is whatever the picker handed back. Only `file://` URIs and
/// bare paths can be resolved to something displayable; every other scheme
/// is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds a `file://` reference for a path on the local filesystem.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self(format!("{FILE_SCHEME}{}", path.display()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference to a filesystem path, if it points to one.
    ///
    /// ```
    /// use iced_feed::domain::MediaRef;
    /// use std::path::PathBuf;
    ///
    /// let media = MediaRef::new("file:///tmp/cat.png");
    /// assert_eq!(media.to_path(), Some(PathBuf::from("/tmp/cat.png")));
    /// assert_eq!(MediaRef::new("img://1").to_path(), None);
    /// ```
    #[must_use]
    pub fn to_path(&self) -> Option<PathBuf> {
        if let Some(rest) = self.0.strip_prefix(FILE_SCHEME) {
            return (!rest.is_empty()).then(|| PathBuf::from(rest));
        }
        if self.0.contains("://") || self.0.is_empty() {
            return None;
        }
        Some(PathBuf::from(&self.0))
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaRef {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Stable identifier handed out when a draft is committed.
///
/// Identifiers only grow; they never get reused within a screen's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(u64);

impl PostId {
    pub const FIRST: PostId = PostId(1);

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> PostId {
        PostId(self.0 + 1)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The in-progress post being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub text: String,
    pub image: Option<MediaRef>,
    pub video: Option<MediaRef>,
}

impl Draft {
    /// True when every field holds its default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none() && self.video.is_none()
    }
}

/// An immutable, committed unit of content.
///
/// Fields are private so a post can only be built from a draft and never
/// edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    text: String,
    image: Option<MediaRef>,
    video: Option<MediaRef>,
}

impl Post {
    /// Captures the draft verbatim. No trimming, no validation.
    #[must_use]
    pub fn from_draft(id: PostId, draft: Draft) -> Self {
        Self {
            id,
            text: draft.text,
            image: draft.image,
            video: draft.video,
        }
    }

    #[must_use]
    pub fn id(&self) -> PostId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&MediaRef> {
        self.video.as_ref()
    }

    /// An empty post is allowed and renders as an empty card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none() && self.video.is_none()
    }

    /// Compares content only, ignoring the id.
    #[must_use]
    pub fn matches_draft(&self, draft: &Draft) -> bool {
        self.text == draft.text && self.image == draft.image && self.video == draft.video
    }
}

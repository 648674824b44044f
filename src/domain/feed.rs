// SPDX-License-Identifier: MPL-2.0
//! Newest-first collection of committed posts.

use super::post::{Post, PostId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered sequence of posts, most recent first.
///
/// Posts are only ever prepended; nothing is edited, reordered or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    posts: VecDeque<Post>,
}

impl Feed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `post` at the head of the feed and returns it.
    pub fn prepend(&mut self, post: Post) -> &Post {
        self.posts.push_front(post);
        &self.posts[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Most recent post.
    #[must_use]
    pub fn head(&self) -> Option<&Post> {
        self.posts.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    #[must_use]
    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::Draft;

    fn post(id: PostId, text: &str) -> Post {
        Post::from_draft(
            id,
            Draft {
                text: text.into(),
                ..Draft::default()
            },
        )
    }

    #[test]
    fn prepend_keeps_prior_order() {
        let mut feed = Feed::new();
        let a = PostId::FIRST;
        let b = a.next();
        let c = b.next();
        feed.prepend(post(a, "a"));
        feed.prepend(post(b, "b"));
        let before: Vec<_> = feed.iter().cloned().collect();

        feed.prepend(post(c, "c"));

        assert_eq!(feed.len(), before.len() + 1);
        assert_eq!(feed.head().map(Post::text), Some("c"));
        let tail: Vec<_> = feed.iter().skip(1).cloned().collect();
        assert_eq!(tail, before);
    }

    #[test]
    fn find_looks_up_by_id() {
        let mut feed = Feed::new();
        feed.prepend(post(PostId::FIRST, "first"));
        feed.prepend(post(PostId::FIRST.next(), "second"));
        assert_eq!(feed.find(PostId::FIRST).map(Post::text), Some("first"));
        assert!(feed.find(PostId::FIRST.next().next()).is_none());
    }

    #[test]
    fn new_feed_is_empty() {
        let feed = Feed::new();
        assert!(feed.is_empty());
        assert!(feed.head().is_none());
        assert!(feed.get(0).is_none());
    }
}

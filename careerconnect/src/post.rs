use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::id::PostId;
use crate::profile::Profile;

/// Author identity captured at publication time.
///
/// A by-value snapshot: renaming or re-roling a profile later leaves
/// already-published content untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub username: String,
    pub display_name: String,
    pub role_label: String,
}

impl From<&Profile> for Author {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            display_name: profile.display_name.clone(),
            role_label: profile.role.label().to_string(),
        }
    }
}

/// A comment left on a post.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    /// Display name of the commenter, captured at comment time
    pub author_name: String,
    pub content: String,
}

/// A published post.
///
/// Immutable once created except for the like tally and comment appends,
/// both of which go through the owning [`Directory`](crate::Directory).
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub content: String,
    /// Like tally; only ever incremented
    pub likes: u64,
    /// Comments in arrival order
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(id: PostId, author: Author, content: impl Into<String>) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Counts one more like and returns the new tally.
    pub(crate) fn like(&mut self) -> u64 {
        self.likes += 1;
        self.likes
    }

    pub(crate) fn add_comment(&mut self, author_name: impl Into<String>, content: impl Into<String>) {
        self.comments.push(Comment {
            author_name: author_name.into(),
            content: content.into(),
        });
    }
}

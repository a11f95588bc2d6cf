/// Identifier assigned to published posts.
pub type PostId = u64;

/// First identifier handed out by a fresh sequence.
const FIRST_POST_ID: PostId = 1;

/// Sequential source of post identifiers.
///
/// The owning [`Directory`](crate::Directory) is the only caller; ids start
/// at 1 and are never reused within a session.
#[derive(Debug, Clone)]
pub struct PostIdSequence {
    next: PostId,
}

impl PostIdSequence {
    pub fn new() -> Self {
        Self { next: FIRST_POST_ID }
    }

    /// Hands out the next identifier and advances the sequence.
    pub fn next_id(&mut self) -> PostId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for PostIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

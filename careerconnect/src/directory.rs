//! The in-memory data store for the whole network.
//!
//! One [`Directory`] value owns every profile, post, pending connection
//! request, and connection edge. All mutation goes through its methods;
//! records never hold references to each other, only usernames and ids.

use std::collections::{BTreeMap, HashMap};

use crate::errors::DirectoryError;
use crate::id::{PostId, PostIdSequence};
use crate::post::{Author, Post};
use crate::profile::{NewProfile, Profile};
use crate::validators;

/// Owner of all profiles, posts, and connection state.
///
/// Profiles are keyed by unique username and iterate in username order.
/// Posts live in one append-only list in publication order. The pending
/// table maps a recipient to the senders awaiting their decision; the
/// connection table holds the symmetric adjacency lists.
#[derive(Debug, Default)]
pub struct Directory {
    profiles: BTreeMap<String, Profile>,
    posts: Vec<Post>,
    post_ids: PostIdSequence,
    pending: HashMap<String, Vec<String>>,
    connections: HashMap<String, Vec<String>>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Registration & Login ==========

    /// Registers a new profile after validating the payload and the
    /// username's uniqueness.
    pub fn register(&mut self, new: NewProfile) -> Result<&Profile, DirectoryError> {
        if self.profiles.contains_key(&new.username) {
            return Err(DirectoryError::UsernameTaken { username: new.username });
        }
        validators::validate_new_profile(&new)?;
        let username = new.username.clone();
        log::info!("registered profile '{username}'");
        Ok(self.profiles.entry(username).or_insert(Profile::from(new)))
    }

    /// Looks up a profile by exact username.
    pub fn find_user(&self, username: &str) -> Option<&Profile> {
        self.profiles.get(username)
    }

    /// Checks credentials against a registered profile.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller; both come back as [`DirectoryError::Unauthenticated`].
    pub fn login(&self, username: &str, password: &str) -> Result<&Profile, DirectoryError> {
        match self.find_user(username) {
            Some(profile) if profile.check_password(password) => Ok(profile),
            _ => {
                log::debug!("rejected login for '{username}'");
                Err(DirectoryError::Unauthenticated)
            }
        }
    }

    // ========== Connection Requests ==========

    /// Queues a connection request from `from` to `to`.
    ///
    /// At most one request per ordered pair may be pending; the reverse
    /// direction counts as a separate request.
    pub fn send_request(&mut self, from: &str, to: &str) -> Result<(), DirectoryError> {
        if !self.profiles.contains_key(to) {
            return Err(DirectoryError::UserNotFound { username: to.to_owned() });
        }
        if from == to {
            return Err(DirectoryError::SelfConnection);
        }
        let inbox = self.pending.entry(to.to_owned()).or_default();
        if inbox.iter().any(|sender| sender == from) {
            return Err(DirectoryError::DuplicateRequest {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }
        inbox.push(from.to_owned());
        log::debug!("connection request queued: '{from}' -> '{to}'");
        Ok(())
    }

    /// Senders whose requests await a decision from `username`, oldest first.
    pub fn pending_requests(&self, username: &str) -> &[String] {
        self.pending.get(username).map(Vec::as_slice).unwrap_or_default()
    }

    /// Accepts the pending request `requester` sent to `current`, consuming
    /// it and connecting the pair.
    ///
    /// Accepting after the pair already connected through the reverse
    /// direction still consumes the request and leaves the edge alone.
    pub fn accept_request(&mut self, current: &str, requester: &str) -> Result<(), DirectoryError> {
        let has_request = self
            .pending
            .get(current)
            .is_some_and(|senders| senders.iter().any(|sender| sender == requester));
        if !has_request {
            return Err(DirectoryError::RequestNotFound {
                requester: requester.to_owned(),
            });
        }
        match self.connect(current, requester) {
            Ok(()) | Err(DirectoryError::AlreadyConnected { .. }) => {
                if let Some(senders) = self.pending.get_mut(current) {
                    senders.retain(|sender| sender != requester);
                }
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Confirmed connections of `username`, in acceptance order.
    pub fn connections_of(&self, username: &str) -> &[String] {
        self.connections.get(username).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether an edge exists between the pair (symmetric).
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        self.connections
            .get(a)
            .is_some_and(|list| list.iter().any(|name| name == b))
    }

    /// Guarded symmetric edge add. Every path that creates a connection
    /// funnels through here, so the pair invariants (no self edges, at
    /// most one edge per pair, both profiles registered) hold globally.
    fn connect(&mut self, a: &str, b: &str) -> Result<(), DirectoryError> {
        if a == b {
            return Err(DirectoryError::SelfConnection);
        }
        for name in [a, b] {
            if !self.profiles.contains_key(name) {
                return Err(DirectoryError::UserNotFound { username: name.to_owned() });
            }
        }
        if self.are_connected(a, b) {
            return Err(DirectoryError::AlreadyConnected {
                a: a.to_owned(),
                b: b.to_owned(),
            });
        }
        self.connections.entry(a.to_owned()).or_default().push(b.to_owned());
        self.connections.entry(b.to_owned()).or_default().push(a.to_owned());
        log::info!("'{a}' and '{b}' are now connected");
        Ok(())
    }

    // ========== Posts & Feed ==========

    /// Publishes a post, capturing the author's identity by value.
    pub fn create_post(&mut self, author: &str, content: &str) -> Result<&Post, DirectoryError> {
        let Some(profile) = self.profiles.get(author) else {
            return Err(DirectoryError::UserNotFound { username: author.to_owned() });
        };
        let snapshot = Author::from(profile);
        let id = self.post_ids.next_id();
        log::debug!("post {id} published by '{author}'");
        let index = self.posts.len();
        self.posts.push(Post::new(id, snapshot, content));
        Ok(&self.posts[index])
    }

    /// Adds one like to the post and returns the new tally.
    pub fn like_post(&mut self, id: PostId) -> Result<u64, DirectoryError> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(DirectoryError::PostNotFound { id })?;
        Ok(post.like())
    }

    /// Appends a comment from a registered author to the post.
    pub fn add_comment(&mut self, id: PostId, author: &str, content: &str) -> Result<(), DirectoryError> {
        let author_name = match self.profiles.get(author) {
            Some(profile) => profile.display_name.clone(),
            None => return Err(DirectoryError::UserNotFound { username: author.to_owned() }),
        };
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(DirectoryError::PostNotFound { id })?;
        post.add_comment(author_name, content);
        Ok(())
    }

    /// The posts visible to `username`: their own plus their connections',
    /// in global publication order.
    pub fn news_feed(&self, username: &str) -> Result<Vec<&Post>, DirectoryError> {
        if !self.profiles.contains_key(username) {
            return Err(DirectoryError::UserNotFound { username: username.to_owned() });
        }
        let visible = self.connections_of(username);
        Ok(self
            .posts
            .iter()
            .filter(|post| {
                post.author.username == username
                    || visible.iter().any(|name| *name == post.author.username)
            })
            .collect())
    }

    /// Every post in publication order.
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a post by id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    // ========== Search & Stats ==========

    /// Case-sensitive substring search over usernames and display names,
    /// results in username order.
    pub fn search_users(&self, query: &str) -> Vec<&Profile> {
        self.profiles
            .values()
            .filter(|profile| profile.username.contains(query) || profile.display_name.contains(query))
            .collect()
    }

    /// Every profile in username order.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

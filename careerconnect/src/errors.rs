use thiserror::Error;

use crate::id::PostId;

/// Top-level error type returned by [`Directory`](crate::Directory) operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Validation failed for one or more registration fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// No profile is registered under the given username.
    #[error("user '{username}' not found")]
    UserNotFound { username: String },

    /// No post exists with the given id.
    #[error("post {id} not found")]
    PostNotFound { id: PostId },

    /// No pending connection request from the given sender.
    #[error("no connection request from '{requester}'")]
    RequestNotFound { requester: String },

    /// Unique-username constraint violation - the name already belongs to another profile.
    #[error("username '{username}' is already taken")]
    UsernameTaken { username: String },

    /// A request between the pair is already waiting for a decision.
    #[error("a connection request from '{from}' to '{to}' is already pending")]
    DuplicateRequest { from: String, to: String },

    /// The pair already shares a connection edge.
    #[error("'{a}' and '{b}' are already connected")]
    AlreadyConnected { a: String, b: String },

    /// A profile cannot send a request to or connect with itself.
    #[error("cannot connect a profile with itself")]
    SelfConnection,

    /// Credentials did not match any registered profile.
    #[error("invalid username or password")]
    Unauthenticated,
}

/// Collection of validation issues encountered while preparing a registration.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for fallible validation steps.
pub type ValidationResult<T> = Result<T, ValidationError>;

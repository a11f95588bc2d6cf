//! CareerConnect core library.
//!
//! An in-memory professional-network simulation: profiles with role-specific
//! attributes, a request/accept connection handshake, posts with likes and
//! comments, per-member news feeds, and substring user search. A single
//! [`Directory`] value owns all state; nothing is persisted and nothing
//! touches the network.
//!
//! ```
//! use careerconnect::{Directory, NewProfile, Role};
//!
//! let mut directory = Directory::new();
//! directory.register(NewProfile::new(
//!     "ajohnson",
//!     "pass123",
//!     "Alice Johnson",
//!     Role::Engineer { specialization: "AI Development".into() },
//! ))?;
//! directory.register(NewProfile::new(
//!     "bwilliams",
//!     "pass123",
//!     "Bob Williams",
//!     Role::Doctor { medical_field: "Cardiology".into() },
//! ))?;
//!
//! directory.send_request("ajohnson", "bwilliams")?;
//! directory.accept_request("bwilliams", "ajohnson")?;
//! assert!(directory.are_connected("ajohnson", "bwilliams"));
//!
//! directory.create_post("ajohnson", "Excited to join CareerConnect!")?;
//! let feed = directory.news_feed("bwilliams")?;
//! assert_eq!(feed.len(), 1);
//! # Ok::<(), careerconnect::DirectoryError>(())
//! ```

pub mod directory;
pub mod errors;
pub mod id;
pub mod post;
pub mod profile;
pub mod validators;

pub use directory::Directory;
pub use errors::{DirectoryError, ValidationError, ValidationIssue, ValidationResult};
pub use id::{PostId, PostIdSequence};
pub use post::{Author, Comment, Post};
pub use profile::{NewProfile, Profile, Role};

//! Profile records and the role taxonomy.
//!
//! Roles are a single tagged enum rather than a trait hierarchy; everything
//! role-specific (labels, introductions, attribute lists) dispatches through
//! exhaustive `match` arms so a new variant cannot be half-supported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role-specific attributes attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    /// Someone currently studying.
    Student { university: String, major: String },
    /// General working professional.
    Professional { company: String, title: String },
    /// Engineering specialist.
    Engineer { specialization: String },
    /// Medical practitioner.
    Doctor { medical_field: String },
    /// Working artist.
    Artist { medium: String },
}

impl Role {
    /// Human-readable role name, also captured into author snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student { .. } => "Student",
            Role::Professional { .. } => "Professional",
            Role::Engineer { .. } => "Engineer",
            Role::Doctor { .. } => "Doctor",
            Role::Artist { .. } => "Artist",
        }
    }

    /// The introduction line a member speaks in the scripted walkthrough.
    pub fn introduction(&self, display_name: &str) -> String {
        match self {
            Role::Student { university, major } => {
                format!("Hi, I am {display_name}, a Student majoring in {major} at {university}.")
            }
            Role::Professional { company, title } => {
                format!("Hello, I am {display_name}, {title} at {company}.")
            }
            Role::Engineer { specialization } => {
                format!("Hello, I am {display_name}, an Engineer specializing in {specialization}.")
            }
            Role::Doctor { medical_field } => {
                format!("Greetings, I am Dr. {display_name}, a Doctor working in {medical_field}.")
            }
            Role::Artist { medium } => {
                format!("Hi, I'm {display_name}, an Artist. My primary medium is {medium}.")
            }
        }
    }

    /// Labeled role attributes in display order, for profile cards.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            Role::Student { university, major } => {
                vec![("University", university.as_str()), ("Major", major.as_str())]
            }
            Role::Professional { company, title } => {
                vec![("Company", company.as_str()), ("Title", title.as_str())]
            }
            Role::Engineer { specialization } => vec![("Specialization", specialization.as_str())],
            Role::Doctor { medical_field } => vec![("Medical Field", medical_field.as_str())],
            Role::Artist { medium } => vec![("Primary Medium", medium.as_str())],
        }
    }
}

/// A registered member of the network.
///
/// Holds no connection data; the adjacency index lives on the
/// [`Directory`](crate::Directory) so profiles never reference each other.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Unique username (case-sensitive)
    pub username: String,
    /// Display name shown on posts and profile cards
    pub display_name: String,
    /// Login credential, exact-match compared and never serialized
    #[serde(skip_serializing)]
    password: String,
    /// Role-specific attributes
    #[serde(flatten)]
    pub role: Role,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Compares a login attempt against the stored credential.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// The member's role-specific introduction line.
    pub fn introduction(&self) -> String {
        self.role.introduction(&self.display_name)
    }
}

impl From<NewProfile> for Profile {
    fn from(new: NewProfile) -> Self {
        Self {
            username: new.username,
            display_name: new.display_name,
            password: new.password,
            role: new.role,
            created_at: Utc::now(),
        }
    }
}

/// Registration payload accepted by [`Directory::register`](crate::Directory::register).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub username: String,
    pub password: String,
    pub display_name: String,
    #[serde(flatten)]
    pub role: Role,
}

impl NewProfile {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            display_name: display_name.into(),
            role,
        }
    }
}

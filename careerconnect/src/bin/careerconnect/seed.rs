//! Starter data for console sessions.
//!
//! Seed files are TOML with `[[profiles]]` and `[[posts]]` tables. The
//! built-in seed registers two sample accounts so a fresh session has
//! someone to connect with.

use std::path::Path;

use anyhow::{Context, Result};
use careerconnect::{Directory, NewProfile, Role};
use serde::Deserialize;

/// Parsed seed file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub profiles: Vec<NewProfile>,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
}

/// A starter post published during seeding.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPost {
    pub author: String,
    pub content: String,
}

/// How much a seeding pass loaded.
#[derive(Debug, Clone, Copy)]
pub struct SeedCounts {
    pub profiles: usize,
    pub posts: usize,
}

/// Registers the built-in sample accounts.
pub fn apply_builtin(directory: &mut Directory) -> Result<SeedCounts> {
    apply(directory, builtin())
}

/// Loads a TOML seed file and applies it.
pub fn apply_file(directory: &mut Directory, path: &Path) -> Result<SeedCounts> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let data: SeedData = toml::from_str(&content)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    apply(directory, data)
}

fn apply(directory: &mut Directory, data: SeedData) -> Result<SeedCounts> {
    let counts = SeedCounts {
        profiles: data.profiles.len(),
        posts: data.posts.len(),
    };
    for profile in data.profiles {
        let username = profile.username.clone();
        directory
            .register(profile)
            .with_context(|| format!("Failed to seed profile '{username}'"))?;
    }
    for post in data.posts {
        directory
            .create_post(&post.author, &post.content)
            .with_context(|| format!("Failed to seed a post for '{}'", post.author))?;
    }
    Ok(counts)
}

fn builtin() -> SeedData {
    SeedData {
        profiles: vec![
            NewProfile::new(
                "jdoe",
                "pass123",
                "John Doe",
                Role::Professional {
                    company: "Innovate Inc.".into(),
                    title: "Software Engineer".into(),
                },
            ),
            NewProfile::new(
                "asmith",
                "pass123",
                "Alice Smith",
                Role::Student {
                    university: "State University".into(),
                    major: "Computer Science".into(),
                },
            ),
        ],
        posts: Vec::new(),
    }
}

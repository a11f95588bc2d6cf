//! CLI command handlers.

pub mod demo;
pub mod interactive;

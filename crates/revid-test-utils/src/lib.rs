//! Shared test utilities for the revid workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures with history and tags
//! - [`repo`]: [`repo::TestRepo`] builder pairing a repository with an option file

pub mod git;
pub mod repo;

//! Shared test utilities for the worktree-flow workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`] — git command runner and repository fixtures
//! - [`repo`] — [`TestRepo`](repo::TestRepo) builder with an optional `origin` remote
//! - [`recording`] — [`RecordingOps`](recording::RecordingOps), a `GitOperations` that records calls

pub mod git;
pub mod recording;
pub mod repo;

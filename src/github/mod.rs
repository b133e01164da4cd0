// src/github/mod.rs
// =============================================================================
// This module knows about remote repositories.
//
// Submodules:
// - coordinate: parse a repository URL into owner / repo / subpath
// - fetch: clone that repository onto local disk
//
// Nothing in here reads files; that happens in the loader module once a
// checkout exists.
// =============================================================================

mod fetch;
mod coordinate;

pub use fetch::{CloneTransport, Fetcher, GitCli};
pub use coordinate::RepositoryCoordinate;

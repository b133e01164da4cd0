// src/lib.rs
// =============================================================================
// repo-loader: clone a remote repository and turn its text files into
// documents for indexing.
//
// Pipeline:
//   URL --(github::RepositoryCoordinate)--> owner / repo / subpath
//       --(github::Fetcher)--> local checkout
//       --(loader)--> walk, classify, read --> Vec<Document>
//
// Example:
//
//   let loader = GithubRepoLoader::new(
//       "https://github.com/acme/widgets",
//       LoaderConfig::default(),
//   )?;
//   let documents = loader.load().await?;
// =============================================================================

pub mod binary_extensions;
pub mod config;
pub mod document;
pub mod error;
pub mod github;
pub mod loader;

pub use config::{IgnoreRule, LoaderConfig, PathPattern, UnknownHandling, ACCESS_TOKEN_ENV};
pub use document::{Document, DocumentMetadata};
pub use error::{LoaderError, Result};
pub use github::{CloneTransport, GitCli, RepositoryCoordinate};
pub use loader::GithubRepoLoader;

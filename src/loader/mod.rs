// src/loader/mod.rs
// =============================================================================
// This module turns a repository URL into a list of documents.
//
// How load() works:
// 1. Clone the configured branch (github::Fetcher)
// 2. Put the start directory (the URL's subpath) in a queue
// 3. Pop a directory, list it, and for each entry:
//    - directory: queue it (only when recursive)
//    - file: classify it, read it if eligible, push a Document
// 4. Repeat until the queue is empty
//
// Failures:
// - URL / clone / ignore rule problems abort straight away
// - a directory that cannot be listed or a file that cannot be read goes
//   through UnknownHandling (see policy.rs)
//
// Submodules:
// - walk: list one directory, read one file
// - classify: binary and ignore checks
// - policy: Ignore / Warn / Error
// =============================================================================

mod classify;
mod policy;
mod walk;

pub use classify::{classify, extension_of, Classification};
pub use policy::handle_unknown;
pub use walk::{confine, list_dir, read_text, DirListing, EntryKind, TreeEntry};

use walk::{display_path, local_path};

use crate::config::LoaderConfig;
use crate::document::{Document, DocumentMetadata};
use crate::error::{LoaderError, Result};
use crate::github::{CloneTransport, Fetcher, GitCli, RepositoryCoordinate};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Loads every eligible text file of a remote repository as a Document.
///
/// The URL is parsed once when the loader is built; each call to
/// [`GithubRepoLoader::load`] clones and walks the repository from scratch.
///
/// Two loads of the same repository name share a checkout directory, so
/// they must not run at the same time.
pub struct GithubRepoLoader {
    coordinate: RepositoryCoordinate,
    config: LoaderConfig,
    access_token: Option<String>,
    fetcher: Fetcher,
}

impl GithubRepoLoader {
    /// Build a loader that clones with the system `git` binary.
    ///
    /// Fails with MalformedUrl if `url` is not a repository URL.
    pub fn new(url: &str, config: LoaderConfig) -> Result<Self> {
        Self::with_transport(url, config, Arc::new(GitCli))
    }

    /// Build a loader with a custom clone transport
    pub fn with_transport(
        url: &str,
        config: LoaderConfig,
        transport: Arc<dyn CloneTransport>,
    ) -> Result<Self> {
        let coordinate = RepositoryCoordinate::parse(url)?;
        let access_token = config.resolve_access_token();
        let fetcher = Fetcher::new(transport, config.checkout_root.clone());

        debug!(
            "Resolved {} to {} (subpath '{}')",
            url,
            coordinate.full_name(),
            coordinate.subpath
        );

        Ok(Self {
            coordinate,
            config,
            access_token,
            fetcher,
        })
    }

    pub fn coordinate(&self) -> &RepositoryCoordinate {
        &self.coordinate
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Clone, walk and read the repository.
    ///
    /// Returns documents in traversal order. Under UnknownHandling::Error the
    /// first listing or read failure is returned and no documents are.
    pub async fn load(&self) -> Result<Vec<Document>> {
        let root = self
            .fetcher
            .materialize(
                &self.coordinate,
                &self.config.branch,
                self.access_token.as_deref(),
            )
            .await?;

        let documents = self.walk(&root).await?;

        info!(
            "Loaded {} document(s) from {}",
            documents.len(),
            self.coordinate.full_name()
        );
        Ok(documents)
    }

    async fn walk(&self, root: &Path) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        // Everything read must stay under the canonical checkout root
        let root = match tokio::fs::canonicalize(root).await {
            Ok(root) => root,
            Err(source) => {
                handle_unknown(
                    self.config.unknown,
                    LoaderError::ListingFailure {
                        path: display_path(""),
                        source,
                    },
                )?;
                return Ok(documents);
            }
        };

        let subpath = &self.coordinate.subpath;
        let mut queue = VecDeque::new();
        // The start directory may itself be a link
        match confine(&root, &local_path(&root, subpath)).await {
            Ok(start) => queue.push_back((start, subpath.clone())),
            Err(source) => handle_unknown(
                self.config.unknown,
                LoaderError::ListingFailure {
                    path: display_path(subpath),
                    source,
                },
            )?,
        }

        while let Some((dir, relative_dir)) = queue.pop_front() {
            let listing = match list_dir(&dir, &relative_dir).await {
                Ok(listing) => listing,
                Err(e) => {
                    handle_unknown(self.config.unknown, e)?;
                    continue;
                }
            };

            self.visit(&root, listing, &mut queue, &mut documents)
                .await?;
        }

        Ok(documents)
    }

    /// Handle one directory listing: queue subdirectories, assemble files
    async fn visit(
        &self,
        root: &Path,
        listing: DirListing,
        queue: &mut VecDeque<(PathBuf, String)>,
        documents: &mut Vec<Document>,
    ) -> Result<()> {
        for failure in listing.failures {
            handle_unknown(self.config.unknown, failure)?;
        }

        for entry in listing.entries {
            match entry.kind {
                EntryKind::Directory if self.config.recursive => {
                    queue.push_back((entry.local_path, entry.relative_path));
                }
                EntryKind::Directory => {
                    debug!("Not descending into {}", entry.relative_path);
                }
                EntryKind::File => {
                    if let Some(document) = self.assemble(root, &entry).await? {
                        documents.push(document);
                    }
                }
            }
        }

        Ok(())
    }

    /// Classify one file and, if it is eligible, read it into a Document
    async fn assemble(&self, root: &Path, entry: &TreeEntry) -> Result<Option<Document>> {
        let path = &entry.relative_path;

        match classify(path, &self.config.ignore_rules)? {
            Classification::Binary => {
                debug!("Skipping binary file {}", path);
                return Ok(None);
            }
            Classification::Ignored(rule) => {
                debug!("Ignoring {} (rule #{})", path, rule);
                return Ok(None);
            }
            Classification::Eligible => {}
        }

        match read_text(root, entry).await {
            Ok(content) => Ok(Some(Document::new(
                content,
                DocumentMetadata {
                    source: path.clone(),
                },
            ))),
            Err(e) => {
                handle_unknown(self.config.unknown, e)?;
                Ok(None)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a queue instead of recursion?
//    - A deep tree can't overflow the stack when pending directories live
//      in a VecDeque
//    - pop_front() + push_back() gives breadth-first order
//
// 2. What does `handle_unknown(...)?` do in the middle of a loop?
//    - Ok(()) means "keep going", so we `continue` or skip the file
//    - Err(e) is returned by `?`, which ends load() with no documents
//
// 3. Why Option<Document> from assemble()?
//    - None = skipped (binary, ignored, or unreadable under Warn/Ignore)
//    - Some = a document to keep
// -----------------------------------------------------------------------------

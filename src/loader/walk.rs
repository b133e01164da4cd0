// src/loader/walk.rs
// =============================================================================
// Lists one directory of a checkout and reads files out of it.
//
// Paths come back relative to the repository root ("src/main.ts"), not to
// the directory being listed, so a document's source is the same however
// deep the walk started. Order is whatever the filesystem returns.
//
// Each entry keeps two names:
// - relative_path: a UTF-8 string for ignore rules and document metadata
// - local_path: the real on-disk path, used for all I/O (file names do not
//   have to be valid UTF-8)
//
// Symlinks are never descended into. A link is listed as a file; reading it
// only succeeds when its target resolves inside the checkout.
//
// The .git directory at the root is left out: it belongs to the checkout,
// not to the repository tree.
// =============================================================================

use crate::error::{LoaderError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Name of the VCS metadata directory created by the clone
const GIT_DIR: &str = ".git";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub relative_path: String,
    pub local_path: PathBuf,
    pub kind: EntryKind,
}

/// Result of listing one directory.
///
/// A listing can fail part-way; `entries` then holds everything read before
/// the failure and `failures` says what went wrong.
#[derive(Debug, Default)]
pub struct DirListing {
    pub entries: Vec<TreeEntry>,
    pub failures: Vec<LoaderError>,
}

/// Absolute location of a repo-relative path
pub fn local_path(root: &Path, relative: &str) -> PathBuf {
    if relative.is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}

/// Resolve `path` (following links) and refuse anything outside `root`.
/// `root` must already be canonical.
pub async fn confine(root: &Path, path: &Path) -> io::Result<PathBuf> {
    let resolved = tokio::fs::canonicalize(path).await?;
    if resolved.starts_with(root) {
        Ok(resolved)
    } else {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "symlink leads outside the repository",
        ))
    }
}

/// One level of listing of `dir`, whose repo-relative path is `relative_dir`
/// ("" is the repository root)
pub async fn list_dir(dir: &Path, relative_dir: &str) -> Result<DirListing> {
    let listing_failure = |source: io::Error| LoaderError::ListingFailure {
        path: display_path(relative_dir),
        source,
    };

    let mut reader = tokio::fs::read_dir(dir).await.map_err(listing_failure)?;

    let mut listing = DirListing::default();
    loop {
        let entry = match reader.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                // The reader is in an unknown state; keep what we have
                listing.failures.push(listing_failure(e));
                break;
            }
        };

        let file_name = entry.file_name();
        if relative_dir.is_empty() && file_name == GIT_DIR {
            continue;
        }

        let name = file_name.to_string_lossy();
        let relative_path = if relative_dir.is_empty() {
            name.into_owned()
        } else {
            format!("{}/{}", relative_dir, name)
        };

        // file_type() does not follow symlinks, so a link is never a Directory
        let kind = match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(e) => {
                listing.failures.push(listing_failure(e));
                continue;
            }
        };

        listing.entries.push(TreeEntry {
            relative_path,
            local_path: entry.path(),
            kind,
        });
    }

    Ok(listing)
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
pub async fn read_text(root: &Path, entry: &TreeEntry) -> Result<String> {
    let read_failure = |source: io::Error| LoaderError::ReadFailure {
        path: entry.relative_path.clone(),
        source,
    };

    let target = confine(root, &entry.local_path)
        .await
        .map_err(read_failure)?;
    let bytes = tokio::fs::read(&target).await.map_err(read_failure)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn display_path(relative: &str) -> String {
    if relative.is_empty() {
        "/".to_string()
    } else {
        relative.to_string()
    }
}

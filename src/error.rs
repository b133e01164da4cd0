// src/error.rs
// =============================================================================
// Every way a load can fail.
//
// Two kinds of failure live here:
// - Fatal: the URL is malformed, the clone failed, or an ignore rule is
//   broken. These always abort load().
// - Policy-gated: one directory could not be listed or one file could not be
//   read. What happens next depends on UnknownHandling (see loader/policy.rs).
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from the #[error] strings
// - Enums with named fields: each variant carries its own context
// =============================================================================

use thiserror::Error;

/// Errors produced while resolving, fetching or walking a repository.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input URL does not look like `https://host/owner/repo[/tree/branch/subpath]`
    #[error("Malformed repository URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The repository could not be materialized locally
    #[error("Failed to fetch {repository} (branch '{branch}'): {message}")]
    FetchFailure {
        repository: String,
        branch: String,
        message: String,
    },

    /// A directory could not be listed
    #[error("Failed to list directory '{path}': {source}")]
    ListingFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read
    #[error("Failed to read file '{path}': {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An ignore rule is broken (bad pattern, or its test itself failed)
    #[error("Invalid ignore rule '{rule}': {message}")]
    InvalidIgnoreRule { rule: String, message: String },
}

impl LoaderError {
    /// Only listing and read failures go through UnknownHandling.
    /// Everything else terminates load() unconditionally.
    pub fn is_policy_gated(&self) -> bool {
        matches!(
            self,
            LoaderError::ListingFailure { .. } | LoaderError::ReadFailure { .. }
        )
    }
}

/// Shorthand used across the library
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_only_io_failures_are_policy_gated() {
        let listing = LoaderError::ListingFailure {
            path: "src".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let read = LoaderError::ReadFailure {
            path: "src/main.ts".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(listing.is_policy_gated());
        assert!(read.is_policy_gated());

        let url = LoaderError::MalformedUrl {
            url: "nope".to_string(),
            reason: "no host".to_string(),
        };
        let fetch = LoaderError::FetchFailure {
            repository: "acme/widgets".to_string(),
            branch: "main".to_string(),
            message: "network down".to_string(),
        };
        let rule = LoaderError::InvalidIgnoreRule {
            rule: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(!url.is_policy_gated());
        assert!(!fetch.is_policy_gated());
        assert!(!rule.is_policy_gated());
    }

    #[test]
    fn test_read_failure_message_names_path() {
        let err = LoaderError::ReadFailure {
            path: "docs/guide.md".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk on fire"),
        };
        let message = err.to_string();
        assert!(message.contains("docs/guide.md"));
        assert!(message.contains("disk on fire"));
    }
}

// src/github/coordinate.rs
// =============================================================================
// Turns a repository URL into the coordinate we need for cloning.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo/tree/<branch>/<sub/path>
//
// The <branch> segment of a /tree/ URL is read past but never used: the
// configured branch is the only branch we ever clone. Only the part after it
// becomes the subpath.
//
// Rust concepts:
// - The `url` crate: parses the URL and lower-cases scheme and host for us
// - Slice patterns: match on the path segments directly
// =============================================================================

use crate::error::{LoaderError, Result};
use url::Url;

/// Which repository to fetch, and where inside it to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCoordinate {
    /// Lower-cased host, e.g. "github.com"
    pub host: String,
    pub owner: String,
    pub repository_name: String,
    /// Path inside the repository to start walking from. Empty means the root.
    pub subpath: String,
}

impl RepositoryCoordinate {
    /// Parses a repository URL
    ///
    /// Example:
    ///   "https://github.com/acme/widgets/tree/dev/src/lib"
    ///   -> owner "acme", repository "widgets", subpath "src/lib"
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = |reason: &str| LoaderError::MalformedUrl {
            url: input.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(input.trim()).map_err(|e| malformed(&e.to_string()))?;

        if url.scheme() != "https" {
            return Err(malformed("only https URLs are supported"));
        }

        let host = url
            .host_str()
            .ok_or_else(|| malformed("URL has no host"))?
            .to_string();

        // A trailing slash shows up as an empty last segment
        let mut segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.collect())
            .unwrap_or_default();
        while segments.last() == Some(&"") {
            segments.pop();
        }

        let (owner, repo, subpath) = match segments.as_slice() {
            [owner, repo] => (*owner, *repo, String::new()),
            [owner, repo, "tree", _branch] => (*owner, *repo, String::new()),
            [owner, repo, "tree", _branch, rest @ ..] => (*owner, *repo, rest.join("/")),
            _ => {
                return Err(malformed(
                    "expected https://host/<owner>/<repo> or https://host/<owner>/<repo>/tree/<branch>/<path>",
                ))
            }
        };

        if owner.is_empty() || repo.is_empty() {
            return Err(malformed("owner and repository name must not be empty"));
        }

        Ok(Self {
            host,
            owner: owner.to_string(),
            repository_name: repo.to_string(),
            subpath,
        })
    }

    /// "owner/repo", used in log lines and error messages
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository_name)
    }

    /// URL handed to the clone transport.
    ///
    /// With a token:    https://<token>@host/owner/repo
    /// Without a token: https://host/owner/repo
    pub fn clone_url(&self, access_token: Option<&str>) -> String {
        match access_token {
            Some(token) => format!(
                "https://{}@{}/{}/{}",
                token, self.host, self.owner, self.repository_name
            ),
            None => format!(
                "https://{}/{}/{}",
                self.host, self.owner, self.repository_name
            ),
        }
    }

    /// Same as clone_url but safe to log
    pub fn redacted_clone_url(&self, access_token: Option<&str>) -> String {
        self.clone_url(access_token.map(|_| "***"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_repo_url() {
        let coord = RepositoryCoordinate::parse("https://github.com/acme/widgets").unwrap();
        assert_eq!(coord.host, "github.com");
        assert_eq!(coord.owner, "acme");
        assert_eq!(coord.repository_name, "widgets");
        assert_eq!(coord.subpath, "");
    }

    #[test]
    fn test_parse_tree_url_keeps_subpath_verbatim() {
        let coord =
            RepositoryCoordinate::parse("https://github.com/acme/widgets/tree/dev/sub/dir")
                .unwrap();
        assert_eq!(coord.owner, "acme");
        assert_eq!(coord.repository_name, "widgets");
        assert_eq!(coord.subpath, "sub/dir");
    }

    #[test]
    fn test_tree_url_without_subpath() {
        let coord =
            RepositoryCoordinate::parse("https://github.com/acme/widgets/tree/main").unwrap();
        assert_eq!(coord.subpath, "");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let coord = RepositoryCoordinate::parse("https://github.com/acme/widgets/").unwrap();
        assert_eq!(coord.repository_name, "widgets");
        assert_eq!(coord.subpath, "");

        let coord =
            RepositoryCoordinate::parse("https://github.com/acme/widgets/tree/main/docs/")
                .unwrap();
        assert_eq!(coord.subpath, "docs");
    }

    #[test]
    fn test_scheme_and_host_are_case_insensitive() {
        let coord = RepositoryCoordinate::parse("HTTPS://GitHub.COM/Acme/Widgets").unwrap();
        assert_eq!(coord.host, "github.com");
        // owner and repo are taken as-is
        assert_eq!(coord.owner, "Acme");
        assert_eq!(coord.repository_name, "Widgets");
    }

    #[test]
    fn test_other_hosts_are_accepted() {
        let coord = RepositoryCoordinate::parse("https://git.example.org/team/tool").unwrap();
        assert_eq!(coord.host, "git.example.org");
        assert_eq!(
            coord.clone_url(None),
            "https://git.example.org/team/tool"
        );
    }

    #[test]
    fn test_parse_invalid_urls() {
        for input in [
            "not a url",
            "http://github.com/acme/widgets",
            "https://github.com/acme",
            "https://github.com/",
            "https://github.com/acme/widgets/blob/main/README.md",
            "https://github.com//widgets",
        ] {
            let err = RepositoryCoordinate::parse(input).unwrap_err();
            assert!(
                matches!(err, LoaderError::MalformedUrl { .. }),
                "{} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_clone_url_embeds_token() {
        let coord = RepositoryCoordinate::parse("https://github.com/acme/widgets").unwrap();
        assert_eq!(
            coord.clone_url(Some("s3cret")),
            "https://s3cret@github.com/acme/widgets"
        );
        assert_eq!(coord.clone_url(None), "https://github.com/acme/widgets");
        assert_eq!(
            coord.redacted_clone_url(Some("s3cret")),
            "https://***@github.com/acme/widgets"
        );
    }
}

// src/config.rs
// =============================================================================
// Loader configuration.
//
// A LoaderConfig is handed to the loader once at construction and never
// changes afterwards. Every load() call on that loader reuses it.
//
// Contents:
// - branch / recursive / access token
// - UnknownHandling: what to do when a directory or file cannot be read
// - IgnoreRule: exact paths or patterns to leave out of the result
// - checkout_root: where clones are materialized
//
// Rust concepts:
// - Builder methods (with_*) that take and return self
// - Trait objects (Arc<dyn PathPattern>) for user-supplied matchers
// =============================================================================

use crate::error::{LoaderError, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable consulted when no access token is configured
pub const ACCESS_TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

/// What to do with a directory that cannot be listed or a file that cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownHandling {
    /// Skip it silently
    Ignore,
    /// Log a warning and skip it
    #[default]
    Warn,
    /// Abort the whole load
    Error,
}

/// A custom path matcher for ignore rules.
///
/// `test` returns Ok(true) when the path should be ignored. Returning Err
/// means the matcher itself is broken; the loader treats that as a fatal
/// configuration error no matter what UnknownHandling says.
pub trait PathPattern: fmt::Debug + Send + Sync {
    fn test(&self, path: &str) -> std::result::Result<bool, String>;
}

impl PathPattern for Regex {
    fn test(&self, path: &str) -> std::result::Result<bool, String> {
        Ok(self.is_match(path))
    }
}

/// One entry of the ignore list
#[derive(Debug, Clone)]
pub enum IgnoreRule {
    /// Matches only the exact repo-relative path
    Literal(String),
    /// Matches whatever the pattern says it matches
    Pattern(Arc<dyn PathPattern>),
}

impl IgnoreRule {
    pub fn literal(path: impl Into<String>) -> Self {
        IgnoreRule::Literal(path.into())
    }

    /// Compile a regex rule. A bad expression is reported as InvalidIgnoreRule.
    pub fn regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| LoaderError::InvalidIgnoreRule {
            rule: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(IgnoreRule::Pattern(Arc::new(regex)))
    }

    pub fn pattern(pattern: impl PathPattern + 'static) -> Self {
        IgnoreRule::Pattern(Arc::new(pattern))
    }

    /// Does this rule exclude `path`?
    pub fn matches(&self, path: &str) -> Result<bool> {
        match self {
            IgnoreRule::Literal(literal) => Ok(literal == path),
            IgnoreRule::Pattern(pattern) => {
                pattern
                    .test(path)
                    .map_err(|message| LoaderError::InvalidIgnoreRule {
                        rule: format!("{:?}", pattern),
                        message,
                    })
            }
        }
    }
}

/// Everything that controls a load
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Branch to clone. A branch embedded in a /tree/ URL does not override this.
    pub branch: String,
    /// Descend into subdirectories
    pub recursive: bool,
    pub unknown: UnknownHandling,
    /// Token embedded in the clone URL. Falls back to GITHUB_ACCESS_TOKEN.
    pub access_token: Option<String>,
    /// Checked in order, first match wins
    pub ignore_rules: Vec<IgnoreRule>,
    /// Clones land in <checkout_root>/<repository name>
    pub checkout_root: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            recursive: true,
            unknown: UnknownHandling::default(),
            access_token: None,
            ignore_rules: Vec::new(),
            checkout_root: std::env::temp_dir().join("repo-loader"),
        }
    }
}

impl LoaderConfig {
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_unknown(mut self, unknown: UnknownHandling) -> Self {
        self.unknown = unknown;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_ignore_rule(mut self, rule: IgnoreRule) -> Self {
        self.ignore_rules.push(rule);
        self
    }

    pub fn with_checkout_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.checkout_root = root.into();
        self
    }

    /// Explicit token if set, otherwise the environment. Empty strings count as unset.
    pub(crate) fn resolve_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV).ok())
            .filter(|token| !token.is_empty())
    }
}

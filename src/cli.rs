// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every flag maps onto one LoaderConfig field; into_config() does the mapping.
// =============================================================================

use clap::Parser;
use repo_loader::{IgnoreRule, LoaderConfig, UnknownHandling, ACCESS_TOKEN_ENV};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-loader",
    version,
    about = "Load the text files of a GitHub repository as documents",
    long_about = "repo-loader clones one branch of a repository, walks its files, skips binaries \
                  and ignored paths, and prints the remaining files as documents. \
                  Use --json to feed the result into an indexing pipeline."
)]
pub struct Cli {
    /// Repository URL
    ///
    /// Either https://github.com/owner/repo or
    /// https://github.com/owner/repo/tree/<branch>/<path> to start inside <path>.
    /// The <branch> in a tree URL is not used; pass --branch instead.
    pub repo_url: String,

    /// Branch to clone
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Only load files directly inside the start directory
    #[arg(long)]
    pub no_recursive: bool,

    /// What to do when a directory or file cannot be read
    #[arg(long, value_enum, default_value_t = UnknownHandling::Warn)]
    pub unknown: UnknownHandling,

    /// Access token for private repositories
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Exact repo-relative path to skip (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Regular expression; matching paths are skipped (repeatable)
    #[arg(long = "ignore-pattern", value_name = "REGEX")]
    pub ignore_pattern: Vec<String>,

    /// Directory clones are placed in
    #[arg(long, value_name = "DIR")]
    pub checkout_root: Option<PathBuf>,

    /// Output documents as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log per-file decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the loader configuration. Fails on an invalid --ignore-pattern.
    pub fn into_config(self) -> repo_loader::Result<LoaderConfig> {
        let mut config = LoaderConfig::default()
            .with_branch(self.branch)
            .with_recursive(!self.no_recursive)
            .with_unknown(self.unknown);

        if let Some(token) = self.token {
            config = config.with_access_token(token);
        }
        if let Some(root) = self.checkout_root {
            config = config.with_checkout_root(root);
        }

        // Literal rules first, then patterns, each in command-line order
        for path in self.ignore {
            config = config.with_ignore_rule(IgnoreRule::literal(path));
        }
        for pattern in &self.ignore_pattern {
            config = config.with_ignore_rule(IgnoreRule::regex(pattern)?);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_loader_defaults() {
        let cli = Cli::try_parse_from(["repo-loader", "https://github.com/acme/widgets"]).unwrap();
        assert!(!cli.json);
        let config = cli.into_config().unwrap();
        assert_eq!(config.branch, "main");
        assert!(config.recursive);
        assert_eq!(config.unknown, UnknownHandling::Warn);
        assert!(config.ignore_rules.is_empty());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "repo-loader",
            "https://github.com/acme/widgets",
            "--branch",
            "dev",
            "--no-recursive",
            "--unknown",
            "error",
            "--ignore",
            "README.md",
            "--ignore-pattern",
            r"\.lock$",
            "--checkout-root",
            "/tmp/checkouts",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.branch, "dev");
        assert!(!config.recursive);
        assert_eq!(config.unknown, UnknownHandling::Error);
        assert_eq!(config.ignore_rules.len(), 2);
        assert!(config.ignore_rules[0].matches("README.md").unwrap());
        assert!(config.ignore_rules[1].matches("Cargo.lock").unwrap());
        assert_eq!(config.checkout_root, PathBuf::from("/tmp/checkouts"));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let cli = Cli::try_parse_from([
            "repo-loader",
            "https://github.com/acme/widgets",
            "--ignore-pattern",
            "(",
        ])
        .unwrap();
        assert!(cli.into_config().is_err());
    }
}

// src/github/fetch.rs
// =============================================================================
// This module gets a local copy of a repository onto disk.
//
// Strategy:
// - Work out the destination: <checkout_root>/<repository name>
// - Remove whatever is already there (a previous load of the same repo)
// - Clone exactly one branch into it
//
// The clone itself goes through the CloneTransport trait. GitCli shells out to
// the `git` binary; tests plug in a transport that copies a fixture instead.
//
// Any failure here is fatal for load(): there is nothing to walk without a
// checkout.
//
// Rust concepts:
// - async-trait: async functions inside a trait used as a trait object
// - tokio::process::Command: run git without blocking the runtime
// =============================================================================

use crate::error::{LoaderError, Result};
use crate::github::coordinate::RepositoryCoordinate;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info};

/// Something that can clone a remote repository into a local directory
#[async_trait]
pub trait CloneTransport: Send + Sync {
    /// Clone `branch` of `remote_url` into `destination`.
    /// `destination` does not exist when this is called.
    async fn clone_repo(
        &self,
        remote_url: &str,
        branch: &str,
        destination: &Path,
    ) -> anyhow::Result<()>;
}

/// Clones with the system `git` binary
#[derive(Debug, Clone, Default)]
pub struct GitCli;

#[async_trait]
impl CloneTransport for GitCli {
    async fn clone_repo(
        &self,
        remote_url: &str,
        branch: &str,
        destination: &Path,
    ) -> anyhow::Result<()> {
        let output = Command::new("git")
            .arg("clone")
            .arg("--single-branch")
            .arg("--branch")
            .arg(branch)
            .arg(remote_url)
            .arg(destination)
            // Never block on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git clone exited with {}: {}", output.status, stderr.trim());
        }

        Ok(())
    }
}

/// Materializes a repository coordinate on local disk
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn CloneTransport>,
    checkout_root: PathBuf,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn CloneTransport>, checkout_root: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            checkout_root: checkout_root.into(),
        }
    }

    /// Where `coordinate` ends up once cloned
    pub fn destination(&self, coordinate: &RepositoryCoordinate) -> PathBuf {
        self.checkout_root.join(&coordinate.repository_name)
    }

    /// Clones `branch` of the repository and returns the local root
    pub async fn materialize(
        &self,
        coordinate: &RepositoryCoordinate,
        branch: &str,
        access_token: Option<&str>,
    ) -> Result<PathBuf> {
        let failure = |message: String| LoaderError::FetchFailure {
            repository: coordinate.full_name(),
            branch: branch.to_string(),
            message,
        };

        let destination = self.destination(coordinate);

        // Start from a clean slate so repeated loads behave the same
        let exists = tokio::fs::try_exists(&destination).await.map_err(|e| {
            failure(format!(
                "could not inspect {}: {}",
                destination.display(),
                e
            ))
        })?;
        if exists {
            debug!("Removing previous checkout at {}", destination.display());
            tokio::fs::remove_dir_all(&destination).await.map_err(|e| {
                failure(format!(
                    "could not remove {}: {}",
                    destination.display(),
                    e
                ))
            })?;
        }

        tokio::fs::create_dir_all(&self.checkout_root)
            .await
            .map_err(|e| {
                failure(format!(
                    "could not create {}: {}",
                    self.checkout_root.display(),
                    e
                ))
            })?;

        info!(
            "Cloning {} (branch {}) into {}",
            coordinate.redacted_clone_url(access_token),
            branch,
            destination.display()
        );

        let remote_url = coordinate.clone_url(access_token);
        self.transport
            .clone_repo(&remote_url, branch, &destination)
            .await
            .map_err(|e| failure(redact(&format!("{:#}", e), access_token)))?;

        info!("Cloned {}", coordinate.full_name());
        Ok(destination)
    }
}

// git echoes the remote URL in some errors; keep the token out of them
fn redact(message: &str, access_token: Option<&str>) -> String {
    match access_token {
        Some(token) if !token.is_empty() => message.replace(token, "***"),
        _ => message.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<dyn CloneTransport>?
//    - dyn Trait lets the Fetcher hold any transport without being generic
//    - Arc makes it cheap to share the same transport between clones
//
// 2. Why #[async_trait]?
//    - Trait objects can't return `impl Future` directly
//    - async-trait boxes the future so the trait stays object-safe
//
// 3. What does .output().await do?
//    - Runs git to completion and collects stdout/stderr
//    - The tokio runtime keeps running other tasks while git works
// -----------------------------------------------------------------------------

// src/loader/policy.rs
// =============================================================================
// The one place that decides what a non-fatal failure turns into.
//
//   Ignore -> swallow it
//   Warn   -> log it with tracing::warn! and carry on
//   Error  -> hand it back so load() stops
//
// Only listing and read failures are allowed through here. Anything else
// (bad URL, failed clone, broken ignore rule) is returned unchanged.
// =============================================================================

use crate::config::UnknownHandling;
use crate::error::{LoaderError, Result};
use tracing::warn;

/// Apply `handling` to `error`. Ok(()) means "keep going".
pub fn handle_unknown(handling: UnknownHandling, error: LoaderError) -> Result<()> {
    if !error.is_policy_gated() {
        return Err(error);
    }

    match handling {
        UnknownHandling::Ignore => Ok(()),
        UnknownHandling::Warn => {
            warn!("{}", error);
            Ok(())
        }
        UnknownHandling::Error => Err(error),
    }
}

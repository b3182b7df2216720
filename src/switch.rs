//! Profile switching logic.
//!
//! Switching copies `<config_dir>/<profile>.gitconfig` over `~/.gitconfig`
//! with an atomic replace, then records the new profile in the marker file.
//! The two steps are not transactional: if the marker write fails after the
//! replace, the live config already holds the new profile while the marker
//! still names the old one.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::error::GitconfError;
use crate::fs_utils::{atomic_replace, path_exists};
use crate::paths::Paths;
use crate::state::State;

/// What a switch request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The target was already current; nothing was touched
    AlreadyActive,
    /// `~/.gitconfig` and the marker now name the target
    Switched,
}

/// Switch `git_config` from profile `current` to profile `target`
pub fn switch_to_profile(
    paths: &Paths,
    git_config: &Path,
    current: &str,
    target: &str,
) -> Result<SwitchOutcome> {
    if target == current {
        return Ok(SwitchOutcome::AlreadyActive);
    }

    let source = paths.profile_source(target);
    if !path_exists(&source)? {
        return Err(GitconfError::ProfileNotFound {
            profile: target.to_string(),
            path: source,
        }
        .into());
    }

    // 1. Swap the live config
    atomic_replace(&source, git_config).context("Error setting new git config")?;
    info!(from = current, to = target, "git config replaced");

    // 2. Record it
    State::new(target)
        .write(&paths.marker_file)
        .with_context(|| {
            format!(
                "Failed to update the current gitconf config file ({} now holds '{}' but the marker still names '{}')",
                git_config.display(),
                target,
                current
            )
        })?;

    Ok(SwitchOutcome::Switched)
}

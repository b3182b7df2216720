//! Locator for the live `~/.gitconfig`.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{GitconfError, Result};
use crate::fs_utils::path_exists;
use crate::paths::Paths;

/// Verify that `~/.gitconfig` exists and return its path
///
/// Only existence is checked. gitconf never creates this file; it must be
/// there before the first switch.
pub fn locate_git_config(paths: &Paths) -> Result<PathBuf> {
    if !path_exists(&paths.git_config)? {
        return Err(GitconfError::GitConfigNotFound {
            path: paths.git_config.clone(),
        });
    }

    debug!(path = %paths.git_config.display(), "found git config");
    Ok(paths.git_config.clone())
}

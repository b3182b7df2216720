use std::path::Path;
use tracing::debug;

use crate::error::{GitconfError, Result};
use crate::fs_utils::write_atomic;

/// State stored in ~/.config/gitconf/gitconf.config
///
/// The file holds a single line: the name of the profile last applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The current profile name, trimmed
    pub profile: String,
}

impl State {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    /// Read the marker file
    ///
    /// A missing marker is an error, not an unset profile.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GitconfError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let state = Self::new(content.trim());
        debug!(profile = %state.profile, "read current profile");
        Ok(state)
    }

    /// Write the marker file as `<profile>\n`, atomically
    pub fn write(&self, path: &Path) -> Result<()> {
        write_atomic(path, format!("{}\n", self.profile).as_bytes())?;
        debug!(profile = %self.profile, "recorded current profile");
        Ok(())
    }
}

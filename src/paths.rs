use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{GitconfError, Result};

/// Name of the marker file holding the current profile
pub const MARKER_FILE: &str = "gitconf.config";

/// Extension of profile source files in the config directory
pub const PROFILE_EXT: &str = "gitconfig";

/// All computed paths used by gitconf
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~
    pub home_dir: PathBuf,
    /// ~/.config/gitconf
    pub config_dir: PathBuf,
    /// ~/.config/gitconf/gitconf.config
    pub marker_file: PathBuf,
    /// ~/.gitconfig
    pub git_config: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or(GitconfError::HomeResolution)?;
        Ok(Self::from_home(base_dirs.home_dir()))
    }

    /// Lay out every path under `home`
    pub fn from_home(home: &Path) -> Self {
        let config_dir = home.join(".config").join("gitconf");
        let marker_file = config_dir.join(MARKER_FILE);
        let git_config = home.join(".gitconfig");

        Self {
            home_dir: home.to_path_buf(),
            config_dir,
            marker_file,
            git_config,
        }
    }

    /// Get the path to a profile's source file, `<config_dir>/<name>.gitconfig`
    ///
    /// The name is used as-is; no escaping or validation is applied.
    pub fn profile_source(&self, name: &str) -> PathBuf {
        self.config_dir.join(format!("{name}.{PROFILE_EXT}"))
    }

    /// Ensure the config directory and its parents exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir).map_err(|source| {
            GitconfError::DirectoryCreate {
                path: self.config_dir.clone(),
                source,
            }
        })?;
        debug!(dir = %self.config_dir.display(), "config directory ready");
        Ok(())
    }
}

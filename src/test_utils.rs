//! Test utilities shared across test modules

use crate::paths::Paths;
use std::fs;
use tempfile::TempDir;

/// Create a Paths struct rooted at a temporary directory
///
/// Nothing is created on disk; the temp dir stands in for `$HOME`.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    Paths::from_home(temp_dir.path())
}

/// Lay out a complete home: config dir, `~/.gitconfig`, marker, and one
/// `<name>.gitconfig` per entry in `profiles`
pub fn setup_test_home(temp_dir: &TempDir, current: &str, profiles: &[(&str, &str)]) -> Paths {
    let paths = setup_test_paths(temp_dir);
    fs::create_dir_all(&paths.config_dir).unwrap();
    fs::write(&paths.git_config, format!("# {current}\n")).unwrap();
    fs::write(&paths.marker_file, format!("{current}\n")).unwrap();
    for (name, contents) in profiles {
        fs::write(paths.profile_source(name), contents).unwrap();
    }
    paths
}

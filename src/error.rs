//! Error kinds for gitconf.
//!
//! Library functions return [`GitconfError`]; the command layer wraps them in
//! `anyhow` with extra context before they reach `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying a [`GitconfError`]
pub type Result<T, E = GitconfError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum GitconfError {
    /// The user's home directory could not be determined
    #[error("failed to determine home directory")]
    HomeResolution,

    #[error("failed to create config directory {}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stat call failed for a reason other than "not found"
    #[error("failed to stat {}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(".gitconfig file does not exist at {}", path.display())]
    GitConfigNotFound { path: PathBuf },

    /// No `<profile>.gitconfig` in the config directory
    #[error(
        "profile '{profile}' not found: {} does not exist\nHint: place the profile file there first.",
        path.display()
    )]
    ProfileNotFound { profile: String, path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} -> {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A subcommand was given a flag it does not define
    #[error("flag provided but not defined: {0}")]
    UnknownFlag(String),

    /// `set` was given zero or more than one profile name
    #[error("Expected exactly one profile set arg, got {0}")]
    ArgumentCount(usize),

    #[error("unknown subcommand '{0}'. Expected 'show' or 'set' subcommands")]
    UnknownSubcommand(String),

    #[error("Expected 'show' or 'set' subcommands")]
    MissingSubcommand,
}

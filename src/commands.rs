//! Command handlers for the CLI.
//!
//! Every profile command runs the same startup sequence first (see
//! [`Startup::load`]), even when the command will not use everything it
//! loads. A missing `~/.gitconfig` or marker therefore fails `show` as well
//! as `set`.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::error::GitconfError;
use crate::git_config::locate_git_config;
use crate::paths::Paths;
use crate::state::State;
use crate::switch::{SwitchOutcome, switch_to_profile};
use crate::ui::Ui;

/// Everything resolved before dispatch
#[derive(Debug, Clone)]
pub struct Startup {
    pub paths: Paths,
    /// Verified path of `~/.gitconfig`
    pub git_config: PathBuf,
    /// Profile named by the marker file
    pub current: String,
}

impl Startup {
    /// Ensure the config dir, locate `~/.gitconfig`, then read the marker
    pub fn load(paths: Paths) -> Result<Self> {
        paths.ensure_dirs().context("Unable to locate config")?;
        let git_config = locate_git_config(&paths).context("Unable to locate config")?;
        let current = State::read(&paths.marker_file)
            .context("Unable to extract current profile")?
            .profile;

        Ok(Self {
            paths,
            git_config,
            current,
        })
    }
}

/// Split a subcommand's raw arguments into positionals
///
/// Neither subcommand defines flags of its own, so a leading `-x`/`--x` is
/// rejected. A leading `--` ends flag parsing and is dropped. Flag parsing
/// stops at the first positional; later arguments are taken as-is.
pub fn positionals(args: &[String]) -> Result<&[String], GitconfError> {
    match args.split_first() {
        Some((first, rest)) if first == "--" => Ok(rest),
        Some((first, _)) if first.starts_with('-') && first.len() > 1 => {
            Err(GitconfError::UnknownFlag(first.clone()))
        }
        _ => Ok(args),
    }
}

/// Print the current profile
///
/// Positional arguments are accepted and ignored.
pub fn show(startup: &Startup, args: &[String], ui: &Ui) -> Result<()> {
    positionals(args)?;
    ui.println(format!("Current git config: {}", ui.bold(&startup.current)));
    Ok(())
}

/// Switch to the single profile named in `args`
pub fn set(startup: &Startup, args: &[String], ui: &Ui) -> Result<()> {
    let args = positionals(args)?;
    let [target] = args else {
        return Err(GitconfError::ArgumentCount(args.len()).into());
    };

    match switch_to_profile(
        &startup.paths,
        &startup.git_config,
        &startup.current,
        target,
    )? {
        SwitchOutcome::AlreadyActive => {
            ui.println(format!("Git config is already {}. No-op.", ui.bold(target)));
        }
        SwitchOutcome::Switched => {
            ui.println(format!("set profile: {}", ui.bold(target)));
        }
    }

    Ok(())
}

/// Reject a subcommand that is neither `show` nor `set`
pub fn unknown(_startup: &Startup, name: &str) -> Result<()> {
    Err(GitconfError::UnknownSubcommand(name.to_string()).into())
}

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::process::ExitCode;

use gitconf::{
    commands::{self, Startup},
    error::GitconfError,
    logging,
    paths::Paths,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "gitconf")]
#[command(about = "Switch ~/.gitconfig between saved profiles")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log each filesystem step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current profile
    Show {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Copy ~/.config/gitconf/<PROFILE>.gitconfig over ~/.gitconfig
    Set {
        /// Name of the profile to activate (exactly one)
        #[arg(value_name = "PROFILE", trailing_var_arg = true, allow_hyphen_values = true)]
        profiles: Vec<String>,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);
    let ui = Ui::new(cli.color, cli.no_color);

    match run(cli.command, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            ui.err(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Commands>, ui: &Ui) -> Result<()> {
    let Some(command) = command else {
        return Err(GitconfError::MissingSubcommand.into());
    };

    match command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gitconf", &mut std::io::stdout());
            Ok(())
        }
        Commands::Show { rest } => commands::show(&startup()?, &rest, ui),
        Commands::Set { profiles } => commands::set(&startup()?, &profiles, ui),
        Commands::Other(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            commands::unknown(&startup()?, name)
        }
    }
}

fn startup() -> Result<Startup> {
    Startup::load(Paths::new()?)
}

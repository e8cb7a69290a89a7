use clap::{Parser, Subcommand, command};
use console::style;
use inquire::{Confirm, Select};
use tracing::debug;

use crate::{
    config::{CONFIG_FILE_NAME, Config, ConfigStore, ConventionType},
    convention, git, update,
};

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project
    /// Interactively picks a convention and formatting options, then writes
    /// them to `.cmtrc.json` in the working directory.
    Init,

    /// Create a new commit
    /// Resolves the convention to use, prompts for the pieces of the message
    /// and hands the result to `git commit`.
    #[command(alias = "c")]
    Commit {
        /// Allow the underlying change set to be empty
        #[arg(long = "allow-empty", default_value_t = false)]
        allow_empty: bool,
    },

    /// Update to the latest version
    Update,
}

#[derive(Parser)]
#[command(about = "Write commit messages independent of convention")]
#[command(name = "cmt")]
#[command(version)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Commands,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if the command fails.
pub fn run() -> crate::errors::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => init(),
        Commands::Commit { allow_empty } => commit(allow_empty),
        Commands::Update => update::update(),
    }
}

fn init() -> crate::errors::Result<()> {
    let choice = Select::new(
        "Which convention do you want to use?",
        vec!["Conventional Commits", "Gitmoji"],
    )
    .with_help_message(
        "A lot of projects use Conventional Commits, but Gitmoji is also a popular choice.",
    )
    .prompt()?;

    let convention = match choice {
        "Gitmoji" => ConventionType::Gitmoji,
        _ => ConventionType::ConventionalCommit,
    };

    let uppercase = Confirm::new("Uppercase first letter of commit message?")
        .with_default(false)
        .with_help_message("This will automatically uppercase the first letter of your commit message.")
        .prompt()?;

    ConfigStore::new().write(&Config {
        convention,
        uppercase,
    })?;

    println!(
        "{} Wrote {} ({convention})",
        style("✓").green(),
        CONFIG_FILE_NAME
    );

    Ok(())
}

fn commit(allow_empty: bool) -> crate::errors::Result<()> {
    let provider = convention::determine()?;
    debug!("using {} convention", provider.kind());

    let message = provider.construct()?;

    git::commit(&message, allow_empty)
}

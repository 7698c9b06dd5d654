//! CLI adapter.

mod build;
mod domains;
mod favorite;
mod history;
mod launch;
mod wizard;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "roleprompt")]
#[command(version)]
#[command(about = "Assemble role prompts for chat AI assistants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire and generate a role prompt
    #[clap(visible_alias = "b")]
    Build(build::BuildArgs),
    /// Inspect the generation history
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
    /// Manage named favorites
    #[clap(visible_alias = "f")]
    Favorite {
        #[command(subcommand)]
        command: favorite::FavoriteCommands,
    },
    /// Open a generated prompt in an external chat client
    #[clap(visible_alias = "l")]
    Launch(launch::LaunchArgs),
    /// List built-in domain categories with their focus hints
    Domains,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build(args) => build::run_build(args),
        Commands::History { command } => history::run_history(command),
        Commands::Favorite { command } => favorite::run_favorite(command),
        Commands::Launch(args) => launch::run_launch(args),
        Commands::Domains => domains::run_domains(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! History subcommands.

use clap::Subcommand;

use crate::config::Config;
use crate::domain::AppError;
use crate::ports::PromptStore;
use crate::services::FilesystemPromptStore;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent prompts, newest first
    #[clap(visible_alias = "ls")]
    List,
    /// Print the role prompt of one entry
    Show {
        /// 1-based entry index (newest = 1)
        index: usize,
    },
    /// Remove all history entries (favorites are kept)
    Clear,
}

pub fn run_history(command: HistoryCommands) -> Result<(), AppError> {
    let store = FilesystemPromptStore::from_config(&Config::load()?);

    match command {
        HistoryCommands::List => {
            let shape = store.get_all()?;
            if shape.history.is_empty() {
                println!("No prompts generated yet.");
                return Ok(());
            }
            for (index, entry) in shape.history.iter().enumerate() {
                println!(
                    "{}. {}  ({})",
                    index + 1,
                    entry.result.summary,
                    entry.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        HistoryCommands::Show { index } => {
            let shape = store.get_all()?;
            let entry = index
                .checked_sub(1)
                .and_then(|i| shape.history.get(i))
                .ok_or(AppError::HistoryEntryNotFound(index))?;
            println!("{}", entry.result.role_prompt);
        }
        HistoryCommands::Clear => {
            store.set_history(&[])?;
            println!("✅ Cleared history");
        }
    }
    Ok(())
}

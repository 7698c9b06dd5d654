//! Favorite subcommands.

use chrono::Utc;
use clap::Subcommand;

use crate::config::Config;
use crate::domain::{AppError, FavoriteEntry, entry_id, upsert_favorite};
use crate::ports::PromptStore;
use crate::services::FilesystemPromptStore;

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Save a history entry as a named favorite
    Add {
        /// Display name; an existing favorite with the same name is replaced
        name: String,
        /// 1-based history index (newest when omitted)
        #[arg(long)]
        history: Option<usize>,
    },
    /// List favorites, newest first
    #[clap(visible_alias = "ls")]
    List,
    /// Print the role prompt of a favorite
    Show { name: String },
    /// Rename a favorite
    Rename { name: String, new_name: String },
    /// Replace the stored role prompt of a favorite
    Edit {
        name: String,
        /// New role prompt text
        #[arg(long)]
        prompt: String,
    },
    /// Remove a favorite
    Remove { name: String },
}

pub fn run_favorite(command: FavoriteCommands) -> Result<(), AppError> {
    let store = FilesystemPromptStore::from_config(&Config::load()?);
    let mut shape = store.get_all()?;

    match command {
        FavoriteCommands::Add { name, history } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Validation("Favorite name must not be empty".to_string()));
            }
            let index = history.unwrap_or(1);
            let entry = index
                .checked_sub(1)
                .and_then(|i| shape.history.get(i))
                .ok_or(AppError::HistoryEntryNotFound(index))?;

            let favorite = FavoriteEntry {
                id: entry_id(&format!("{}\n{}", name, entry.result.role_prompt)),
                name: name.clone(),
                added_at: Utc::now(),
                result: entry.result.clone(),
            };
            upsert_favorite(&mut shape.favorites, favorite);
            store.set_favorites(&shape.favorites)?;
            println!("✅ Saved favorite '{}'", name);
        }
        FavoriteCommands::List => {
            if shape.favorites.is_empty() {
                println!("No favorites saved yet.");
                return Ok(());
            }
            for entry in &shape.favorites {
                println!(
                    "{}  -  {}  ({})",
                    entry.name,
                    entry.result.summary,
                    entry.added_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        FavoriteCommands::Show { name } => {
            let entry = shape
                .favorites
                .iter()
                .find(|entry| entry.name == name)
                .ok_or_else(|| AppError::FavoriteNotFound(name.clone()))?;
            println!("{}", entry.result.role_prompt);
        }
        FavoriteCommands::Rename { name, new_name } => {
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                return Err(AppError::Validation("Favorite name must not be empty".to_string()));
            }
            if !shape.favorites.iter().any(|entry| entry.name == name) {
                return Err(AppError::FavoriteNotFound(name));
            }
            // Renaming keeps the replace-by-name invariant: any favorite
            // already holding the target name is dropped.
            shape.favorites.retain(|entry| entry.name != new_name || entry.name == name);
            for entry in &mut shape.favorites {
                if entry.name == name {
                    entry.name = new_name.clone();
                }
            }
            store.set_favorites(&shape.favorites)?;
            println!("✅ Renamed favorite to '{}'", new_name);
        }
        FavoriteCommands::Edit { name, prompt } => {
            let entry = shape
                .favorites
                .iter_mut()
                .find(|entry| entry.name == name)
                .ok_or_else(|| AppError::FavoriteNotFound(name.clone()))?;
            entry.result.role_prompt = prompt;
            store.set_favorites(&shape.favorites)?;
            println!("✅ Updated favorite '{}'", name);
        }
        FavoriteCommands::Remove { name } => {
            let before = shape.favorites.len();
            shape.favorites.retain(|entry| entry.name != name);
            if shape.favorites.len() == before {
                return Err(AppError::FavoriteNotFound(name));
            }
            store.set_favorites(&shape.favorites)?;
            println!("✅ Removed favorite '{}'", name);
        }
    }
    Ok(())
}

//! Launch command: hand the prompt to an external chat destination.

use clap::Args;

use crate::config::Config;
use crate::domain::AppError;
use crate::ports::{ChatLauncher, ClipboardWriter, PromptStore};
use crate::services::{ArboardClipboard, FilesystemPromptStore, SystemChatLauncher, chat_links};

#[derive(Args)]
pub struct LaunchArgs {
    /// Launch a named favorite instead of the newest history entry
    #[arg(long)]
    pub favorite: Option<String>,
    /// Print the web URL instead of opening a destination
    #[arg(long)]
    pub print_url: bool,
}

pub fn run_launch(args: LaunchArgs) -> Result<(), AppError> {
    let config = Config::load()?;
    let store = FilesystemPromptStore::from_config(&config);
    let shape = store.get_all()?;

    let prompt = match &args.favorite {
        Some(name) => shape
            .favorites
            .iter()
            .find(|entry| entry.name == *name)
            .map(|entry| entry.result.role_prompt.clone())
            .ok_or_else(|| AppError::FavoriteNotFound(name.clone()))?,
        None => shape
            .history
            .first()
            .map(|entry| entry.result.role_prompt.clone())
            .ok_or(AppError::EmptyHistory)?,
    };

    if args.print_url {
        println!("{}", chat_links::web_url(&prompt));
        return Ok(());
    }

    // Copy first so the prompt is pasteable even when no destination opens.
    if let Ok(mut clipboard) = ArboardClipboard::new()
        && clipboard.write_text(&prompt).is_ok()
    {
        println!("✅ Copied role prompt to clipboard");
    }

    let launcher = SystemChatLauncher::new(config.prefer_web_launch());
    if launcher.launch(&prompt)? {
        println!("✅ Opened chat destination");
    } else {
        eprintln!("⚠️  Could not open a chat destination. Open this URL manually:");
        eprintln!("{}", chat_links::web_url(&prompt));
    }
    Ok(())
}

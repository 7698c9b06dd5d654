mod chat_launcher;
mod clipboard_writer;
mod prompt_store;

pub use chat_launcher::ChatLauncher;
pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use prompt_store::PromptStore;

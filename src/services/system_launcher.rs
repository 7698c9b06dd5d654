//! Launcher adapter using the operating system's URL handlers.

use crate::domain::AppError;
use crate::ports::ChatLauncher;

use super::chat_links;

/// Opens chat destinations via OS deep links, falling back to the web URL.
pub struct SystemChatLauncher {
    prefer_web: bool,
}

impl SystemChatLauncher {
    /// `prefer_web` skips the app deep links and goes straight to the
    /// browser destination.
    pub fn new(prefer_web: bool) -> Self {
        Self { prefer_web }
    }
}

impl ChatLauncher for SystemChatLauncher {
    fn launch(&self, prompt: &str) -> Result<bool, AppError> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        if !self.prefer_web {
            for candidate in chat_links::app_url_candidates(trimmed) {
                if open::that(&candidate).is_ok() {
                    return Ok(true);
                }
            }
        }

        Ok(open::that(chat_links::web_url(trimmed)).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_rejected_without_opening() {
        let launcher = SystemChatLauncher::new(true);
        assert!(!launcher.launch("   ").expect("launch"));
    }
}

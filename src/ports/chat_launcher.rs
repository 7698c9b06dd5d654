use crate::domain::AppError;

/// Port for handing a prompt to an external chat destination.
pub trait ChatLauncher {
    /// Attempt to open a chat destination with the given prompt text.
    ///
    /// Returns `Ok(true)` when some destination was opened, `Ok(false)` when
    /// every candidate was rejected (including an empty payload). Never
    /// panics; launch failure is reported, not raised.
    fn launch(&self, prompt: &str) -> Result<bool, AppError>;
}

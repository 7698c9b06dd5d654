//! roleprompt: assemble role prompts for chat AI assistants from a guided
//! questionnaire.
//!
//! The core is a pure prompt-generation engine (`domain`): a template
//! registry keyed by domain category and a total `build_prompt` function
//! that turns a form snapshot into a deterministic role prompt document.
//! Persistence, clipboard, and external-launch integrations sit behind
//! `ports` with adapters in `services`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    AppError, PromptBuilderInput, PromptResult, build_prompt, generate_default_skills_text,
    generate_default_tasks_text, get_domain_template,
};

//! Build command: run the questionnaire (or take flags) and generate.

use chrono::Utc;
use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::domain::{
    AppError, CUSTOM_PREFIX, HistoryEntry, PromptBuilderInput, PromptResult, build_prompt,
    entry_id, push_history,
};
use crate::ports::PromptStore;
use crate::services::FilesystemPromptStore;

use super::wizard;

#[derive(Args)]
pub struct BuildArgs {
    /// Domain category (interactive questionnaire when omitted)
    #[arg(long)]
    pub domain: Option<String>,
    /// Re-open the questionnaire seeded from a history entry (1-based)
    #[arg(long, conflicts_with = "domain")]
    pub from_history: Option<usize>,
    /// Domain detail; for the IT domain the comma-joined category encoding
    #[arg(long, default_value = "")]
    pub detail: String,
    /// Industry or usage scene
    #[arg(long, default_value = "")]
    pub industry: String,
    /// Focus topics, newline or comma separated
    #[arg(long, default_value = "")]
    pub focus: String,
    /// Task lines; auto-filled from the domain template when empty
    #[arg(long, default_value = "")]
    pub tasks: String,
    /// Required skill lines; auto-filled from the domain template when empty
    #[arg(long, default_value = "")]
    pub skills: String,
    /// Supplemental information lines
    #[arg(long, default_value = "")]
    pub info: String,
    /// Question draft rendered into the request section
    #[arg(long, default_value = "")]
    pub question: String,
    /// Do not record the result in history
    #[arg(long)]
    pub no_save: bool,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub fn run_build(args: BuildArgs) -> Result<(), AppError> {
    let outcome = match (&args.domain, args.from_history) {
        (Some(domain), _) => Some((input_from_args(domain, &args)?, args.question.clone())),
        (None, Some(index)) => {
            let stored = history_input(index)?;
            wizard::run_wizard_from(&stored)?.map(|o| (o.input, o.question))
        }
        (None, None) => wizard::run_wizard()?.map(|o| (o.input, o.question)),
    };
    let Some((input, question)) = outcome else {
        return Ok(());
    };

    let result = build_prompt(&input, &question);
    print_result(&result, args.format)?;

    if !args.no_save {
        // Optimistic update: persistence failures must not fail the build.
        if let Err(err) = record_history(&result) {
            eprintln!("⚠️  Failed to persist history: {}", err);
        }
    }
    Ok(())
}

fn input_from_args(domain: &str, args: &BuildArgs) -> Result<PromptBuilderInput, AppError> {
    if domain.trim().starts_with(CUSTOM_PREFIX) && args.detail.trim().is_empty() {
        return Err(AppError::Validation(
            "--detail is required for the custom domain".to_string(),
        ));
    }

    Ok(PromptBuilderInput {
        domain_category: domain.to_string(),
        domain_detail: args.detail.clone(),
        industry: args.industry.clone(),
        focus_topics: args.focus.clone(),
        tasks: args.tasks.clone(),
        required_skills: args.skills.clone(),
        additional_info: args.info.clone(),
    })
}

fn print_result(result: &PromptResult, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            println!("{}", result.summary);
            println!();
            println!("{}", result.role_prompt);
            println!();
            println!("この後に確認しておきたいこと:");
            for question in &result.follow_up_questions {
                println!("- {}", question);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(result)?),
    }
    Ok(())
}

fn history_input(index: usize) -> Result<PromptBuilderInput, AppError> {
    let store = FilesystemPromptStore::from_config(&Config::load()?);
    let shape = store.get_all()?;
    index
        .checked_sub(1)
        .and_then(|i| shape.history.get(i))
        .map(|entry| entry.result.input.clone())
        .ok_or(AppError::HistoryEntryNotFound(index))
}

fn record_history(result: &PromptResult) -> Result<(), AppError> {
    let store = FilesystemPromptStore::from_config(&Config::load()?);
    let mut shape = store.get_all()?;
    let entry = HistoryEntry {
        id: entry_id(&result.role_prompt),
        created_at: Utc::now(),
        result: result.clone(),
    };
    push_history(&mut shape.history, entry);
    store.set_history(&shape.history)
}

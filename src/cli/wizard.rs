//! Interactive questionnaire.
//!
//! Mirrors the derived-state rules of the form: tasks and skills are
//! auto-filled from the domain template while untouched, a user edit makes
//! them authoritative, and re-selecting the domain category resets them to
//! auto. Editing the industry refreshes auto-filled fields but never resets
//! an edited one.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, MultiSelect, Select};

use crate::domain::{
    AppError, CHILDCARE_TOPIC_OPTIONS, DOMAIN_CHILDCARE, DOMAIN_CUSTOM, DOMAIN_IMAGE, DOMAIN_IT,
    DOMAIN_NATURE, DOMAIN_OPTIONS, DOMAIN_RECIPE, FieldFill, IT_CATEGORY_OPTIONS, IndustryChoice,
    ItSelection, PromptBuilderInput, generate_default_skills_text, generate_default_tasks_text,
    get_domain_template,
};

pub(crate) struct WizardOutcome {
    pub input: PromptBuilderInput,
    pub question: String,
}

struct WizardState {
    domain_category: String,
    domain_detail: String,
    industry: String,
    focus_topics: String,
    tasks: String,
    skills: String,
    additional_info: String,
    tasks_fill: FieldFill,
    skills_fill: FieldFill,
}

impl WizardState {
    fn refresh_auto_fields(&mut self) {
        if self.tasks_fill.is_auto() {
            self.tasks = generate_default_tasks_text(
                &self.domain_category,
                &self.domain_detail,
                &self.industry,
            );
        }
        if self.skills_fill.is_auto() {
            self.skills = generate_default_skills_text(
                &self.domain_category,
                &self.domain_detail,
                &self.industry,
            );
        }
    }
}

const MENU_ITEMS: [&str; 6] = [
    "ロールプロンプトを生成する",
    "テーマ・領域を選び直す",
    "主な実施タスクを編集する",
    "必須のスキルセットを編集する",
    "業界・利用シーンを編集する",
    "キャンセル",
];

/// Run the questionnaire. `Ok(None)` means the user cancelled.
pub(crate) fn run_wizard() -> Result<Option<WizardOutcome>, AppError> {
    let Some(state) = collect_domain_section()? else {
        return Ok(None);
    };
    wizard_loop(state)
}

/// Re-open the questionnaire seeded from a stored input.
///
/// Mirrors the hydrate path of the form: the legacy string encodings are
/// parsed back into structured selections and re-encoded, and a field that
/// already carries user text starts out `Manual`.
pub(crate) fn run_wizard_from(input: &PromptBuilderInput) -> Result<Option<WizardOutcome>, AppError> {
    let domain_detail = if input.domain_category == DOMAIN_IT {
        ItSelection::parse(&input.domain_detail).encode()
    } else {
        input.domain_detail.clone()
    };
    let industry = match IndustryChoice::parse(&input.industry) {
        IndustryChoice::Unspecified => String::new(),
        choice => choice.encode(),
    };

    let tasks_fill =
        if input.tasks.trim().is_empty() { FieldFill::Auto } else { FieldFill::Manual };
    let skills_fill =
        if input.required_skills.trim().is_empty() { FieldFill::Auto } else { FieldFill::Manual };

    let mut state = WizardState {
        domain_category: input.domain_category.clone(),
        domain_detail,
        industry,
        focus_topics: input.focus_topics.clone(),
        tasks: input.tasks.clone(),
        skills: input.required_skills.clone(),
        additional_info: input.additional_info.clone(),
        tasks_fill,
        skills_fill,
    };
    state.refresh_auto_fields();
    wizard_loop(state)
}

fn wizard_loop(mut state: WizardState) -> Result<Option<WizardOutcome>, AppError> {
    loop {
        println!();
        println!("現在の入力: {}", state.domain_category);
        let Some(action) = select("次の操作", &MENU_ITEMS)? else {
            return Ok(None);
        };
        match action {
            0 => break,
            1 => {
                // Domain change resets the auto-fill state of both fields.
                if let Some(next) = collect_domain_section()? {
                    state = next;
                }
            }
            2 => edit_field(&mut state, Field::Tasks)?,
            3 => edit_field(&mut state, Field::Skills)?,
            4 => edit_industry(&mut state)?,
            _ => return Ok(None),
        }
    }

    let additional_info = if state.additional_info.trim().is_empty() {
        match prompt_multiline("AIへの補足情報（任意・URLも可）")? {
            Some(info) => info,
            None => return Ok(None),
        }
    } else {
        state.additional_info.clone()
    };
    let Some(question) = prompt_multiline("AIに質問したい内容（任意）")? else {
        return Ok(None);
    };

    let input = PromptBuilderInput {
        domain_category: state.domain_category,
        domain_detail: state.domain_detail,
        industry: state.industry,
        focus_topics: state.focus_topics,
        tasks: state.tasks,
        required_skills: state.skills,
        additional_info,
    };
    Ok(Some(WizardOutcome { input, question }))
}

fn collect_domain_section() -> Result<Option<WizardState>, AppError> {
    let Some(index) = select("テーマ・領域", &DOMAIN_OPTIONS)? else {
        return Ok(None);
    };
    let category = DOMAIN_OPTIONS[index].to_string();

    let domain_detail = match category.as_str() {
        DOMAIN_IT => match collect_it_selection()? {
            Some(selection) => selection.encode(),
            None => return Ok(None),
        },
        DOMAIN_CUSTOM => match prompt_required("テーマの詳細")? {
            Some(detail) => detail,
            None => return Ok(None),
        },
        _ => String::new(),
    };

    // The scene-style domains pin their own industry label; the image
    // domain does not use one at all.
    let industry = if matches!(
        category.as_str(),
        DOMAIN_NATURE | DOMAIN_RECIPE | DOMAIN_CHILDCARE | DOMAIN_IMAGE
    ) {
        String::new()
    } else {
        match prompt_optional("想定している業界・利用シーン（任意）")? {
            Some(industry) => industry,
            None => return Ok(None),
        }
    };

    let focus_topics = if category == DOMAIN_CHILDCARE {
        match collect_childcare_topics()? {
            Some(topics) => topics,
            None => return Ok(None),
        }
    } else {
        let template = get_domain_template(&category);
        if template.has_focus_section {
            println!("  {}", template.focus_placeholder);
            match prompt_optional("特に知りたい内容（任意・カンマ区切り）")? {
                Some(focus) => focus,
                None => return Ok(None),
            }
        } else {
            String::new()
        }
    };

    let mut state = WizardState {
        domain_category: category,
        domain_detail,
        industry,
        focus_topics,
        tasks: String::new(),
        skills: String::new(),
        additional_info: String::new(),
        tasks_fill: FieldFill::default(),
        skills_fill: FieldFill::default(),
    };
    state.refresh_auto_fields();
    Ok(Some(state))
}

fn collect_it_selection() -> Result<Option<ItSelection>, AppError> {
    let chosen = MultiSelect::new()
        .with_prompt("興味のある分野（スペースで選択）")
        .items(&IT_CATEGORY_OPTIONS)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select categories: {}", err)))?;
    let Some(chosen) = chosen else {
        return Ok(None);
    };

    let other_selected = chosen.contains(&(IT_CATEGORY_OPTIONS.len() - 1));
    let categories: Vec<String> = chosen
        .iter()
        .filter(|&&index| index < IT_CATEGORY_OPTIONS.len() - 1)
        .map(|&index| IT_CATEGORY_OPTIONS[index].to_string())
        .collect();

    let other = if other_selected {
        match prompt_optional("その他（自由記述）の内容")? {
            Some(text) => Some(text),
            None => return Ok(None),
        }
    } else {
        None
    };

    Ok(Some(ItSelection { categories, other }))
}

fn collect_childcare_topics() -> Result<Option<String>, AppError> {
    let chosen = MultiSelect::new()
        .with_prompt("特に知りたい内容（スペースで選択）")
        .items(&CHILDCARE_TOPIC_OPTIONS)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select topics: {}", err)))?;
    let Some(chosen) = chosen else {
        return Ok(None);
    };

    let topics: Vec<&str> = chosen.iter().map(|&index| CHILDCARE_TOPIC_OPTIONS[index]).collect();
    Ok(Some(topics.join("\n")))
}

enum Field {
    Tasks,
    Skills,
}

fn edit_field(state: &mut WizardState, field: Field) -> Result<(), AppError> {
    let (label, current) = match field {
        Field::Tasks => ("主な実施タスク", &state.tasks),
        Field::Skills => ("必須のスキルセット", &state.skills),
    };
    println!("{}（現在の内容）:", label);
    println!("{}", current);

    let Some(replacement) = prompt_multiline("新しい内容（入力なしで現状維持）")? else {
        return Ok(());
    };
    if replacement.trim().is_empty() {
        return Ok(());
    }

    match field {
        Field::Tasks => {
            state.tasks = replacement;
            state.tasks_fill.on_edit();
        }
        Field::Skills => {
            state.skills = replacement;
            state.skills_fill.on_edit();
        }
    }
    Ok(())
}

fn edit_industry(state: &mut WizardState) -> Result<(), AppError> {
    let Some(value) = prompt_text("想定している業界・利用シーン", Some(&state.industry), true)?
    else {
        return Ok(());
    };
    if value != state.industry {
        state.industry = value;
        // Dependency change: refresh auto-filled fields, keep edited ones.
        state.refresh_auto_fields();
    }
    Ok(())
}

fn select(prompt: &str, items: &[&str]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select: {}", err)))
}

fn prompt_text(
    prompt: &str,
    initial: Option<&str>,
    allow_empty: bool,
) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read input: {}", err))),
    }
}

fn prompt_optional(prompt: &str) -> Result<Option<String>, AppError> {
    prompt_text(prompt, None, true)
}

fn prompt_required(prompt: &str) -> Result<Option<String>, AppError> {
    loop {
        match prompt_text(prompt, None, false)? {
            Some(value) if value.trim().is_empty() => continue,
            other => return Ok(other),
        }
    }
}

/// Read lines until an empty line; `Ok(None)` on interrupt.
fn prompt_multiline(prompt: &str) -> Result<Option<String>, AppError> {
    println!("{}（1行ずつ入力、空行で確定）", prompt);
    let mut lines = Vec::new();
    loop {
        match prompt_text("", None, true)? {
            Some(line) if line.trim().is_empty() => break,
            Some(line) => lines.push(line),
            None => return Ok(None),
        }
    }
    Ok(Some(lines.join("\n")))
}

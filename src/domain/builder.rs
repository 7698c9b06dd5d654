//! Prompt assembly.
//!
//! `build_prompt` is a pure, total function: every input combination has a
//! defined fallback and the same input always produces byte-identical
//! output. Caller-side validation (required category, required detail for
//! the custom domain) is a UI concern and not enforced here.

use super::labels::{IndustryDisplay, resolve_domain_label, resolve_industry};
use super::prompt::{PromptBuilderInput, PromptResult};
use super::sanitize::{sanitize_delimited, sanitize_lines};
use super::template::{DomainTemplate, TemplateContext, get_domain_template};

/// Section separator literal.
const SECTION_RULE: &str = "\n---\n\n";
/// Rendered when no supplemental information was given.
const NO_ADDITIONAL_INFO_LINE: &str = "- 現時点で共有された追加情報はありません。";
/// Rendered when the question draft is empty.
const AWAITING_REQUEST_LINE: &str = "これから依頼を致しますので、回答をお願いたします";

/// Build the role prompt document, summary, and follow-up questions for one
/// questionnaire submission.
///
/// The returned `input` is normalized: focus topics are rewritten to the
/// one-item-per-line form actually used during assembly.
pub fn build_prompt(input: &PromptBuilderInput, question_draft: &str) -> PromptResult {
    let template = get_domain_template(&input.domain_category);
    let domain = resolve_domain_label(&input.domain_category, &input.domain_detail);
    let industry = resolve_industry(&input.industry, template.industry_style);

    let focus_items = sanitize_delimited(&input.focus_topics);
    let ctx = TemplateContext {
        domain: domain.clone(),
        industry_display: industry.display.clone(),
        has_industry: industry.has_industry,
        focus_label: focus_items.join("、"),
    };

    let task_lines = effective_lines(&input.tasks, || template.default_tasks(&ctx));
    let skill_lines = effective_lines(&input.required_skills, || template.default_skills(&ctx));
    let info_items = sanitize_lines(&input.additional_info);

    let mut sections = Vec::with_capacity(8);
    sections.push(format!("# ロール定義\n{}", template.render_role_definition(&ctx)));
    sections.push(format!("## 主な実施タスク・業務内容\n{}", task_lines.join("\n")));
    sections.push(format!("## 必須のスキルセット\n{}", skill_lines.join("\n")));
    if template.has_focus_section && !focus_items.is_empty() {
        sections.push(format!("## 特に知りたい内容\n{}", dash_bullets(&focus_items)));
    }
    sections.push(format!("## AIに知っておいてほしい情報\n{}", additional_info_section(&info_items)));
    sections.push(format!("# 出力条件\n{}", rule_bullets(template.output_conditions)));
    sections.push(format!("# レビュー指針\n{}", rule_bullets(template.review_guidelines)));
    sections.push(format!("# 依頼事項\n{}", request_section(question_draft)));

    let role_prompt = sections.join(SECTION_RULE);
    let summary = format!("{} / 業界: {}", domain, industry.label);
    let follow_up_questions = follow_up_questions(&domain, &industry, &focus_items);

    let normalized_input =
        PromptBuilderInput { focus_topics: focus_items.join("\n"), ..input.clone() };

    PromptResult { input: normalized_input, role_prompt, summary, follow_up_questions }
}

/// Newline-joined auto-fill task text for the given selection, as shown in
/// the questionnaire's tasks field.
pub fn generate_default_tasks_text(category: &str, detail: &str, industry: &str) -> String {
    let (template, ctx) = autofill_context(category, detail, industry);
    template.default_tasks(&ctx).join("\n")
}

/// Newline-joined auto-fill skills text for the given selection.
pub fn generate_default_skills_text(category: &str, detail: &str, industry: &str) -> String {
    let (template, ctx) = autofill_context(category, detail, industry);
    template.default_skills(&ctx).join("\n")
}

fn autofill_context(
    category: &str,
    detail: &str,
    industry: &str,
) -> (&'static DomainTemplate, TemplateContext) {
    let template = get_domain_template(category);
    let resolved = resolve_industry(industry, template.industry_style);
    let ctx = TemplateContext {
        domain: resolve_domain_label(category, detail),
        industry_display: resolved.display,
        has_industry: resolved.has_industry,
        focus_label: String::new(),
    };
    (template, ctx)
}

/// User lines when any survive sanitization, template defaults otherwise.
fn effective_lines(field: &str, default: impl FnOnce() -> Vec<String>) -> Vec<String> {
    let user_lines = sanitize_lines(field);
    if user_lines.is_empty() {
        default()
    } else {
        user_lines.into_iter().map(ensure_task_bullet).collect()
    }
}

fn ensure_task_bullet(line: String) -> String {
    if line.starts_with('・') || line.starts_with("- ") { line } else { format!("・{line}") }
}

fn dash_bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n")
}

fn rule_bullets(rules: &[&str]) -> String {
    rules.iter().map(|rule| format!("- {rule}")).collect::<Vec<_>>().join("\n")
}

fn additional_info_section(items: &[String]) -> String {
    if items.is_empty() { NO_ADDITIONAL_INFO_LINE.to_string() } else { dash_bullets(items) }
}

fn request_section(question_draft: &str) -> String {
    let lines = sanitize_lines(question_draft);
    if lines.is_empty() { AWAITING_REQUEST_LINE.to_string() } else { dash_bullets(&lines) }
}

fn follow_up_questions(
    domain: &str,
    industry: &IndustryDisplay,
    focus_items: &[String],
) -> Vec<String> {
    vec![
        "依頼事項のゴールや評価基準を具体的に教えてください。".to_string(),
        format!("「{domain}」に特有の制約や利用環境があれば教えてください。"),
        if industry.has_industry {
            format!("{}で注意すべき制度・慣習・ステークホルダーがあれば共有してください。", industry.display)
        } else {
            "想定している業界や利用シーンに特有の制約があれば共有してください。".to_string()
        },
        if focus_items.is_empty() {
            "特に深掘りしたいトピックがあれば、追加で共有してください。".to_string()
        } else {
            "特に知りたい内容として挙げた項目について、期待する詳しさや優先順位を教えてください。".to_string()
        },
    ]
}

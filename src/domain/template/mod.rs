//! Domain template registry.
//!
//! Each questionnaire domain maps to a small value-type record of placeholder
//! text, pure generator functions, and fixed rule sets. Lookup is total:
//! unrecognized categories fall back to the generic record, so the registry
//! never fails.

mod registry;
mod render;

pub use registry::{
    CHILDCARE_TOPIC_OPTIONS, CUSTOM_PREFIX, DOMAIN_CHILDCARE, DOMAIN_CUSTOM, DOMAIN_IMAGE,
    DOMAIN_IT, DOMAIN_NATURE, DOMAIN_OPTIONS, DOMAIN_RECIPE, DOMAIN_TRANSLATION,
    IT_CATEGORY_OPTIONS, get_domain_template,
};

/// How a domain normalizes the raw industry string for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryStyle {
    /// Ensure the display string ends with `業界`.
    Suffix,
    /// Keep the trimmed string as-is (free-scene domains).
    Verbatim,
    /// Ignore the raw string and pin a fixed scene label.
    FixedScene(&'static str),
}

/// Resolved labels handed to template generators, computed per build.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    /// Resolved domain label (never empty).
    pub domain: String,
    /// Industry display string, e.g. `金融業界` or `想定業界`.
    pub industry_display: String,
    pub has_industry: bool,
    /// Sanitized focus topics joined with `、`; empty when none given.
    pub focus_label: String,
}

type RoleFn = fn(&TemplateContext) -> String;

/// Static per-domain template record.
///
/// Generator lines may carry `{{ industry }}` / `{{ domain }}` /
/// `{{ focus_label }}` tokens, substituted via [`DomainTemplate::default_tasks`]
/// and [`DomainTemplate::default_skills`] before use.
pub struct DomainTemplate {
    /// UI hint for the focus-topics field.
    pub focus_placeholder: &'static str,
    /// Produces the opening role-definition paragraph(s).
    pub role_definition: RoleFn,
    pub default_task_lines: &'static [&'static str],
    pub default_skill_lines: &'static [&'static str],
    pub output_conditions: &'static [&'static str],
    pub review_guidelines: &'static [&'static str],
    pub industry_style: IndustryStyle,
    /// False for domains where the focus-topics section does not apply.
    pub has_focus_section: bool,
}

impl DomainTemplate {
    /// Render the role-definition paragraph for the given context.
    pub fn render_role_definition(&self, ctx: &TemplateContext) -> String {
        (self.role_definition)(ctx)
    }

    /// Auto-fill task lines with placeholder tokens substituted.
    pub fn default_tasks(&self, ctx: &TemplateContext) -> Vec<String> {
        self.default_task_lines.iter().map(|line| render::substitute(line, ctx)).collect()
    }

    /// Auto-fill skill lines with placeholder tokens substituted.
    pub fn default_skills(&self, ctx: &TemplateContext) -> Vec<String> {
        self.default_skill_lines.iter().map(|line| render::substitute(line, ctx)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(industry: &str) -> TemplateContext {
        TemplateContext {
            domain: "クラウド、セキュリティ".to_string(),
            industry_display: industry.to_string(),
            has_industry: !industry.is_empty(),
            focus_label: String::new(),
        }
    }

    #[test]
    fn unknown_category_falls_back_to_generic() {
        let template = get_domain_template("宇宙開発がしたい");
        let ctx = context("製造業界");
        assert!(!template.default_tasks(&ctx).is_empty());
        let role = template.render_role_definition(&ctx);
        assert!(role.contains("クラウド、セキュリティ"));
    }

    #[test]
    fn custom_prefix_selects_custom_template() {
        let custom = get_domain_template("その他（自由記述）");
        let generic = get_domain_template("");
        assert!(!std::ptr::eq(custom, generic));
    }

    #[test]
    fn industry_token_is_substituted_in_default_tasks() {
        let template = get_domain_template(DOMAIN_IT);
        let tasks = template.default_tasks(&context("金融業界"));
        assert!(tasks.iter().any(|line| line.contains("金融業界")));
        assert!(tasks.iter().all(|line| !line.contains("{{")));
    }

    #[test]
    fn every_builtin_template_has_rule_sets() {
        for category in DOMAIN_OPTIONS {
            let template = get_domain_template(category);
            assert!((5..=6).contains(&template.default_task_lines.len()), "{category}");
            assert!(!template.default_skill_lines.is_empty(), "{category}");
            assert!((7..=8).contains(&template.output_conditions.len()), "{category}");
            assert!((3..=4).contains(&template.review_guidelines.len()), "{category}");
            assert!(!template.focus_placeholder.is_empty(), "{category}");
        }
    }
}

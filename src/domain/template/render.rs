//! Placeholder substitution for template lines.
//!
//! Only `{{ ... }}` interpolation is supported. Control structures never
//! appear in template data; lines containing them are passed through
//! untouched rather than rendered.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use super::TemplateContext;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Substitute `{{ domain }}`, `{{ industry }}`, and `{{ focus_label }}`
/// tokens in a template line.
///
/// Substitution is total: a line that fails to render (unknown token,
/// malformed syntax) is returned verbatim.
pub(crate) fn substitute(line: &str, ctx: &TemplateContext) -> String {
    if line.contains("{%") || line.contains("{#") {
        return line.to_string();
    }

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    let vars = context! {
        domain => ctx.domain.as_str(),
        industry => ctx.industry_display.as_str(),
        focus_label => ctx.focus_label.as_str(),
    };

    match env.render_str(line, vars) {
        Ok(rendered) => rendered,
        Err(_) => line.to_string(),
    }
}

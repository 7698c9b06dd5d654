//! Label resolution for domain and industry display text.

use super::sanitize::sanitize_delimited;
use super::template::{CUSTOM_PREFIX, DOMAIN_IT, IndustryStyle};

/// Fallback when both domain category and detail are blank.
pub const DEFAULT_DOMAIN_LABEL: &str = "未指定の領域";
/// Display string used in prose when no industry was given.
pub const ASSUMED_INDUSTRY_DISPLAY: &str = "想定業界";
/// Summary label used when no industry was given.
pub const UNSPECIFIED_INDUSTRY_LABEL: &str = "業界未指定";

const INDUSTRY_SUFFIX: &str = "業界";
const OTHER_TOKEN_SEPARATORS: [char; 2] = ['：', ':'];

/// Resolved industry labels for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryDisplay {
    /// Text used inside generated prose, e.g. `金融業界`.
    pub display: String,
    /// Text used in the one-line summary.
    pub label: String,
    pub has_industry: bool,
}

/// Resolve the effective domain label from category and detail.
///
/// Custom categories (`その他…`) defer to the free-text detail; the IT
/// category re-encodes its multi-select detail tokens for display; other
/// categories are used verbatim. The result is never empty.
pub fn resolve_domain_label(category: &str, detail: &str) -> String {
    let category = category.trim();
    let detail = detail.trim();

    let resolved = if category.starts_with(CUSTOM_PREFIX) {
        if detail.is_empty() { category.to_string() } else { detail.to_string() }
    } else if category == DOMAIN_IT {
        let joined = format_it_detail(detail);
        if joined.is_empty() { category.to_string() } else { joined }
    } else {
        category.to_string()
    };

    if resolved.is_empty() { DEFAULT_DOMAIN_LABEL.to_string() } else { resolved }
}

/// Re-encode the IT domain's comma-joined detail tokens for display:
/// `その他：<text>` tokens become `その他（<text>）`, joined with `、`.
pub fn format_it_detail(detail: &str) -> String {
    sanitize_delimited(detail)
        .iter()
        .map(|token| rewrite_other_token(token).unwrap_or_else(|| token.clone()))
        .collect::<Vec<_>>()
        .join("、")
}

/// Resolve the industry display for one build, honoring the domain's style.
///
/// The `その他：<text>` token is rewritten to `その他（<text>）` and exempt
/// from further suffixing. `FixedScene` domains pin their scene label
/// regardless of the raw value.
pub fn resolve_industry(raw: &str, style: IndustryStyle) -> IndustryDisplay {
    if let IndustryStyle::FixedScene(scene) = style {
        return IndustryDisplay {
            display: scene.to_string(),
            label: scene.to_string(),
            has_industry: true,
        };
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return IndustryDisplay {
            display: ASSUMED_INDUSTRY_DISPLAY.to_string(),
            label: UNSPECIFIED_INDUSTRY_LABEL.to_string(),
            has_industry: false,
        };
    }

    let display = match rewrite_other_token(trimmed) {
        Some(rewritten) => rewritten,
        None => match style {
            IndustryStyle::Suffix if !trimmed.ends_with(INDUSTRY_SUFFIX) => {
                format!("{trimmed}{INDUSTRY_SUFFIX}")
            }
            _ => trimmed.to_string(),
        },
    };

    IndustryDisplay { label: display.clone(), display, has_industry: true }
}

/// Rewrite a `その他：<text>` / `その他:<text>` token to `その他（<text>）`.
/// Returns `None` when the token is not an "other" encoding.
fn rewrite_other_token(token: &str) -> Option<String> {
    let rest = token.strip_prefix(CUSTOM_PREFIX)?;
    if rest.is_empty() {
        return Some(CUSTOM_PREFIX.to_string());
    }
    let rest = rest.strip_prefix(|c: char| OTHER_TOKEN_SEPARATORS.contains(&c))?;
    let text = rest.trim();
    if text.is_empty() {
        Some(CUSTOM_PREFIX.to_string())
    } else {
        Some(format!("{CUSTOM_PREFIX}（{text}）"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::{DOMAIN_CUSTOM, DOMAIN_RECIPE, get_domain_template};

    #[test]
    fn blank_category_and_detail_fall_back() {
        assert_eq!(resolve_domain_label("", ""), DEFAULT_DOMAIN_LABEL);
        assert_eq!(resolve_domain_label("  ", "  "), DEFAULT_DOMAIN_LABEL);
    }

    #[test]
    fn custom_category_uses_detail() {
        assert_eq!(resolve_domain_label(DOMAIN_CUSTOM, "地域コミュニティの活性化"), "地域コミュニティの活性化");
        // Missing detail degrades to the raw category.
        assert_eq!(resolve_domain_label(DOMAIN_CUSTOM, ""), DOMAIN_CUSTOM);
    }

    #[test]
    fn it_detail_tokens_are_rejoined_for_display() {
        let label = resolve_domain_label("IT技術を知りたい", "クラウド、セキュリティ、その他：Terraform");
        assert_eq!(label, "クラウド、セキュリティ、その他（Terraform）");
    }

    #[test]
    fn it_detail_accepts_ascii_colon_and_comma() {
        let label = resolve_domain_label("IT技術を知りたい", "DB,その他:LLM運用");
        assert_eq!(label, "DB、その他（LLM運用）");
    }

    #[test]
    fn it_category_without_detail_keeps_category_label() {
        assert_eq!(resolve_domain_label("IT技術を知りたい", ""), "IT技術を知りたい");
    }

    #[test]
    fn builtin_category_is_verbatim() {
        assert_eq!(resolve_domain_label("美味しいレシピを知りたい", ""), "美味しいレシピを知りたい");
    }

    #[test]
    fn empty_industry_uses_placeholders() {
        let resolved = resolve_industry("", IndustryStyle::Suffix);
        assert!(!resolved.has_industry);
        assert_eq!(resolved.display, ASSUMED_INDUSTRY_DISPLAY);
        assert_eq!(resolved.label, UNSPECIFIED_INDUSTRY_LABEL);
    }

    #[test]
    fn suffix_style_appends_industry_word_once() {
        assert_eq!(resolve_industry("金融", IndustryStyle::Suffix).display, "金融業界");
        assert_eq!(resolve_industry("金融業界", IndustryStyle::Suffix).display, "金融業界");
    }

    #[test]
    fn verbatim_style_keeps_free_text() {
        let resolved = resolve_industry("観光業のパンフレット", IndustryStyle::Verbatim);
        assert_eq!(resolved.display, "観光業のパンフレット");
        assert!(resolved.has_industry);
    }

    #[test]
    fn other_token_is_rewritten_and_not_suffixed() {
        let resolved = resolve_industry("その他：小売", IndustryStyle::Suffix);
        assert_eq!(resolved.display, "その他（小売）");
        assert_eq!(resolved.label, "その他（小売）");
    }

    #[test]
    fn fixed_scene_ignores_raw_value() {
        let style = get_domain_template(DOMAIN_RECIPE).industry_style;
        let resolved = resolve_industry("金融", style);
        assert_eq!(resolved.display, "家庭での調理シーン");
        assert!(resolved.has_industry);
    }
}

//! Typed questionnaire selections.
//!
//! Multi-select and "other" choices stay structured through the form
//! lifecycle; the legacy string encodings (`クラウド、その他：Terraform`,
//! `その他：<text>`) are produced only at the `PromptBuilderInput` boundary
//! and parsed back when hydrating a saved result.

use super::sanitize::sanitize_delimited;
use super::template::CUSTOM_PREFIX;

const OTHER_TOKEN_SEPARATORS: [char; 2] = ['：', ':'];

/// Multi-select state for the IT domain's detail field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItSelection {
    /// Chosen category chips, in selection order (excluding the "other" chip).
    pub categories: Vec<String>,
    /// Free text for the "other" chip; `Some("")` means the chip is selected
    /// without detail.
    pub other: Option<String>,
}

impl ItSelection {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.other.is_none()
    }

    /// Encode into the comma-joined `domain_detail` form.
    pub fn encode(&self) -> String {
        let mut tokens = self.categories.clone();
        if let Some(other) = &self.other {
            let trimmed = other.trim();
            if trimmed.is_empty() {
                tokens.push(CUSTOM_PREFIX.to_string());
            } else {
                tokens.push(format!("{CUSTOM_PREFIX}：{trimmed}"));
            }
        }
        tokens.join("、")
    }

    /// Parse a stored `domain_detail` back into structured form.
    pub fn parse(detail: &str) -> Self {
        let mut selection = ItSelection::default();
        for token in sanitize_delimited(detail) {
            if let Some(rest) = token.strip_prefix(CUSTOM_PREFIX) {
                let text = rest
                    .strip_prefix(|c: char| OTHER_TOKEN_SEPARATORS.contains(&c))
                    .unwrap_or(rest)
                    .trim_end_matches(['）', ')'])
                    .trim_start_matches(['（', '('])
                    .trim();
                selection.other = Some(text.to_string());
            } else {
                selection.categories.push(token);
            }
        }
        selection
    }
}

/// Industry choice as presented by the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndustryChoice {
    #[default]
    Unspecified,
    /// Free-text description of the industry or scene.
    Free(String),
    /// The legacy "other" chip with optional detail text.
    Other(String),
}

impl IndustryChoice {
    /// Encode into the `industry` input field form.
    pub fn encode(&self) -> String {
        match self {
            IndustryChoice::Unspecified => String::new(),
            IndustryChoice::Free(text) => text.trim().to_string(),
            IndustryChoice::Other(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    CUSTOM_PREFIX.to_string()
                } else {
                    format!("{CUSTOM_PREFIX}：{trimmed}")
                }
            }
        }
    }

    /// Parse a stored `industry` value back into structured form.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return IndustryChoice::Unspecified;
        }
        if let Some(rest) = trimmed.strip_prefix(CUSTOM_PREFIX) {
            let text = rest
                .strip_prefix(|c: char| OTHER_TOKEN_SEPARATORS.contains(&c))
                .unwrap_or(rest)
                .trim_end_matches(['）', ')'])
                .trim_start_matches(['（', '('])
                .trim();
            return IndustryChoice::Other(text.to_string());
        }
        IndustryChoice::Free(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_selection_round_trips_through_encoding() {
        let selection = ItSelection {
            categories: vec!["クラウド".to_string(), "セキュリティ".to_string()],
            other: Some("Terraform".to_string()),
        };
        let encoded = selection.encode();
        assert_eq!(encoded, "クラウド、セキュリティ、その他：Terraform");
        assert_eq!(ItSelection::parse(&encoded), selection);
    }

    #[test]
    fn it_selection_other_without_text() {
        let selection = ItSelection { categories: vec!["DB".to_string()], other: Some(String::new()) };
        assert_eq!(selection.encode(), "DB、その他");
        assert_eq!(ItSelection::parse("DB、その他"), selection);
    }

    #[test]
    fn it_selection_parses_display_form() {
        // Hydration also accepts the display rewrite of the other token.
        let parsed = ItSelection::parse("クラウド、その他（Terraform）");
        assert_eq!(parsed.other.as_deref(), Some("Terraform"));
        assert_eq!(parsed.categories, vec!["クラウド"]);
    }

    #[test]
    fn empty_detail_parses_to_empty_selection() {
        assert!(ItSelection::parse("").is_empty());
        assert_eq!(ItSelection::default().encode(), "");
    }

    #[test]
    fn industry_choice_round_trips() {
        assert_eq!(IndustryChoice::parse(""), IndustryChoice::Unspecified);
        assert_eq!(IndustryChoice::Unspecified.encode(), "");

        let free = IndustryChoice::Free("観光業のパンフレット".to_string());
        assert_eq!(IndustryChoice::parse(&free.encode()), free);

        let other = IndustryChoice::Other("小売".to_string());
        assert_eq!(other.encode(), "その他：小売");
        assert_eq!(IndustryChoice::parse("その他：小売"), other);
        assert_eq!(IndustryChoice::parse("その他（小売）"), other);
    }
}

use serde::{Deserialize, Serialize};

/// Snapshot of the questionnaire form, immutable per submission.
///
/// Field encodings follow the store format: `domain_detail` carries the
/// comma-joined IT category selection for the IT domain, and `industry` may
/// carry the `その他：<text>` token. Structured selections are encoded into
/// these strings only at this boundary (see `domain::selection`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptBuilderInput {
    pub domain_category: String,
    pub domain_detail: String,
    pub industry: String,
    #[serde(default)]
    pub focus_topics: String,
    #[serde(default)]
    pub tasks: String,
    #[serde(default)]
    pub required_skills: String,
    pub additional_info: String,
}

/// Output of `build_prompt`: the assembled document plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResult {
    /// The normalized input actually used (focus topics one-per-line).
    pub input: PromptBuilderInput,
    /// The assembled role prompt document.
    pub role_prompt: String,
    /// One-line summary: `<domain> / 業界: <industry label>`.
    pub summary: String,
    /// Suggested clarifying questions for the upcoming conversation.
    pub follow_up_questions: Vec<String>,
}

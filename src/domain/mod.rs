pub mod autofill;
pub mod builder;
pub mod error;
pub mod history;
pub mod labels;
pub mod prompt;
pub mod sanitize;
pub mod selection;
pub mod template;

pub use autofill::FieldFill;
pub use builder::{build_prompt, generate_default_skills_text, generate_default_tasks_text};
pub use error::AppError;
pub use history::{
    FavoriteEntry, HistoryEntry, MAX_HISTORY, PromptStoreShape, STORE_VERSION, entry_id,
    push_history, upsert_favorite,
};
pub use labels::{IndustryDisplay, resolve_domain_label, resolve_industry};
pub use prompt::{PromptBuilderInput, PromptResult};
pub use sanitize::{sanitize_delimited, sanitize_lines};
pub use selection::{IndustryChoice, ItSelection};
pub use template::{
    CHILDCARE_TOPIC_OPTIONS, CUSTOM_PREFIX, DOMAIN_CHILDCARE, DOMAIN_CUSTOM, DOMAIN_IMAGE, DOMAIN_IT,
    DOMAIN_NATURE, DOMAIN_OPTIONS, DOMAIN_RECIPE, DOMAIN_TRANSLATION, DomainTemplate,
    IT_CATEGORY_OPTIONS, IndustryStyle, TemplateContext, get_domain_template,
};

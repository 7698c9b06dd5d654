//! Edited-state tracking for auto-fillable fields.
//!
//! Each auto-fillable field (tasks, required skills) carries a two-state
//! machine: while `Auto`, the questionnaire overwrites the field from the
//! domain template whenever its inputs change; after the first user edit the
//! field is `Manual` and left alone. Changing the domain category resets the
//! field to `Auto`. Other dependency changes (detail, industry) refresh the
//! value but never reset the edited state.

/// Fill state of one auto-fillable questionnaire field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFill {
    /// Value follows the template; recomputed on dependency changes.
    #[default]
    Auto,
    /// User has edited the field; their content is authoritative.
    Manual,
}

impl FieldFill {
    /// First user keystroke in the field.
    pub fn on_edit(&mut self) {
        *self = FieldFill::Manual;
    }

    /// Domain-category selection changed.
    pub fn on_domain_change(&mut self) {
        *self = FieldFill::Auto;
    }

    pub fn is_auto(self) -> bool {
        self == FieldFill::Auto
    }
}

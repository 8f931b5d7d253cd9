//! Cascading make → model → type → sub-tier form state.
//!
//! Each stage depends on the one before it. Editing, rejecting, or changing
//! a stage clears every stage after it; the model stage only unlocks once a
//! make resolves to an exact catalog entry.

use tracing::debug;

use crate::catalog::ModelRecord;

use super::Session;
use super::types::CommitOutcome;

const NO_SELECTION: &str = "No selection yet.";
const SEPARATOR: &str = " — ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionForm {
    make: Option<String>,
    model: Option<ModelRecord>,
    subtier: Option<String>,
}

impl SelectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&ModelRecord> {
        self.model.as_ref()
    }

    pub fn body_type(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.body_type.as_str())
    }

    /// Sub-tiers offered for the chosen model, in catalog order.
    pub fn subtier_options(&self) -> &[String] {
        self.model
            .as_ref()
            .map(|m| m.subtiers.as_slice())
            .unwrap_or(&[])
    }

    pub fn subtier(&self) -> Option<&str> {
        self.subtier.as_deref()
    }

    /// Whether the model field accepts input.
    pub fn model_unlocked(&self) -> bool {
        self.make.is_some()
    }

    /// Whether the user has a real sub-tier choice to make.
    pub fn needs_subtier_choice(&self) -> bool {
        self.subtier_options().len() > 1
    }

    /// Clears every stage.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The user typed in the make field.
    pub fn edit_make(&mut self) {
        self.make = None;
        self.clear_model();
    }

    /// The user left the make field with `text` in it.
    pub fn commit_make(&mut self, session: &Session, text: &str) -> CommitOutcome {
        if text.trim().is_empty() {
            self.edit_make();
            return CommitOutcome::Empty;
        }

        if !session.accepts_make(text) {
            debug!(input = text.trim(), "Make rejected");
            self.edit_make();
            return CommitOutcome::Rejected;
        }

        match session.resolve_make(text) {
            Some(make) => {
                self.set_make(make);
                CommitOutcome::Accepted
            }
            None => {
                self.edit_make();
                CommitOutcome::Pending
            }
        }
    }

    /// The user clicked a make suggestion.
    pub fn pick_make(&mut self, session: &Session, label: &str) -> CommitOutcome {
        match session.resolve_make(label) {
            Some(make) => {
                self.set_make(make);
                CommitOutcome::Accepted
            }
            None => {
                self.edit_make();
                CommitOutcome::Rejected
            }
        }
    }

    /// The user typed in the model field.
    pub fn edit_model(&mut self) {
        self.clear_model();
    }

    /// The user left the model field with `text` in it.
    pub fn commit_model(&mut self, session: &Session, text: &str) -> CommitOutcome {
        if text.trim().is_empty() {
            self.clear_model();
            return CommitOutcome::Empty;
        }

        let Some(make) = self.make.as_deref() else {
            return CommitOutcome::Rejected;
        };

        if !session.accepts_model(make, text) {
            debug!(make, input = text.trim(), "Model rejected");
            self.clear_model();
            return CommitOutcome::Rejected;
        }

        match session.resolve_model(make, text).cloned() {
            Some(record) => {
                self.set_model(record);
                CommitOutcome::Accepted
            }
            None => {
                self.clear_model();
                CommitOutcome::Pending
            }
        }
    }

    /// The user clicked a model suggestion.
    pub fn pick_model(&mut self, session: &Session, name: &str) -> CommitOutcome {
        let record = self
            .make
            .as_deref()
            .and_then(|make| session.resolve_model(make, name))
            .cloned();

        match record {
            Some(record) => {
                self.set_model(record);
                CommitOutcome::Accepted
            }
            None => {
                self.clear_model();
                CommitOutcome::Rejected
            }
        }
    }

    /// Chooses one of the offered sub-tiers. Returns `false` if `value` is not offered.
    pub fn select_subtier(&mut self, value: &str) -> bool {
        let value = value.trim();
        match self.subtier_options().iter().find(|s| s.as_str() == value) {
            Some(option) => {
                self.subtier = Some(option.clone());
                true
            }
            None => false,
        }
    }

    /// One-line description, e.g. `Ford F-150 — Truck — 4-door`.
    pub fn summary(&self) -> String {
        let Some(make) = &self.make else {
            return NO_SELECTION.to_string();
        };

        let mut line = make.clone();
        if let Some(model) = &self.model {
            line.push(' ');
            line.push_str(&model.name);
            if !model.body_type.is_empty() {
                line.push_str(SEPARATOR);
                line.push_str(&model.body_type);
            }
        }
        if let Some(subtier) = &self.subtier {
            line.push_str(SEPARATOR);
            line.push_str(subtier);
        }
        line
    }

    fn set_make(&mut self, make: &str) {
        if self.make.as_deref() != Some(make) {
            self.make = Some(make.to_string());
            self.clear_model();
        }
    }

    fn set_model(&mut self, record: ModelRecord) {
        self.subtier = record.subtiers.first().cloned();
        self.model = Some(record);
    }

    fn clear_model(&mut self) {
        self.model = None;
        self.subtier = None;
    }
}

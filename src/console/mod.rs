//! Line-oriented driver for the selection form.
//!
//! Stands in for the UI: each [`Command`] maps to a keystroke, click, or
//! blur on one of the form fields, and the reply lines describe what a
//! user would see.

pub mod command;
pub mod error;


pub use command::Command;
pub use error::ConsoleError;

use crate::session::{CommitOutcome, SelectionForm, Session};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Output of one command.
pub struct Reply {
    pub lines: Vec<String>,
    /// The console should stop reading input.
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

#[derive(Debug)]
pub struct Console {
    session: Session,
    form: SelectionForm,
}

impl Console {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            form: SelectionForm::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn form(&self) -> &SelectionForm {
        &self.form
    }

    /// Parses and runs one input line. Parse errors become a reply, never a failure.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(ConsoleError::EmptyInput) => Reply::default(),
            Err(e) => Reply::line(format!("error: {e}")),
        }
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Make(text) => {
                self.form.edit_make();
                let suggestions = self.session.suggest_makes(&text);
                if suggestions.is_empty() {
                    Reply::line("no matching makes")
                } else {
                    Reply::lines(suggestions.into_iter().map(|m| format!("  {m}")).collect())
                }
            }
            Command::PickMake(label) => {
                let outcome = self.form.pick_make(&self.session, &label);
                self.outcome_reply("make", outcome)
            }
            Command::CommitMake(text) => {
                let outcome = self.form.commit_make(&self.session, &text);
                self.outcome_reply("make", outcome)
            }
            Command::Model(text) => {
                let Some(make) = self.form.make().map(str::to_string) else {
                    return Reply::line("choose a make first");
                };
                self.form.edit_model();
                let suggestions = self.session.suggest_models(&make, &text);
                if suggestions.is_empty() {
                    Reply::line("no matching models")
                } else {
                    Reply::lines(
                        suggestions
                            .into_iter()
                            .map(|m| format!("  {} — {}", m.name, m.body_type))
                            .collect(),
                    )
                }
            }
            Command::PickModel(name) => {
                let outcome = self.form.pick_model(&self.session, &name);
                self.outcome_reply("model", outcome)
            }
            Command::CommitModel(text) => {
                let outcome = self.form.commit_model(&self.session, &text);
                self.outcome_reply("model", outcome)
            }
            Command::Subtier(value) => {
                if self.form.select_subtier(&value) {
                    Reply::line(self.form.summary())
                } else if self.form.subtier_options().is_empty() {
                    Reply::line("no sub-tiers to choose from")
                } else {
                    Reply::line(format!(
                        "unknown sub-tier; options: {}",
                        self.form.subtier_options().join(", ")
                    ))
                }
            }
            Command::Show => {
                let mut lines = vec![self.form.summary()];
                if self.form.needs_subtier_choice() {
                    lines.push(format!(
                        "sub-tiers: {}",
                        self.form.subtier_options().join(", ")
                    ));
                }
                Reply::lines(lines)
            }
            Command::Makes => {
                let makes = self.session.make_names();
                if makes.is_empty() {
                    Reply::line("catalog is empty")
                } else {
                    Reply::lines(makes.iter().map(|m| format!("  {m}")).collect())
                }
            }
            Command::Help => Reply::line(Command::HELP),
            Command::Quit => Reply {
                lines: Vec::new(),
                quit: true,
            },
        }
    }

    fn outcome_reply(&self, field: &str, outcome: CommitOutcome) -> Reply {
        match outcome {
            CommitOutcome::Accepted => Reply::line(self.form.summary()),
            CommitOutcome::Pending => {
                Reply::line(format!("{field} not resolved; pick one from the suggestions"))
            }
            CommitOutcome::Rejected => {
                Reply::line(format!("choose a {field} from the suggestions"))
            }
            CommitOutcome::Empty => Reply::default(),
        }
    }
}

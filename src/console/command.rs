use std::str::FromStr;

use super::error::ConsoleError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One line of console input.
pub enum Command {
    /// Type into the make field and list suggestions.
    Make(String),
    /// Click a make suggestion.
    PickMake(String),
    /// Leave the make field with the given text.
    CommitMake(String),
    /// Type into the model field and list suggestions.
    Model(String),
    /// Click a model suggestion.
    PickModel(String),
    /// Leave the model field with the given text.
    CommitModel(String),
    /// Choose a sub-tier.
    Subtier(String),
    /// Print the current selection.
    Show,
    /// List every make.
    Makes,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
commands:
  make <text>          type a make and list suggestions
  pick-make <make>     choose a suggested make
  commit-make <text>   leave the make field with <text>
  model <text>         type a model and list suggestions
  pick-model <model>   choose a suggested model
  commit-model <text>  leave the model field with <text>
  subtier <value>      choose a sub-tier
  show                 print the current selection
  makes                list all makes
  help                 print this help
  quit                 exit";
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ConsoleError::EmptyInput);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim().to_string();

        let required = |command: &'static str| {
            if arg.is_empty() {
                Err(ConsoleError::MissingArgument { command })
            } else {
                Ok(arg.clone())
            }
        };

        match verb.to_lowercase().as_str() {
            "make" => Ok(Self::Make(arg.clone())),
            "pick-make" => required("pick-make").map(Self::PickMake),
            "commit-make" => Ok(Self::CommitMake(arg.clone())),
            "model" => Ok(Self::Model(arg.clone())),
            "pick-model" => required("pick-model").map(Self::PickModel),
            "commit-model" => Ok(Self::CommitModel(arg.clone())),
            "subtier" => required("subtier").map(Self::Subtier),
            "show" => Ok(Self::Show),
            "makes" => Ok(Self::Makes),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ConsoleError::UnknownCommand(verb.to_string())),
        }
    }
}

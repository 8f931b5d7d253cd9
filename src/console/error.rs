use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs an argument")]
    MissingArgument { command: &'static str },
}

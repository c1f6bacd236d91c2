use std::{error, fmt};

/// One failure kind per pipeline stage. `Lexing` is reserved for the
/// tokenizer, which currently stops at unscannable input instead of raising.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    Lexing(String),
    Syntax(String),
    Evaluation(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexing(message) => write!(f, "lexing error: {message}"),
            Self::Syntax(message) => write!(f, "syntax error: {message}"),
            Self::Evaluation(message) => write!(f, "evaluation error: {message}"),
        }
    }
}

impl error::Error for ErrorKind {}

pub type CalcResult<T> = Result<T, ErrorKind>;

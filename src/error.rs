//! The crate-wide error taxonomy (§7 of the design spec): every evaluation
//! error is fatal, so these types exist to carry a message to the driver,
//! not to participate in control flow.
use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::ParseError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("undefined {kind} '{name}' at {line}:{col}")]
    Name {
        kind: &'static str,
        name: String,
        line: usize,
        col: usize,
    },
    #[error("{message} at {line}:{col}")]
    Type {
        message: String,
        line: usize,
        col: usize,
    },
    #[error("'{name}' expects {expected} argument(s), got {got} at {line}:{col}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
        line: usize,
        col: usize,
    },
    #[error("index {index} out of bounds for '{name}' (len {len}) at {line}:{col}")]
    Bounds {
        name: String,
        index: i64,
        len: usize,
        line: usize,
        col: usize,
    },
    #[error("division by zero at {line}:{col}")]
    Arithmetic { line: usize, col: usize },
    #[error("{message}")]
    Io { message: String },
}

#[derive(Debug, Error)]
pub enum TinyLangError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("{0}")]
    Io(String),
}

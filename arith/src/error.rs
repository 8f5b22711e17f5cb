use std::{fmt::Display, io};

use compiler::error::CompilerError;
use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum ArithError {
    ParseError(String),
    IoError(String),
    UsageError(String),
}

impl Display for ArithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithError::ParseError(e) => f.write_str(e),
            ArithError::IoError(e) => write!(f, "I/O error: {}", e),
            ArithError::UsageError(e) => write!(f, "usage: arith [--permissive] [FILE]: {}", e),
        }
    }
}

impl std::error::Error for ArithError {}

impl From<io::Error> for ArithError {
    fn from(value: io::Error) -> Self {
        ArithError::IoError(value.to_string())
    }
}

impl From<ReadlineError> for ArithError {
    fn from(value: ReadlineError) -> Self {
        ArithError::IoError(value.to_string())
    }
}

impl From<CompilerError> for ArithError {
    fn from(value: CompilerError) -> Self {
        ArithError::ParseError(value.to_string())
    }
}

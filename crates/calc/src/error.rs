use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Invalid character '{character}' at column {column}")]
    InvalidCharacter { character: char, column: usize },
    #[error("Number {literal} at column {column} is out of range")]
    NumberOutOfRange { literal: String, column: usize },
}

impl LexError {
    pub const fn character(&self) -> Option<char> {
        match self {
            Self::InvalidCharacter { character, .. } => Some(*character),
            Self::NumberOutOfRange { .. } => None,
        }
    }

    pub const fn column(&self) -> usize {
        match self {
            Self::InvalidCharacter { column, .. } | Self::NumberOutOfRange { column, .. } => {
                *column
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Malformed expression")]
    MalformedExpression,
    #[error("Integer overflow")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

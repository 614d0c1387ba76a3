//! Infix to postfix conversion (shunting-yard)
use tracing::{debug, trace};

use crate::{
    error::EvalError,
    operator::Operator,
    tokenizer::{Brace, Token},
};

/// What the operator stack may hold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    OpenBrace,
}

impl From<StackEntry> for Token {
    fn from(entry: StackEntry) -> Self {
        match entry {
            StackEntry::Operator(operator) => Self::Operator(operator),
            StackEntry::OpenBrace => Self::Brace(Brace::Open),
        }
    }
}

/// Consumes infix tokens one at a time and builds the postfix sequence
#[derive(Debug, Default)]
pub struct Converter {
    output: Vec<Token>,
    operators: Vec<StackEntry>,
    /// ')' seen with no '(' to match
    unmatched_close: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        match token {
            Token::Number(_) => self.output.push(token),
            Token::Brace(Brace::Open) => self.operators.push(StackEntry::OpenBrace),
            Token::Brace(Brace::Close) => self.close_brace(),
            Token::Operator(operator) => self.operator(operator),
        }
        trace!(?token, stack = ?self.operators, "converter");
    }

    fn close_brace(&mut self) {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::OpenBrace => return,
                StackEntry::Operator(_) => self.output.push(entry.into()),
            }
        }
        // stack ran dry: the operators above were flushed but there was nothing to discard
        self.unmatched_close += 1;
    }

    fn operator(&mut self, incoming: Operator) {
        while let Some(&StackEntry::Operator(top)) = self.operators.last() {
            if !top.yields_to(incoming) {
                break;
            }
            self.operators.pop();
            self.output.push(Token::Operator(top));
        }
        self.operators.push(StackEntry::Operator(incoming));
    }

    /// No unmatched brace has been seen so far
    pub fn is_balanced(&self) -> bool {
        self.unmatched_close == 0
            && !self
                .operators
                .iter()
                .any(|entry| matches!(entry, StackEntry::OpenBrace))
    }

    /// Flushes the operator stack, unmatched '(' included, and returns the postfix sequence
    pub fn finish(mut self) -> Vec<Token> {
        while let Some(entry) = self.operators.pop() {
            self.output.push(entry.into());
        }
        debug!(postfix = ?self.output, "converted");
        self.output
    }
}

/// Converts infix tokens to postfix order. Unbalanced braces are tolerated.
pub fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
    let mut converter = Converter::new();
    for token in tokens {
        converter.push(token);
    }
    converter.finish()
}

/// Same as [`to_postfix`] but rejects unbalanced braces.
///
/// # Errors
/// [`EvalError::MalformedExpression`] when a brace has no partner.
pub fn to_postfix_checked(
    tokens: impl IntoIterator<Item = Token>,
) -> Result<Vec<Token>, EvalError> {
    let mut converter = Converter::new();
    for token in tokens {
        converter.push(token);
    }
    if !converter.is_balanced() {
        debug!("unbalanced braces");
        return Err(EvalError::MalformedExpression);
    }
    Ok(converter.finish())
}

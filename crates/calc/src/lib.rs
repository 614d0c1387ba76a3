//! Integer calculator: tokenizer, shunting-yard converter and postfix evaluator
pub mod converter;
pub mod error;
pub mod evaluator;
pub mod operator;
pub mod renderer;
pub mod tokenizer;

pub use converter::{to_postfix, to_postfix_checked, Converter};
pub use error::{CalcError, EvalError, LexError};
pub use evaluator::{evaluate, Evaluator};
pub use operator::Operator;
pub use renderer::{render, render_with};
pub use tokenizer::{tokenize, Brace, Token, TokenCategory, Tokenizer};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub postfix: Vec<Token>,
    pub value: i64,
}

/// Runs the whole pipeline on one expression.
///
/// # Errors
/// The first [`LexError`] or [`EvalError`] hit along the way. Blank input and unbalanced
/// braces are [`EvalError::MalformedExpression`].
pub fn calculate(code: &str) -> Result<Calculation, CalcError> {
    let tokens = tokenize(code)?;
    let postfix = to_postfix_checked(tokens)?;
    let value = evaluate(&postfix)?;
    debug!(code, value, "calculated");
    Ok(Calculation { postfix, value })
}

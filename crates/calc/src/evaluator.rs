use tracing::{debug, trace};

use crate::{error::EvalError, tokenizer::Token};

/// Folds a postfix sequence into a single value using a value stack
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<i64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Fails when an operator lacks operands or its arithmetic fails.
    pub fn push(&mut self, token: Token) -> Result<(), EvalError> {
        match token {
            Token::Number(value) => self.stack.push(value),
            Token::Operator(operator) => {
                let rhs = self.stack.pop().ok_or(EvalError::MalformedExpression)?;
                let lhs = self.stack.pop().ok_or(EvalError::MalformedExpression)?;
                self.stack.push(operator.apply(lhs, rhs)?);
            }
            // never emitted for balanced input
            Token::Brace(_) => {}
        }
        trace!(?token, stack = ?self.stack, "evaluator");
        Ok(())
    }

    /// # Errors
    /// [`EvalError::MalformedExpression`] unless exactly one value is left.
    pub fn finish(self) -> Result<i64, EvalError> {
        match self.stack.as_slice() {
            [value] => Ok(*value),
            rest => {
                debug!(stack = ?rest, "evaluation left the stack malformed");
                Err(EvalError::MalformedExpression)
            }
        }
    }
}

/// Evaluates a postfix sequence, aborting on the first error.
///
/// # Errors
/// See [`EvalError`].
pub fn evaluate<'a>(postfix: impl IntoIterator<Item = &'a Token>) -> Result<i64, EvalError> {
    let mut evaluator = Evaluator::new();
    for token in postfix {
        evaluator.push(*token)?;
    }
    evaluator.finish()
}

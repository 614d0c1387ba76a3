use macros::make_operators;

use crate::error::EvalError;

make_operators!(
    (Add, '+', 1),
    (Subtract, '-', 1),
    (Multiply, '*', 2),
    (Divide, '/', 2),
);

impl Operator {
    /// Computes `lhs op rhs`. Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let value = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        value.ok_or(EvalError::Overflow)
    }

    /// Whether `self` on the stack must be emitted before `incoming` is pushed
    pub const fn yields_to(self, incoming: Self) -> bool {
        self.priority() >= incoming.priority()
    }
}

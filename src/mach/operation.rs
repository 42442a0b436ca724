use super::Val;
use crate::error;
use crate::lang::Error;
use num_traits::{Signed, Zero};

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic on values already taken off the stack.
/// `lhs` was deeper in the stack than `rhs`.
pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Val {
        -val
    }

    pub fn abs(val: Val) -> Val {
        val.abs()
    }

    pub fn sum(lhs: Val, rhs: Val) -> Val {
        lhs + rhs
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Val {
        lhs - rhs
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Val {
        lhs * rhs
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs / rhs)
    }
}

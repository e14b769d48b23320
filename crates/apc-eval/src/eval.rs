//! Expression evaluation.

use apc_bignum::Bignum;

use crate::error::EvalError;
use crate::parser::{BinaryOp, Expr, Parser, UnaryOp};
use crate::token::tokenize;

/// Tokenizes, parses and evaluates `input`.
///
/// # Errors
///
/// Returns [`EvalError::Syntax`] for malformed input and a value-category
/// error for operations the engine rejects.
pub fn eval_str(input: &str) -> Result<Bignum, EvalError> {
    let tokens = tokenize(input)?;
    let expr = Parser::new(tokens).parse()?;
    eval(&expr)
}

/// Evaluates a parsed expression tree.
///
/// # Errors
///
/// Returns a value-category error when an operation rejects its operands;
/// the tree itself is never malformed once parsed.
pub fn eval(expr: &Expr) -> Result<Bignum, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Unary(op, arg) => {
            let value = eval(arg)?;
            Ok(match op {
                UnaryOp::Identity => value,
                UnaryOp::Negate => -value,
            })
        }
        Expr::Binary(op, lhs, rhs) => {
            let lhs = eval(lhs)?;
            let rhs = eval(rhs)?;
            apply_binary(*op, &lhs, &rhs)
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: &Bignum, rhs: &Bignum) -> Result<Bignum, EvalError> {
    match op {
        BinaryOp::Add => {
            require_matching_radix(lhs, rhs)?;
            Ok(lhs + rhs)
        }
        BinaryOp::Sub => {
            require_matching_radix(lhs, rhs)?;
            Ok(lhs - rhs)
        }
        BinaryOp::Mul => {
            require_matching_radix(lhs, rhs)?;
            Ok(lhs * rhs)
        }
        BinaryOp::Div => {
            require_matching_radix(lhs, rhs)?;
            let (quotient, _) = lhs.divmod(rhs)?;
            Ok(quotient)
        }
        BinaryOp::Rem => {
            require_matching_radix(lhs, rhs)?;
            let (_, remainder) = lhs.divmod(rhs)?;
            Ok(remainder)
        }
        BinaryOp::Convert => {
            let target = rhs.to_u32().ok_or(EvalError::InvalidRadixOperand)?;
            Ok(lhs.convert(target)?)
        }
    }
}

/// The engine treats mixed radices as a caller error; uphold that
/// precondition here and report it as a value error instead.
fn require_matching_radix(lhs: &Bignum, rhs: &Bignum) -> Result<(), EvalError> {
    if !lhs.is_zero() && !rhs.is_zero() && lhs.radix() != rhs.radix() {
        return Err(EvalError::MixedRadices(lhs.radix(), rhs.radix()));
    }
    Ok(())
}

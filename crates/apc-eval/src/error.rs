//! Evaluation errors and their user-visible categories.

use thiserror::Error;

/// An error from tokenizing, parsing or evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input text could not be tokenized or parsed.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An engine operation rejected its operands.
    #[error("value error: {0}")]
    Value(#[from] apc_bignum::Error),

    /// Operands of an arithmetic operator carry different radices.
    ///
    /// The engine treats this as a caller precondition, so the evaluator
    /// checks it up front and reports it as a value error.
    #[error("value error: operands have radix {0} and radix {1}")]
    MixedRadices(u32, u32),

    /// The right side of `#` does not name a radix.
    #[error("value error: conversion target must be a radix in [2, 36]")]
    InvalidRadixOperand,
}

impl EvalError {
    /// Shorthand for a [`EvalError::Syntax`] with the given message.
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        EvalError::Syntax(message.into())
    }

    /// The user-visible category this error prints under.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            EvalError::Syntax(_) => "syntax error",
            EvalError::Value(_) | EvalError::MixedRadices(_, _) | EvalError::InvalidRadixOperand => {
                "value error"
            }
        }
    }
}

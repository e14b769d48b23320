//! # apc-eval
//!
//! The expression layer of the apc calculator: a lexer, a recursive-descent
//! parser and an evaluator over [`apc_bignum::Bignum`] values.
//!
//! The grammar, left-associative throughout:
//!
//! ```text
//! expr    := term (('+' | '-' | '%' | '#') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor | numlit | '(' expr ')'
//! numlit  := NUMBER ('_' NUMBER)?
//! ```
//!
//! A `numlit` without a `_<radix>` suffix is read in base 10. The `#`
//! operator converts its left side to the radix named by its right side,
//! which must be a numeric literal.
//!
//! Failures split into two user-visible categories: anything wrong with
//! the input text is a syntax error, anything wrong with the values being
//! combined is a value error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod eval;
pub mod parser;
pub mod token;

pub use error::EvalError;
pub use eval::{eval, eval_str};
pub use parser::{BinaryOp, Expr, Parser, UnaryOp};
pub use token::{tokenize, Token};

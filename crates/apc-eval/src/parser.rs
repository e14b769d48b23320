//! Recursive-descent parsing into an expression tree.

use apc_bignum::{Bignum, RADIX_DEFAULT};

use crate::error::EvalError;
use crate::token::Token;

/// A unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+x`, an identity copy.
    Identity,
    /// `-x`.
    Negate,
}

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `x + y`.
    Add,
    /// `x - y`.
    Sub,
    /// `x * y`.
    Mul,
    /// `x / y`, the floor-division quotient.
    Div,
    /// `x % y`, the floor-division remainder.
    Rem,
    /// `x # r`, conversion of `x` to radix `r`.
    Convert,
}

/// A parsed expression.
///
/// Literals are parsed into [`Bignum`] values while the tree is built, so
/// a malformed literal surfaces as a parse failure, not an evaluation
/// failure.
#[derive(Clone, Debug)]
pub enum Expr {
    /// A numeric literal.
    Literal(Bignum),
    /// A unary operator applied to an operand.
    Unary(UnaryOp, Box<Expr>),
    /// A binary operator applied to two operands.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

/// Recursive-descent parser over a token list.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser over `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a full expression, requiring every token to be consumed.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Syntax`] for any malformed input, including
    /// trailing tokens after a complete expression.
    pub fn parse(mut self) -> Result<Expr, EvalError> {
        let expr = self.parse_expr()?;
        if self.pos < self.tokens.len() {
            return Err(EvalError::syntax("unexpected trailing input"));
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn parse_expr(&mut self) -> Result<Expr, EvalError> {
        let mut expr = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                Some(Token::Percent) => BinaryOp::Rem,
                Some(Token::Hash) => BinaryOp::Convert,
                _ => break,
            };
            self.pos += 1;

            // the conversion target is a literal radix, not a subexpression
            let rhs = if op == BinaryOp::Convert {
                self.parse_numlit()?
            } else {
                self.parse_term()?
            };
            expr = Expr::Binary(op, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Expr, EvalError> {
        let mut term = self.parse_factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;

            let rhs = self.parse_factor()?;
            term = Expr::Binary(op, Box::new(term), Box::new(rhs));
        }
        Ok(term)
    }

    fn parse_factor(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                let arg = self.parse_factor()?;
                Ok(Expr::Unary(UnaryOp::Identity, Box::new(arg)))
            }
            Some(Token::Minus) => {
                self.pos += 1;
                let arg = self.parse_factor()?;
                Ok(Expr::Unary(UnaryOp::Negate, Box::new(arg)))
            }
            Some(Token::Number(_)) => self.parse_numlit(),
            Some(Token::Open) => {
                self.pos += 1;
                let expr = self.parse_expr()?;
                match self.peek() {
                    Some(Token::Close) => {
                        self.pos += 1;
                        Ok(expr)
                    }
                    _ => Err(EvalError::syntax("expected ')'")),
                }
            }
            _ => Err(EvalError::syntax(
                "expected a number, a unary operator or '('",
            )),
        }
    }

    /// `NUMBER ('_' NUMBER)?`; the literal is parsed into a value here.
    fn parse_numlit(&mut self) -> Result<Expr, EvalError> {
        let digits = match self.peek() {
            Some(Token::Number(text)) => text.clone(),
            _ => return Err(EvalError::syntax("expected a number")),
        };
        self.pos += 1;

        let radix = if self.peek() == Some(&Token::Radix) {
            self.pos += 1;
            let raw = match self.peek() {
                Some(Token::Number(text)) => text.clone(),
                _ => return Err(EvalError::syntax("expected a radix after '_'")),
            };
            self.pos += 1;
            raw.parse::<u32>()
                .map_err(|_| EvalError::syntax(format!("{raw:?} is not a radix")))?
        } else {
            RADIX_DEFAULT
        };

        let value = Bignum::from_str_radix(&digits, radix)
            .map_err(|e| EvalError::syntax(e.to_string()))?;
        Ok(Expr::Literal(value))
    }
}

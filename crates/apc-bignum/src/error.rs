//! Error types for the arithmetic engine.

use thiserror::Error;

/// Errors produced by parsing, division and radix conversion.
///
/// All of these are recoverable: the failing operation returns the error as
/// a value and leaves its operands untouched. Radix mismatch between the
/// operands of `+`, `-`, `*` or a comparison is *not* represented here; it
/// is a caller precondition and panics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested radix is outside `[2, 36]`.
    #[error("radix {0} is outside the supported range [2, 36]")]
    RadixOutOfRange(u32),

    /// The input was empty.
    #[error("empty digit string")]
    EmptyInput,

    /// The input was a sign with no digits after it.
    #[error("'-' is not a number")]
    BareSign,

    /// A character is not a digit of the requested radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix it was validated against.
        radix: u32,
    },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The divisor spans more than one limb.
    ///
    /// Only single-limb divisors are supported; general long division is
    /// out of scope.
    #[error("divisor wider than one limb is not supported")]
    UnsupportedDivisor,
}

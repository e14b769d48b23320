//! # apc-bignum
//!
//! Arbitrary-precision signed integer arithmetic for the apc calculator.
//!
//! Numbers carry their radix (any base in `[2, 36]`) and are stored as a
//! sequence of *limbs*: each limb packs as many textual digits as fit in a
//! machine word, so arithmetic works in an effective base far larger than
//! the nominal radix.
//!
//! This crate provides:
//! - Parsing and printing in any radix ([`Bignum::from_str_radix`],
//!   [`Bignum::to_string_radix`])
//! - Negation, addition, subtraction and multiplication via the standard
//!   operator traits
//! - Floor division and remainder for single-limb divisors
//!   ([`Bignum::divmod`])
//! - Radix conversion ([`Bignum::convert`])
//!
//! ## Performance Notes
//!
//! - Values up to a few limbs (the common calculator case) stay inline,
//!   larger ones are heap-allocated
//! - Multiplication is schoolbook; division supports single-limb divisors
//!   only

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arith;
pub mod bignum;
mod convert;
mod div;
pub mod error;
pub mod radix;
mod text;

#[cfg(test)]
mod proptests;

pub use bignum::Bignum;
pub use error::Error;
pub use radix::{RadixEntry, RADIX_DEFAULT, RADIX_MAX, RADIX_MIN};

//! # apc
//!
//! An arbitrary-precision calculator.
//!
//! Values are signed integers of unbounded size in any radix from 2 to
//! 36. The expression language has the four basic operations, remainder,
//! radix literals (`ff_16`) and radix conversion (`255 # 16`).
//!
//! ## Quick Start
//!
//! ```rust
//! use apc::prelude::*;
//!
//! let value = eval_str("999999999999999999999999999999 + 1").unwrap();
//! assert_eq!(
//!     value.to_string_radix(false, false),
//!     "1000000000000000000000000000000"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use apc_bignum as bignum;
pub use apc_eval as eval;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use apc_bignum::{Bignum, Error, RADIX_DEFAULT, RADIX_MAX, RADIX_MIN};
    pub use apc_eval::{eval_str, EvalError};
}

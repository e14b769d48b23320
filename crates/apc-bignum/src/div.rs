//! Floor division and remainder for single-limb divisors.
//!
//! The dividend's limbs are processed most-significant first; each step
//! combines the running remainder with the next limb into a two-limb wide
//! value and divides it by the one-limb divisor. Both parts are bounded by
//! the real base, so the combined value always fits the wide intermediate.
//!
//! Divisors spanning more than one limb are rejected; general long
//! division is out of scope.

use smallvec::smallvec;

use crate::arith;
use crate::bignum::{Bignum, LimbVec};
use crate::error::Error;
use crate::radix::{Limb, RadixEntry, Wide};

/// `(dividend // divisor, dividend % divisor)` with floor semantics.
pub(crate) fn divmod(dividend: &Bignum, divisor: &Bignum) -> Result<(Bignum, Bignum), Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if dividend.is_zero() {
        return Ok((
            Bignum::zero_in(dividend.radix),
            Bignum::zero_in(dividend.radix),
        ));
    }

    assert_eq!(
        dividend.radix, divisor.radix,
        "operands of an arithmetic operation have different radices"
    );

    if divisor.limbs.len() > 1 {
        return Err(Error::UnsupportedDivisor);
    }

    // x // x = 1, x % x = 0
    if dividend == divisor {
        return Ok((
            Bignum::one_in(dividend.radix),
            Bignum::zero_in(dividend.radix),
        ));
    }

    // x // 1 = x, x % 1 = 0
    let limb_divisor = divisor.limbs[0];
    if limb_divisor == 1 && !divisor.negative {
        return Ok((dividend.clone(), Bignum::zero_in(dividend.radix)));
    }

    let radix = dividend.radix;
    let (quotient_limbs, remainder_magnitude) = divqr_limb(dividend, limb_divisor);

    if dividend.negative == divisor.negative {
        // quotient is non-negative; the remainder keeps the shared sign
        let quotient = Bignum::from_parts(false, radix, quotient_limbs);
        let remainder = Bignum::from_parts(
            dividend.negative,
            radix,
            smallvec![remainder_magnitude],
        );
        return Ok((quotient, remainder));
    }

    if remainder_magnitude == 0 {
        let quotient = Bignum::from_parts(true, radix, quotient_limbs);
        return Ok((quotient, Bignum::zero_in(radix)));
    }

    // signs differ and the division is inexact: round the quotient toward
    // negative infinity and give the remainder the divisor's sign
    let truncated = Bignum::from_parts(false, radix, quotient_limbs);
    let quotient = arith::add_magnitudes(&truncated, &Bignum::one_in(radix), true);
    let remainder = Bignum::from_parts(
        divisor.negative,
        radix,
        smallvec![limb_divisor - remainder_magnitude],
    );
    Ok((quotient, remainder))
}

/// Divides `|dividend|` by a single nonzero limb, returning the quotient
/// limbs and the remainder.
pub(crate) fn divqr_limb(dividend: &Bignum, divisor: Limb) -> (LimbVec, Limb) {
    let real_base = Wide::from(RadixEntry::for_valid(dividend.radix).real_base);
    let wide_divisor = Wide::from(divisor);

    let mut quotient: LimbVec = smallvec![0; dividend.limbs.len()];
    let mut remainder: Wide = 0;
    for i in (0..dividend.limbs.len()).rev() {
        let current = remainder * real_base + Wide::from(dividend.limbs[i]);
        quotient[i] = (current / wide_divisor) as Limb;
        remainder = current % wide_divisor;
    }
    (quotient, remainder as Limb)
}

//! Radix conversion.
//!
//! Built on the single-limb division primitive: the magnitude is divided
//! by the target radix over and over, each remainder yielding one digit of
//! the new representation, least-significant first. The collected digits
//! are then packed `width` at a time into limbs of the target radix.
//!
//! Each division step walks every limb of the running quotient, so the
//! total cost is roughly quadratic in the digit count. Fine at calculator
//! scale.

use crate::bignum::{Bignum, LimbVec};
use crate::div::divqr_limb;
use crate::error::Error;
use crate::radix::{Limb, RadixEntry, Wide};

/// Re-expresses `value` in `new_radix`.
pub(crate) fn convert(value: &Bignum, new_radix: u32) -> Result<Bignum, Error> {
    // validate the target before any work
    let entry = RadixEntry::for_radix(new_radix)?;

    if value.radix == new_radix {
        return Ok(value.clone());
    }
    if value.is_zero() {
        return Ok(Bignum::zero_in(new_radix));
    }

    // the target radix is at most 36, far below any real base, so it is
    // always a single limb of the source radix
    let divisor = new_radix as Limb;

    let mut digits: Vec<Limb> = Vec::new();
    let mut quotient = value.clone();
    quotient.negative = false;
    loop {
        if quotient.limbs.len() == 1 && quotient.limbs[0] < divisor {
            // the running quotient is itself a digit: the most significant
            digits.push(quotient.limbs[0]);
            break;
        }
        let (next, digit) = divqr_limb(&quotient, divisor);
        digits.push(digit);
        quotient = Bignum::from_parts(false, value.radix, next);
    }

    // pack the collected digits into limbs of the target radix
    let mut limbs = LimbVec::with_capacity(digits.len() / entry.width + 1);
    for chunk in digits.chunks(entry.width) {
        let mut limb: Wide = 0;
        let mut weight: Wide = 1;
        for &digit in chunk {
            limb += Wide::from(digit) * weight;
            weight *= Wide::from(new_radix);
        }
        limbs.push(limb as Limb);
    }

    Ok(Bignum::from_parts(value.negative, new_radix, limbs))
}

//! Negation, addition, subtraction and multiplication.
//!
//! The signed operations case-split on the operand signs and delegate to
//! unsigned primitives that work on absolute values. All carry and borrow
//! arithmetic runs in a wide intermediate before being reduced modulo the
//! radix's real base, so no limb combination can overflow.

use std::cmp::Ordering;

use smallvec::smallvec;

use crate::bignum::{Bignum, LimbVec};
use crate::radix::{Limb, RadixEntry, Wide};

/// Panics unless both operands share a radix.
///
/// Zero operands are filtered out by the callers before this runs, so a
/// mismatch here is a genuine caller error.
fn require_same_radix(a: &Bignum, b: &Bignum) {
    assert_eq!(
        a.radix, b.radix,
        "operands of an arithmetic operation have different radices"
    );
}

/// `-a`; negating zero is zero.
pub(crate) fn negate(a: &Bignum) -> Bignum {
    if a.is_zero() {
        return a.clone();
    }
    let mut result = a.clone();
    result.negative = !result.negative;
    result
}

/// `a + b`.
pub(crate) fn add(a: &Bignum, b: &Bignum) -> Bignum {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }
    require_same_radix(a, b);

    match (a.negative, b.negative) {
        // a + b
        (false, false) => add_magnitudes(a, b, false),
        // (-a) + (-b) = -(a + b)
        (true, true) => add_magnitudes(a, b, true),
        // (-a) + b = b - a
        (true, false) => sub_magnitudes(b, a),
        // a + (-b) = a - b
        (false, true) => sub_magnitudes(a, b),
    }
}

/// `a - b`.
pub(crate) fn sub(a: &Bignum, b: &Bignum) -> Bignum {
    if a.is_zero() {
        return negate(b);
    }
    if b.is_zero() {
        return a.clone();
    }
    require_same_radix(a, b);

    match (a.negative, b.negative) {
        // a - b
        (false, false) => sub_magnitudes(a, b),
        // (-a) - (-b) = b - a
        (true, true) => sub_magnitudes(b, a),
        // (-a) - b = -(a + b)
        (true, false) => add_magnitudes(a, b, true),
        // a - (-b) = a + b
        (false, true) => add_magnitudes(a, b, false),
    }
}

/// `a * b`; the product's sign is the xor of the operand signs.
pub(crate) fn mul(a: &Bignum, b: &Bignum) -> Bignum {
    if a.is_zero() || b.is_zero() {
        return Bignum::zero_in(a.radix);
    }
    require_same_radix(a, b);

    let negative = a.negative != b.negative;
    let real_base = Wide::from(RadixEntry::for_valid(a.radix).real_base);

    // schoolbook double loop into a limb-indexed accumulator
    let mut limbs: LimbVec = smallvec![0; a.limbs.len() + b.limbs.len() + 2];
    for (i, &da) in a.limbs.iter().enumerate() {
        let mut carry: Wide = 0;
        for (j, &db) in b.limbs.iter().enumerate() {
            let t = Wide::from(da) * Wide::from(db) + Wide::from(limbs[i + j]) + carry;
            limbs[i + j] = (t % real_base) as Limb;
            carry = t / real_base;
        }
        let mut k = i + b.limbs.len();
        while carry > 0 {
            let t = Wide::from(limbs[k]) + carry;
            limbs[k] = (t % real_base) as Limb;
            carry = t / real_base;
            k += 1;
        }
    }

    Bignum::from_parts(negative, a.radix, limbs)
}

/// `|a| + |b|` with an explicit result sign.
pub(crate) fn add_magnitudes(a: &Bignum, b: &Bignum, negative: bool) -> Bignum {
    let (longer, shorter) = if a.limbs.len() >= b.limbs.len() {
        (a, b)
    } else {
        (b, a)
    };
    let real_base = Wide::from(RadixEntry::for_valid(a.radix).real_base);

    // one extra limb for a possible final carry
    let mut limbs = LimbVec::with_capacity(longer.limbs.len() + 1);
    let mut carry: Wide = 0;
    for i in 0..longer.limbs.len() {
        let lhs = Wide::from(longer.limbs[i]);
        let rhs = Wide::from(shorter.limbs.get(i).copied().unwrap_or(0));
        let sum = lhs + rhs + carry;
        limbs.push((sum % real_base) as Limb);
        carry = sum / real_base;
    }
    if carry != 0 {
        limbs.push(carry as Limb);
    }

    Bignum::from_parts(negative, a.radix, limbs)
}

/// `|a| - |b|`, signed by the magnitude comparison.
fn sub_magnitudes(a: &Bignum, b: &Bignum) -> Bignum {
    match a.cmp_magnitude(b) {
        Ordering::Equal => Bignum::zero_in(a.radix),
        Ordering::Greater => sub_magnitudes_ordered(a, b, false),
        Ordering::Less => sub_magnitudes_ordered(b, a, true),
    }
}

/// Borrow propagation; requires `|a| >= |b|`.
fn sub_magnitudes_ordered(a: &Bignum, b: &Bignum, negative: bool) -> Bignum {
    let real_base = Wide::from(RadixEntry::for_valid(a.radix).real_base);

    let mut limbs = LimbVec::with_capacity(a.limbs.len());
    let mut borrow: Wide = 0;
    for i in 0..a.limbs.len() {
        let minuend = Wide::from(a.limbs[i]);
        let subtrahend = Wide::from(b.limbs.get(i).copied().unwrap_or(0)) + borrow;
        if minuend >= subtrahend {
            limbs.push((minuend - subtrahend) as Limb);
            borrow = 0;
        } else {
            limbs.push((minuend + real_base - subtrahend) as Limb);
            borrow = 1;
        }
    }

    Bignum::from_parts(negative, a.radix, limbs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bn(text: &str, radix: u32) -> Bignum {
        Bignum::from_str_radix(text, radix).unwrap()
    }

    #[test]
    fn negation() {
        assert_eq!(-&bn("5", 10), bn("-5", 10));
        assert_eq!(-&bn("-5", 10), bn("5", 10));
        // no negative zero
        let neg_zero = -&Bignum::zero();
        assert!(neg_zero.is_zero());
        assert!(!neg_zero.is_negative());
    }

    #[test]
    fn addition_covers_all_sign_cases() {
        assert_eq!(&bn("7", 10) + &bn("5", 10), bn("12", 10));
        assert_eq!(&bn("-7", 10) + &bn("-5", 10), bn("-12", 10));
        assert_eq!(&bn("-7", 10) + &bn("5", 10), bn("-2", 10));
        assert_eq!(&bn("7", 10) + &bn("-5", 10), bn("2", 10));
        assert_eq!(&bn("-5", 10) + &bn("7", 10), bn("2", 10));
        assert_eq!(&bn("5", 10) + &bn("-7", 10), bn("-2", 10));
        assert_eq!(&bn("5", 10) + &bn("-5", 10), Bignum::zero());
    }

    #[test]
    fn addition_short_circuits_zero() {
        let x = bn("ff", 16);
        assert_eq!(&x + &Bignum::zero(), x);
        assert_eq!(&Bignum::zero() + &x, x);
    }

    #[test]
    fn addition_carries_across_limbs() {
        // 30 nines + 1 = 10^30
        let nines = bn("999999999999999999999999999999", 10);
        let sum = &nines + &bn("1", 10);
        assert_eq!(
            sum.to_string_radix(false, false),
            "1000000000000000000000000000000"
        );
    }

    #[test]
    fn subtraction_covers_all_sign_cases() {
        assert_eq!(&bn("7", 10) - &bn("5", 10), bn("2", 10));
        assert_eq!(&bn("5", 10) - &bn("7", 10), bn("-2", 10));
        assert_eq!(&bn("-7", 10) - &bn("-5", 10), bn("-2", 10));
        assert_eq!(&bn("-5", 10) - &bn("-7", 10), bn("2", 10));
        assert_eq!(&bn("-7", 10) - &bn("5", 10), bn("-12", 10));
        assert_eq!(&bn("7", 10) - &bn("-5", 10), bn("12", 10));
        assert_eq!(&bn("7", 10) - &bn("7", 10), Bignum::zero());
        assert_eq!(&Bignum::zero() - &bn("7", 10), bn("-7", 10));
    }

    #[test]
    fn subtraction_borrows_across_limbs() {
        let x = bn("1000000000000000000000000000000", 10);
        let diff = &x - &bn("1", 10);
        assert_eq!(
            diff.to_string_radix(false, false),
            "999999999999999999999999999999"
        );
    }

    #[test]
    fn multiplication_signs_and_zero() {
        assert_eq!(&bn("6", 10) * &bn("7", 10), bn("42", 10));
        assert_eq!(&bn("-6", 10) * &bn("7", 10), bn("-42", 10));
        assert_eq!(&bn("6", 10) * &bn("-7", 10), bn("-42", 10));
        assert_eq!(&bn("-6", 10) * &bn("-7", 10), bn("42", 10));

        let product = &bn("123", 10) * &Bignum::zero();
        assert!(product.is_zero());
        assert!(!product.is_negative());
    }

    #[test]
    fn multiplication_multi_limb() {
        // (10^18) * (10^18) = 10^36
        let x = bn("1000000000000000000", 10);
        let sq = &x * &x;
        let mut expected = String::from("1");
        expected.push_str(&"0".repeat(36));
        assert_eq!(sq.to_string_radix(false, false), expected);

        // 123456789 * 987654321 = 121932631112635269, and the lhs here
        // is 123456789 * (10^9 + 1)
        let a = bn("123456789123456789", 10);
        let b = bn("987654321", 10);
        assert_eq!(
            (&a * &b).to_string_radix(false, false),
            "121932631234567900112635269"
        );
    }

    #[test]
    fn multiplication_in_high_real_base_radix() {
        // radix 3 has the largest real base; exercises wide carries.
        // (3^39 - 1)^2 = 3^78 - 2*3^39 + 1, whose base-3 digits are
        // thirty-eight 2s, a 1, thirty-eight 0s, a 1.
        let x = bn(&"2".repeat(39), 3);
        let product = &x * &x;
        let expected = format!("{}1{}1", "2".repeat(38), "0".repeat(38));
        assert_eq!(product.to_string_radix(false, false), expected);
    }

    #[test]
    #[should_panic(expected = "different radices")]
    fn mixed_radix_addition_panics() {
        let _ = &bn("5", 10) + &bn("5", 16);
    }
}

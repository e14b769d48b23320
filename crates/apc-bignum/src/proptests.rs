//! Property-based tests for the arithmetic engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Bignum, RADIX_MAX, RADIX_MIN};

    fn any_radix() -> impl Strategy<Value = u32> {
        RADIX_MIN..=RADIX_MAX
    }

    // Large enough to span several limbs in every radix.
    fn any_value() -> impl Strategy<Value = i64> {
        any::<i64>()
    }

    fn small_value() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    fn bn(value: i64, radix: u32) -> Bignum {
        Bignum::from_i64(value, radix).unwrap()
    }

    proptest! {
        // Text round-trip

        #[test]
        fn print_parse_round_trip(value in any_value(), radix in any_radix()) {
            let x = bn(value, radix);
            let text = x.to_string_radix(false, false);
            let reparsed = Bignum::from_str_radix(&text, radix).unwrap();
            prop_assert_eq!(reparsed, x);
        }

        #[test]
        fn uppercase_print_parses_back(value in any_value()) {
            let x = bn(value, 36);
            let text = x.to_string_radix(false, true);
            let reparsed = Bignum::from_str_radix(&text, 36).unwrap();
            prop_assert_eq!(reparsed, x);
        }

        // Ring laws

        #[test]
        fn add_commutative(a in any_value(), b in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let b = bn(b, radix);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(
            a in small_value(),
            b in small_value(),
            c in small_value(),
            radix in any_radix()
        ) {
            let a = bn(a, radix);
            let b = bn(b, radix);
            let c = bn(c, radix);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_identity(a in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            prop_assert_eq!(&a + &Bignum::zero(), a.clone());
            prop_assert_eq!(&Bignum::zero() + &a, a);
        }

        #[test]
        fn sub_is_add_of_negation(a in any_value(), b in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let b = bn(b, radix);
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn additive_inverse(a in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let sum = &a + &(-&a);
            prop_assert!(sum.is_zero());
            prop_assert!(!sum.is_negative());
        }

        #[test]
        fn mul_commutative(a in any_value(), b in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let b = bn(b, radix);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributes_over_add(
            a in small_value(),
            b in small_value(),
            c in small_value(),
            radix in any_radix()
        ) {
            let a = bn(a, radix);
            let b = bn(b, radix);
            let c = bn(c, radix);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn mul_identity(a in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let one = bn(1, radix);
            prop_assert_eq!(&a * &one, a.clone());
            prop_assert_eq!(&one * &a, a);
        }

        #[test]
        fn mul_by_zero_is_canonical_zero(a in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            let product = &a * &Bignum::zero();
            prop_assert!(product.is_zero());
            prop_assert!(!product.is_negative());
        }

        // Sign laws

        #[test]
        fn double_negation(a in any_value(), radix in any_radix()) {
            let a = bn(a, radix);
            prop_assert_eq!(-&(-&a), a);
        }

        // Comparison agrees with the machine integers it came from

        #[test]
        fn ordering_matches_source(a in any_value(), b in any_value(), radix in any_radix()) {
            let ba = bn(a, radix);
            let bb = bn(b, radix);
            prop_assert_eq!(ba.cmp(&bb), a.cmp(&b));
        }

        // Division

        #[test]
        fn divmod_reconstructs_dividend(
            a in any_value(),
            // below the smallest real base, so a single limb in any radix
            d in 1i64..191_102_976i64,
            radix in any_radix()
        ) {
            let dividend = bn(a, radix);
            let divisor = bn(d, radix);

            let (q, r) = dividend.divmod(&divisor).unwrap();
            prop_assert_eq!(&(&q * &divisor) + &r, dividend);

            // positive divisor: remainder in [0, d)
            prop_assert!(!r.is_negative());
            prop_assert!(r < divisor);
        }

        #[test]
        fn division_by_self(a in any_value(), radix in any_radix()) {
            prop_assume!(a != 0);
            let x = bn(a, radix);
            prop_assume!(x.limb_count() == 1);
            let (q, r) = x.divmod(&x).unwrap();
            prop_assert_eq!(q, bn(1, radix));
            prop_assert!(r.is_zero());
        }

        // Radix conversion

        #[test]
        fn conversion_round_trip(
            a in any_value(),
            r1 in any_radix(),
            r2 in any_radix()
        ) {
            let x = bn(a, r1);
            let converted = x.convert(r2).unwrap();
            prop_assert_eq!(converted.radix(), r2);
            prop_assert_eq!(converted.convert(r1).unwrap(), x);
        }

        #[test]
        fn conversion_preserves_u32_value(a in 0i64..4_294_967_296i64, r in any_radix()) {
            let x = bn(a, 10);
            let converted = x.convert(r).unwrap();
            prop_assert_eq!(converted.to_u32(), Some(a as u32));
        }
    }
}
